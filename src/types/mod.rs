//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `book`: Book record, shared handle, and fee computation
//! - `user`: User record and loader-side user row
//! - `error`: Error types for the catalog engine

pub mod book;
pub mod error;
pub mod user;

pub use book::{Book, BookHandle, BookId, LOAN_PERIOD_DAYS};
pub use error::CatalogError;
pub use user::{User, UserId, UserRecord};
