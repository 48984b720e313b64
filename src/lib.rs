//! Library Catalog Engine
//! # Overview
//!
//! This library tracks a library's book inventory and its borrowers:
//! recording which books exist, which are checked out, computing overdue
//! fees, and producing a textual summary report from CSV sources.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Book, User, errors)
//! - [`collections`] - The ordered container abstraction with its two
//!   backings (direct-access and sequential)
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - The catalog engine: CRUD, checkout/return
//!     transitions, availability queries, closure-based search
//!   - [`core::report`] - Pure report generation over engine state
//! - [`io`] - CSV source loading and report persistence
//! - [`cli`] - CLI argument parsing
//!
//! # Checkout Lifecycle
//!
//! A book is created by catalog load or [`core::LibraryCatalog::add_book`],
//! mutated in place by the checkout/return transitions, and removed by
//! `remove_book`. The catalog and each user's checkout list share ownership
//! of the same records, so engine-side transitions are visible from both
//! sides.
//!
//! # Fees
//!
//! Fees are measured against a single injected reference date: a book out
//! for 31 days or fewer owes the flat $10.00 base fee, and each whole day
//! past the cutoff adds $1.50. A book that is not checked out owes nothing.

// Module declarations
pub mod cli;
pub mod collections;
pub mod core;
pub mod io;
pub mod types;

pub use collections::{ArrayList, LinkedList, OrderedList};
pub use core::{generate_report, CatalogConfig, LibraryCatalog, GENRES};
pub use io::{load_books, load_users, write_report};
pub use types::{Book, BookHandle, BookId, CatalogError, User, UserId, UserRecord};
