//! Core business logic module
//!
//! This module contains the catalog engine and the report pipeline:
//! - `catalog` - The `LibraryCatalog` engine: CRUD, checkout/return
//!   transitions, availability queries, and closure-based search
//! - `report` - Pure report generation over engine state

pub mod catalog;
pub mod report;

pub use catalog::{CatalogConfig, LibraryCatalog};
pub use report::{generate_report, GENRES};
