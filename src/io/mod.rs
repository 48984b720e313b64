//! I/O module
//!
//! Handles CSV source loading and report persistence.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (raw records, conversion to domain
//!   types, report sink)
//! - `reader` - Streaming readers over the book and user sources

pub mod csv_format;
pub mod reader;

pub use csv_format::{convert_book_record, convert_user_record, write_report};
pub use csv_format::{BookCsvRecord, UserCsvRecord};
pub use reader::{load_books, load_users, BookReader, UserReader};
