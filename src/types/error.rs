//! Error types for the library catalog engine
//!
//! This module defines all error types that can occur while loading the
//! catalog and user CSV sources and constructing the engine.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Source file not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid field values, etc.
//! - **Record Errors**: Bad dates or flags on a book row, bad book
//!   references on a user row
//!
//! Not-found conditions on engine operations (`remove_book`,
//! `check_out_book`, `return_book`, `get_book_availability`) are not errors:
//! they are silent no-ops or `false` returns by contract.

use thiserror::Error;

/// Main error type for the catalog engine
///
/// This enum represents all possible errors that can occur while loading
/// records and building the catalog. Each variant includes relevant context
/// to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A required CSV source file was not found
    ///
    /// This is a fatal error that prevents the catalog from being built.
    /// Both the book source and the user source get this guard.
    #[error("Source file not found: {path}")]
    SourceNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading a source or writing the report
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed row is skipped and
    /// loading continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A book row carried an unparseable last-checkout date
    ///
    /// Dates must be `YYYY-MM-DD` or empty. This is a recoverable error -
    /// the row is skipped.
    #[error("Invalid last-checkout date '{value}' for book {id}")]
    InvalidDate {
        /// The unparseable date text
        value: String,
        /// The book ID from the row
        id: u32,
    },

    /// A book row carried an unparseable checked-out flag
    ///
    /// The flag must be `true` or `false` (any case). This is a recoverable
    /// error - the row is skipped.
    #[error("Invalid checked-out flag '{value}' for book {id}")]
    InvalidFlag {
        /// The unparseable flag text
        value: String,
        /// The book ID from the row
        id: u32,
    },

    /// A user row carried a book reference that is not an integer
    ///
    /// This is a recoverable error - the row is skipped.
    #[error("Invalid book reference '{value}' for user {id}")]
    InvalidBookRef {
        /// The unparseable book ID text
        value: String,
        /// The user ID from the row
        id: u32,
    },

    /// A user row references a book ID that is not in the catalog
    ///
    /// User checkout lists must resolve against books present at load time.
    /// This is a fatal error during catalog construction.
    #[error("User {user} references unknown book {book}")]
    UnknownBook {
        /// The user ID whose list failed to resolve
        user: u32,
        /// The book ID that was not found
        book: u32,
    },
}

// Conversion from io::Error to CatalogError
impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        CatalogError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to CatalogError
impl From<csv::Error> for CatalogError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        CatalogError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CatalogError {
    /// Create a SourceNotFound error
    pub fn source_not_found(path: &str) -> Self {
        CatalogError::SourceNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str, id: u32) -> Self {
        CatalogError::InvalidDate {
            value: value.to_string(),
            id,
        }
    }

    /// Create an InvalidFlag error
    pub fn invalid_flag(value: &str, id: u32) -> Self {
        CatalogError::InvalidFlag {
            value: value.to_string(),
            id,
        }
    }

    /// Create an InvalidBookRef error
    pub fn invalid_book_ref(value: &str, id: u32) -> Self {
        CatalogError::InvalidBookRef {
            value: value.to_string(),
            id,
        }
    }

    /// Create an UnknownBook error
    pub fn unknown_book(user: u32, book: u32) -> Self {
        CatalogError::UnknownBook { user, book }
    }
}
