//! CSV format handling for the book and user sources and the report sink
//!
//! This module centralizes all CSV format concerns, providing:
//! - Raw record structures for deserialization
//! - Conversion from raw records to domain types
//! - The report sink writer
//!
//! All conversion functions are pure (no I/O) for easy testing.
//!
//! # Source formats
//!
//! Book source, header row `id,title,author,genre,last_check_out,checked_out`:
//! the date is `YYYY-MM-DD` or empty, the flag is `true`/`false` (any case).
//!
//! User source, header row `id,name,books`: the books field is a
//! space-separated run of book IDs wrapped in braces (`{1 2 3}`), or empty
//! for a user holding nothing.

use crate::types::{Book, BookId, CatalogError, UserRecord};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Write;

/// Raw book row as deserialized from the book source
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookCsvRecord {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub last_check_out: Option<String>,
    pub checked_out: String,
}

/// Raw user row as deserialized from the user source
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UserCsvRecord {
    pub id: u32,
    pub name: String,
    pub books: Option<String>,
}

/// Convert a raw book row to a domain [`Book`]
///
/// This function:
/// - Parses the last-checkout field into a `NaiveDate` (empty means absent)
/// - Parses the checked-out flag, case-insensitively
///
/// # Arguments
///
/// * `record` - The deserialized book row
///
/// # Errors
///
/// Returns [`CatalogError::InvalidDate`] or [`CatalogError::InvalidFlag`]
/// when the respective field cannot be parsed.
pub fn convert_book_record(record: BookCsvRecord) -> Result<Book, CatalogError> {
    let last_checkout = match record.last_check_out {
        Some(text) if !text.trim().is_empty() => {
            let parsed = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .map_err(|_| CatalogError::invalid_date(&text, record.id))?;
            Some(parsed)
        }
        _ => None,
    };

    let checked_out = match record.checked_out.trim().to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => return Err(CatalogError::invalid_flag(&record.checked_out, record.id)),
    };

    Ok(Book {
        id: record.id,
        title: record.title,
        author: record.author,
        genre: record.genre,
        last_checkout,
        checked_out,
    })
}

/// Convert a raw user row to a domain [`UserRecord`]
///
/// The books field carries the IDs of the user's checked-out books as a
/// brace-wrapped, space-separated run (`{1 2 3}`). An empty or absent field
/// is a user holding nothing. Resolution of IDs into shared book handles
/// happens later, at engine construction.
///
/// # Arguments
///
/// * `record` - The deserialized user row
///
/// # Errors
///
/// Returns [`CatalogError::InvalidBookRef`] when a book reference is not an
/// integer.
pub fn convert_user_record(record: UserCsvRecord) -> Result<UserRecord, CatalogError> {
    let mut book_ids: Vec<BookId> = Vec::new();

    if let Some(books) = &record.books {
        let inner = books.trim().trim_start_matches('{').trim_end_matches('}');
        for token in inner.split_whitespace() {
            let id = token
                .parse::<BookId>()
                .map_err(|_| CatalogError::invalid_book_ref(token, record.id))?;
            book_ids.push(id);
        }
    }

    Ok(UserRecord {
        id: record.id,
        name: record.name,
        book_ids,
    })
}

/// Write the composed report text to the given sink
///
/// The report is produced by [`crate::core::generate_report`]; this function
/// is the thin persistence boundary around it.
///
/// # Arguments
///
/// * `report` - The report text to persist
/// * `output` - Mutable reference to any writer (file, stdout, buffer)
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the write or flush fails.
pub fn write_report(report: &str, output: &mut dyn Write) -> Result<(), CatalogError> {
    output.write_all(report.as_bytes())?;
    output.flush()?;
    Ok(())
}
