//! User record types
//!
//! This module defines the library's `User` record and the intermediate
//! `UserRecord` produced by the CSV loader before book references are
//! resolved into shared handles.

use super::book::{BookHandle, BookId};
use crate::collections::LinkedList;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// User identifier
///
/// Provided by the user source at load time, not engine-assigned.
pub type UserId = u32;

/// A library client
///
/// The checkout list holds shared handles into the catalog's book records,
/// not copies: a checkout or return performed through the engine is visible
/// here too. Membership of the list is fixed at load time; engine
/// transitions change book state but do not add or remove entries.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique number that identifies the user
    pub id: UserId,

    /// Full name of the user
    pub name: String,

    /// Books the user has currently checked out
    ///
    /// Sequential container: built once by repeated appends at load time,
    /// then only iterated.
    pub checked_out: LinkedList<BookHandle>,
}

impl User {
    /// Create a user with an empty checkout list
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            checked_out: LinkedList::new(),
        }
    }

    /// Sum the fees owed on every book in this user's checkout list
    ///
    /// # Arguments
    ///
    /// * `today` - The reference date fees are measured against
    pub fn total_fees(&self, today: NaiveDate) -> Decimal {
        self.checked_out
            .iter()
            .map(|book| book.borrow().calculate_fees(today))
            .sum()
    }

    /// Whether the user currently holds at least one book
    pub fn has_checked_out_books(&self) -> bool {
        !self.checked_out.is_empty()
    }
}

/// A user row as loaded from the user source, before resolution
///
/// Book IDs are resolved into shared `BookHandle`s when the catalog engine
/// is constructed; until then the row is self-contained.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Unique number that identifies the user
    pub id: UserId,

    /// Full name of the user
    pub name: String,

    /// IDs of the books the user has currently checked out
    pub book_ids: Vec<BookId>,
}
