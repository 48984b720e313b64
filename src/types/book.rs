//! Book record type and fee computation
//!
//! This module defines the `Book` structure, the shared `BookHandle` used to
//! give the catalog and user checkout lists one view of the same record, and
//! the overdue fee computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Book identifier
///
/// Unique within the catalog; assigned by the engine at insertion time and
/// never reassigned.
pub type BookId = u32;

/// Number of days a book may be out before daily charges accrue
pub const LOAN_PERIOD_DAYS: i64 = 31;

/// Shared-ownership handle to a book record
///
/// The catalog's book list and each user's checkout list hold clones of the
/// same handle, so a checkout or return performed through the engine is
/// visible from both sides. `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>`
/// because the engine offers no concurrent access contract.
pub type BookHandle = Rc<RefCell<Book>>;

/// A book owned by the library
///
/// Genre is free text drawn from a fixed vocabulary (Adventure, Fiction,
/// Classics, Mystery, Science Fiction) but deliberately not a closed enum:
/// report generation produces a zero count for absent genres and an
/// unrecognized genre still counts toward the catalog total.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Unique number that identifies the book
    pub id: BookId,

    /// Name of the book
    pub title: String,

    /// Who authored the book
    pub author: String,

    /// What genre the book belongs to
    pub genre: String,

    /// The date the book was last borrowed
    ///
    /// Only meaningful while `checked_out` is true. A returned book keeps
    /// its last checkout date as historical data; the fee invariant makes
    /// the stale value irrelevant.
    pub last_checkout: Option<NaiveDate>,

    /// Whether the book is currently checked out of the library
    pub checked_out: bool,
}

impl Book {
    /// Create a new book that is not checked out
    ///
    /// # Arguments
    ///
    /// * `id` - Unique book identifier
    /// * `title` - The book's title
    /// * `author` - The book's author
    /// * `genre` - The book's genre
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            last_checkout: None,
            checked_out: false,
        }
    }

    /// Wrap this book in a shared handle
    pub fn into_handle(self) -> BookHandle {
        Rc::new(RefCell::new(self))
    }

    /// Compute the fee owed on this book relative to a reference date
    ///
    /// A book that is not checked out owes nothing, regardless of any stale
    /// last-checkout date. A checked-out book owes a flat $10.00 while still
    /// within the 31-day loan window, and $10.00 plus $1.50 per whole day
    /// past the cutoff afterwards. The fee is never negative and has no cap.
    ///
    /// # Arguments
    ///
    /// * `today` - The reference date fees are measured against
    ///
    /// # Returns
    ///
    /// The fee owed, in dollars with two decimal places
    pub fn calculate_fees(&self, today: NaiveDate) -> Decimal {
        if !self.checked_out {
            return Decimal::ZERO;
        }

        let base_fee = Decimal::new(1000, 2); // $10.00
        let daily_fee = Decimal::new(150, 2); // $1.50

        let Some(checkout_date) = self.last_checkout else {
            // Checked out but never dated: nothing to measure against
            return Decimal::ZERO;
        };

        let days_out = (today - checkout_date).num_days();
        let days_overdue = days_out - LOAN_PERIOD_DAYS;

        if days_overdue > 0 {
            base_fee + daily_fee * Decimal::from(days_overdue)
        } else {
            base_fee
        }
    }
}

impl fmt::Display for Book {
    /// Format as `{TITLE} BY {AUTHOR}`, both fields upper-cased
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} BY {}",
            self.title.to_uppercase(),
            self.author.to_uppercase()
        )
    }
}
