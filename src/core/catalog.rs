//! Catalog engine
//!
//! This module provides the `LibraryCatalog` engine that owns the book list
//! and the user list and serves every query and mutation: CRUD on books,
//! checkout/return state transitions, availability queries, and the closure
//! filter that underlies all searching and reporting.
//!
//! The engine enforces business rules such as:
//! - Monotonic book ID assignment (removed IDs are never reused)
//! - Checkout/return transitions that refuse redundant state changes
//! - User checkout lists resolving to shared handles into the catalog

use crate::collections::{ArrayList, LinkedList};
use crate::types::{Book, BookHandle, BookId, CatalogError, User, UserRecord};
use chrono::NaiveDate;
use std::rc::Rc;

/// Engine configuration
///
/// Carries the reference "current date" every fee and checkout-date
/// computation is measured against. Injected rather than read from a clock
/// so the engine is deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogConfig {
    /// The reference date for checkouts and fee computation
    pub today: NaiveDate,
}

impl CatalogConfig {
    /// Create a configuration with an explicit reference date
    pub fn new(today: NaiveDate) -> Self {
        CatalogConfig { today }
    }
}

impl Default for CatalogConfig {
    /// The stock reference date, 2023-09-15
    fn default() -> Self {
        CatalogConfig {
            today: NaiveDate::from_ymd_opt(2023, 9, 15).expect("valid calendar date"),
        }
    }
}

/// The library's catalog engine
///
/// Owns two ordered containers: the book catalog (direct-access backing,
/// since positional and ID lookups dominate) and the user list (sequential
/// backing, built once and iterated). Single caller at a time by contract;
/// no locking.
pub struct LibraryCatalog {
    /// Books the library owns, in load/insertion order
    catalog: ArrayList<BookHandle>,

    /// The library's clients
    users: LinkedList<User>,

    /// Injected reference-date configuration
    config: CatalogConfig,

    /// Next book ID to hand out
    ///
    /// Seeded with `max(loaded id) + 1`, which is `size + 1` for the dense
    /// ID ranges the CSV sources use. Never decremented, so removed IDs are
    /// never reused.
    next_id: BookId,
}

impl LibraryCatalog {
    /// Create an empty catalog engine
    pub fn new(config: CatalogConfig) -> Self {
        LibraryCatalog {
            catalog: ArrayList::new(),
            users: LinkedList::new(),
            config,
            next_id: 1,
        }
    }

    /// Build the engine from pre-parsed book and user records
    ///
    /// Each user row's book IDs are resolved into shared handles over the
    /// already-loaded books, by ID lookup. Changes made through the engine
    /// are therefore visible through the user's checkout list and vice
    /// versa.
    ///
    /// # Arguments
    ///
    /// * `books` - Parsed book records, supplied by the external loader
    /// * `users` - Parsed user rows with unresolved book IDs
    /// * `config` - Reference-date configuration
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownBook`] if a user row references a
    /// book ID not present in `books`.
    pub fn from_records(
        books: Vec<Book>,
        users: Vec<UserRecord>,
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let mut engine = LibraryCatalog::new(config);

        for book in books {
            engine.next_id = engine.next_id.max(book.id + 1);
            engine.catalog.push(book.into_handle());
        }

        for record in users {
            let mut user = User::new(record.id, record.name);
            for book_id in record.book_ids {
                let handle = engine
                    .find_book(book_id)
                    .ok_or_else(|| CatalogError::unknown_book(user.id, book_id))?;
                user.checked_out.push(handle);
            }
            engine.users.push(user);
        }

        Ok(engine)
    }

    /// The engine's reference-date configuration
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The library's book catalog
    pub fn books(&self) -> &ArrayList<BookHandle> {
        &self.catalog
    }

    /// The library's user list
    pub fn users(&self) -> &LinkedList<User> {
        &self.users
    }

    /// Look up a book by ID
    ///
    /// Linear scan in catalog order; returns a shared handle, so the caller
    /// can observe or mutate the same record the catalog holds.
    pub fn find_book(&self, id: BookId) -> Option<BookHandle> {
        self.catalog
            .iter()
            .find(|handle| handle.borrow().id == id)
            .map(Rc::clone)
    }

    /// Add a new book to the catalog
    ///
    /// The ID comes from the monotonic counter (`size + 1` on a dense
    /// catalog with no removals). The book starts not checked out, with its
    /// last-checkout date set to the reference date. No uniqueness check is
    /// made on title or author.
    ///
    /// # Arguments
    ///
    /// * `title` - The book's title
    /// * `author` - The book's author
    /// * `genre` - The book's genre
    ///
    /// # Returns
    ///
    /// The ID assigned to the new book
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> BookId {
        let id = self.next_id;
        self.next_id += 1;

        let mut book = Book::new(id, title, author, genre);
        book.last_checkout = Some(self.config.today);
        self.catalog.push(book.into_handle());
        id
    }

    /// Remove the first book with the given ID from the catalog
    ///
    /// Silent no-op when no book matches. The ID is not recycled. A user
    /// whose checkout list references the book keeps its handle; the record
    /// simply leaves the catalog.
    pub fn remove_book(&mut self, id: BookId) {
        if let Some(index) = self.catalog.iter().position(|h| h.borrow().id == id) {
            self.catalog.remove_at(index);
        }
    }

    /// Check a book out of the library
    ///
    /// Sets the checked-out flag and stamps the last-checkout date with the
    /// reference date.
    ///
    /// # Returns
    ///
    /// `true` if the book was found and was not already checked out;
    /// `false` otherwise, leaving all state unchanged.
    pub fn check_out_book(&mut self, id: BookId) -> bool {
        match self.find_book(id) {
            Some(handle) => {
                let mut book = handle.borrow_mut();
                if book.checked_out {
                    false
                } else {
                    book.checked_out = true;
                    book.last_checkout = Some(self.config.today);
                    true
                }
            }
            None => false,
        }
    }

    /// Return a book to the library
    ///
    /// Clears the checked-out flag. The last-checkout date is kept as
    /// historical data; the fee invariant (not checked out owes nothing)
    /// makes the stale value irrelevant.
    ///
    /// # Returns
    ///
    /// `true` if the book was found and was checked out; `false` otherwise,
    /// leaving all state unchanged.
    pub fn return_book(&mut self, id: BookId) -> bool {
        match self.find_book(id) {
            Some(handle) => {
                let mut book = handle.borrow_mut();
                if book.checked_out {
                    book.checked_out = false;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    /// Whether the book with the given ID is available for checkout
    ///
    /// Returns `false` both for a checked-out book and for an unknown ID;
    /// the two cases are deliberately conflated, matching the observed
    /// behavior this engine preserves. Callers that need the distinction
    /// use [`find_book`](Self::find_book).
    pub fn get_book_availability(&self, id: BookId) -> bool {
        self.find_book(id)
            .is_some_and(|handle| !handle.borrow().checked_out)
    }

    /// Count catalog entries whose title exactly equals `title`
    ///
    /// Case-sensitive, exact string match.
    pub fn book_count(&self, title: &str) -> usize {
        self.search_for_books(|book| book.title == title).len()
    }

    /// Filter the catalog with a predicate
    ///
    /// The sole search primitive; counting and reporting are built on it.
    /// Matches come back in catalog order in a sequential-backing list.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Closure deciding whether a book is kept
    pub fn search_for_books<F>(&self, predicate: F) -> LinkedList<BookHandle>
    where
        F: Fn(&Book) -> bool,
    {
        let mut matches = LinkedList::new();
        for handle in self.catalog.iter() {
            if predicate(&handle.borrow()) {
                matches.push(Rc::clone(handle));
            }
        }
        matches
    }

    /// Filter the user list with a predicate
    ///
    /// Matches come back in user-list order in a sequential-backing list.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Closure deciding whether a user is kept
    pub fn search_for_users<F>(&self, predicate: F) -> LinkedList<&User>
    where
        F: Fn(&User) -> bool,
    {
        let mut matches = LinkedList::new();
        for user in self.users.iter() {
            if predicate(user) {
                matches.push(user);
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_books() -> Vec<Book> {
        let mut out_book = Book::new(2, "Emma", "Jane Austen", "Classics");
        out_book.checked_out = true;
        out_book.last_checkout = Some(date(2023, 8, 1));

        vec![
            Book::new(1, "Dune", "Frank Herbert", "Science Fiction"),
            out_book,
            Book::new(3, "Dune", "Frank Herbert", "Science Fiction"),
        ]
    }

    fn sample_engine() -> LibraryCatalog {
        let users = vec![
            UserRecord {
                id: 1,
                name: "Jane Doe".to_string(),
                book_ids: vec![2],
            },
            UserRecord {
                id: 2,
                name: "John Roe".to_string(),
                book_ids: vec![],
            },
        ];
        LibraryCatalog::from_records(sample_books(), users, CatalogConfig::default()).unwrap()
    }

    #[test]
    fn test_from_records_resolves_user_books_to_shared_handles() {
        let engine = sample_engine();
        let user = engine.users().get(0);

        assert_eq!(user.checked_out.len(), 1);
        assert_eq!(user.checked_out.get(0).borrow().id, 2);
        // Same record, not a copy
        assert!(Rc::ptr_eq(
            user.checked_out.get(0),
            &engine.find_book(2).unwrap()
        ));
    }

    #[test]
    fn test_from_records_rejects_unknown_book_reference() {
        let users = vec![UserRecord {
            id: 7,
            name: "Jane Doe".to_string(),
            book_ids: vec![99],
        }];
        let result = LibraryCatalog::from_records(sample_books(), users, CatalogConfig::default());

        assert_eq!(result.err(), Some(CatalogError::unknown_book(7, 99)));
    }

    #[test]
    fn test_add_book_assigns_next_id() {
        let mut engine = sample_engine();
        let id = engine.add_book("The Hobbit", "J.R.R. Tolkien", "Adventure");

        assert_eq!(id, 4); // catalog had 3 books
        let book = engine.find_book(4).unwrap();
        assert!(!book.borrow().checked_out);
        assert_eq!(book.borrow().last_checkout, Some(date(2023, 9, 15)));
    }

    #[test]
    fn test_removed_ids_are_never_reused() {
        let mut engine = sample_engine();
        engine.remove_book(3);

        let id = engine.add_book("The Hobbit", "J.R.R. Tolkien", "Adventure");
        assert_eq!(id, 4);
        assert!(engine.find_book(3).is_none());
    }

    #[test]
    fn test_remove_book_is_a_silent_noop_when_absent() {
        let mut engine = sample_engine();
        engine.remove_book(99);
        assert_eq!(engine.books().len(), 3);
    }

    #[test]
    fn test_check_out_book_stamps_reference_date() {
        let config = CatalogConfig::new(date(2024, 1, 1));
        let mut engine = LibraryCatalog::from_records(sample_books(), vec![], config).unwrap();

        assert!(engine.check_out_book(1));

        let book = engine.find_book(1).unwrap();
        assert!(book.borrow().checked_out);
        assert_eq!(book.borrow().last_checkout, Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_check_out_book_refuses_already_checked_out() {
        let mut engine = sample_engine();

        assert!(!engine.check_out_book(2));
        // The original checkout date must be untouched
        let book = engine.find_book(2).unwrap();
        assert_eq!(book.borrow().last_checkout, Some(date(2023, 8, 1)));
    }

    #[rstest]
    #[case::unknown_id(99)]
    fn test_check_out_book_unknown_id_returns_false(#[case] id: BookId) {
        let mut engine = sample_engine();
        assert!(!engine.check_out_book(id));
    }

    #[test]
    fn test_return_book_keeps_last_checkout_as_history() {
        let mut engine = sample_engine();

        assert!(engine.return_book(2));

        let book = engine.find_book(2).unwrap();
        assert!(!book.borrow().checked_out);
        assert_eq!(book.borrow().last_checkout, Some(date(2023, 8, 1)));
    }

    #[rstest]
    #[case::not_checked_out(1)]
    #[case::unknown_id(99)]
    fn test_return_book_refusals(#[case] id: BookId) {
        let mut engine = sample_engine();
        assert!(!engine.return_book(id));
    }

    #[rstest]
    #[case::available(1, true)]
    #[case::checked_out(2, false)]
    #[case::unknown_conflated_with_checked_out(99, false)]
    fn test_get_book_availability(#[case] id: BookId, #[case] expected: bool) {
        let engine = sample_engine();
        assert_eq!(engine.get_book_availability(id), expected);
    }

    #[rstest]
    #[case::two_copies("Dune", 2)]
    #[case::one_copy("Emma", 1)]
    #[case::case_sensitive("dune", 0)]
    #[case::absent("Moby Dick", 0)]
    fn test_book_count_exact_title_match(#[case] title: &str, #[case] expected: usize) {
        let engine = sample_engine();
        assert_eq!(engine.book_count(title), expected);
    }

    #[test]
    fn test_search_for_books_preserves_catalog_order() {
        let engine = sample_engine();
        let matches = engine.search_for_books(|b| b.genre == "Science Fiction");

        let ids: Vec<BookId> = matches.iter().map(|h| h.borrow().id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_for_books_empty_when_nothing_matches() {
        let engine = sample_engine();
        assert!(engine.search_for_books(|b| b.genre == "Mystery").is_empty());
    }

    #[test]
    fn test_search_for_users_by_checkout_state() {
        let engine = sample_engine();
        let borrowers = engine.search_for_users(|u| u.has_checked_out_books());

        assert_eq!(borrowers.len(), 1);
        assert_eq!(borrowers.get(0).name, "Jane Doe");
    }

    #[test]
    fn test_engine_return_is_visible_through_user_list() {
        let mut engine = sample_engine();
        assert!(engine.return_book(2));

        let user = engine.users().get(0);
        assert!(!user.checked_out.get(0).borrow().checked_out);
        assert_eq!(user.total_fees(engine.config().today), Decimal::ZERO);
    }
}
