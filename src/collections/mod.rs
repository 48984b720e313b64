//! Ordered container abstraction
//!
//! The engine stores its records in ordered sequences with two different
//! access patterns: the book catalog is scanned and indexed in place, while
//! search results and per-user checkout lists are built once by repeated
//! appends and then only iterated. One contract covers both:
//!
//! - `array_list` - Contiguous growable storage with O(1) indexed access;
//!   insert and remove shift trailing elements
//! - `linked_list` - Singly linked sequence with O(1) append and prepend;
//!   positional access walks the chain
//!
//! The backing is chosen per use-site by the engine at construction time and
//! is never a caller-visible choice.
//!
//! # Out-of-bounds access
//!
//! Indexing past the end of a list is a programming error, not a business
//! error: `get` and `remove_at` panic when `index >= len`, and `insert`
//! panics when `index > len`, matching the standard library's slice and
//! `Vec` semantics.

pub mod array_list;
pub mod linked_list;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;

/// Contract shared by every ordered container backing
///
/// Forward iteration yields each element exactly once in positional order,
/// which always matches insertion/append order as of the most recent
/// mutation.
pub trait OrderedList<T> {
    /// Number of elements in the list
    fn len(&self) -> usize;

    /// Whether the list holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn get(&self, index: usize) -> &T;

    /// Mutably borrow the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn get_mut(&mut self, index: usize) -> &mut T;

    /// Append an element at the end of the list
    fn push(&mut self, item: T);

    /// Prepend an element at the front of the list
    fn push_front(&mut self, item: T);

    /// Insert an element at `index`, shifting everything after it
    ///
    /// `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, item: T);

    /// Remove and return the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn remove_at(&mut self, index: usize) -> T;

    /// Iterate the elements in positional order
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}
