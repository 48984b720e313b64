//! Direct-access ordered container
//!
//! Contiguous growable storage over `Vec`. Indexed access and append are
//! amortized O(1); `insert` and `remove_at` shift trailing elements. Backs
//! the book catalog, where lookups by position dominate and the size is
//! relatively stable.

use super::OrderedList;

/// Ordered container backed by contiguous storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        ArrayList { items: Vec::new() }
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Mutably borrow the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }

    /// Append an element at the end of the list
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Prepend an element, shifting every existing element right
    pub fn push_front(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Insert an element at `index`, shifting everything after it
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Remove and return the element at `index`, shifting the rest left
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Iterate the elements in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> OrderedList<T> for ArrayList<T> {
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn get(&self, index: usize) -> &T {
        ArrayList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> &mut T {
        ArrayList::get_mut(self, index)
    }

    fn push(&mut self, item: T) {
        ArrayList::push(self, item)
    }

    fn push_front(&mut self, item: T) {
        ArrayList::push_front(self, item)
    }

    fn insert(&mut self, index: usize, item: T) {
        ArrayList::insert(self, index, item)
    }

    fn remove_at(&mut self, index: usize) -> T {
        ArrayList::remove_at(self, index)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        ArrayList::iter(self)
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayList {
            items: iter.into_iter().collect(),
        }
    }
}
