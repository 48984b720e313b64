//! Sequential ordered container
//!
//! Singly linked sequence with O(1) append and prepend and O(n) positional
//! access. Backs freshly built search-result lists and per-user checkout
//! lists, which are constructed once by repeated appends and then only
//! iterated.
//!
//! # Storage
//!
//! Nodes live in a `Vec` arena and link to each other by slot index rather
//! than by pointer. Removed slots go on a free list and are reused by later
//! allocations, so the arena does not grow under churn. This keeps the O(1)
//! tail append of a classic linked list in safe code.

use super::OrderedList;

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    next: Option<usize>,
}

/// Ordered container backed by an arena-allocated singly linked list
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        LinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Place an item in a fresh or recycled slot and return the slot index
    fn alloc(&mut self, item: T) -> usize {
        let node = Node { item, next: None };
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, slot: usize) -> &Node<T> {
        self.slots[slot].as_ref().expect("occupied slot")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        self.slots[slot].as_mut().expect("occupied slot")
    }

    /// Walk the chain to the slot holding position `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn slot_at(&self, index: usize) -> usize {
        assert!(
            index < self.len,
            "index {} out of bounds for list of length {}",
            index,
            self.len
        );
        let mut slot = self.head.expect("non-empty list has a head");
        for _ in 0..index {
            slot = self.node(slot).next.expect("chain reaches every index");
        }
        slot
    }

    /// Borrow the element at `index` (walks the chain)
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> &T {
        &self.node(self.slot_at(index)).item
    }

    /// Mutably borrow the element at `index` (walks the chain)
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        let slot = self.slot_at(index);
        &mut self.node_mut(slot).item
    }

    /// Append an element at the end of the list in O(1)
    pub fn push(&mut self, item: T) {
        let slot = self.alloc(item);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepend an element at the front of the list in O(1)
    pub fn push_front(&mut self, item: T) {
        let slot = self.alloc(item);
        self.node_mut(slot).next = self.head;
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
        self.len += 1;
    }

    /// Insert an element at `index`; `index == len` appends
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        assert!(
            index <= self.len,
            "insert index {} out of bounds for list of length {}",
            index,
            self.len
        );
        if index == 0 {
            self.push_front(item);
        } else if index == self.len {
            self.push(item);
        } else {
            let prev = self.slot_at(index - 1);
            let slot = self.alloc(item);
            self.node_mut(slot).next = self.node(prev).next;
            self.node_mut(prev).next = Some(slot);
            self.len += 1;
        }
    }

    /// Remove and return the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "index {} out of bounds for list of length {}",
            index,
            self.len
        );

        let slot = if index == 0 {
            let slot = self.head.expect("non-empty list has a head");
            self.head = self.node(slot).next;
            if self.head.is_none() {
                self.tail = None;
            }
            slot
        } else {
            let prev = self.slot_at(index - 1);
            let slot = self.node(prev).next.expect("chain reaches every index");
            let next = self.node(slot).next;
            self.node_mut(prev).next = next;
            if next.is_none() {
                self.tail = Some(prev);
            }
            slot
        };

        self.len -= 1;
        self.free.push(slot);
        self.slots[slot].take().expect("occupied slot").item
    }

    /// Iterate the elements in positional order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> OrderedList<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get(&self, index: usize) -> &T {
        LinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> &mut T {
        LinkedList::get_mut(self, index)
    }

    fn push(&mut self, item: T) {
        LinkedList::push(self, item)
    }

    fn push_front(&mut self, item: T) {
        LinkedList::push_front(self, item)
    }

    fn insert(&mut self, index: usize, item: T) {
        LinkedList::insert(self, index, item)
    }

    fn remove_at(&mut self, index: usize) -> T {
        LinkedList::remove_at(self, index)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        LinkedList::iter(self)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

/// Forward iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.cursor?;
        let node = self.list.slots[slot].as_ref().expect("occupied slot");
        self.cursor = node.next;
        Some(&node.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_in_order() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_push_front_prepends() {
        let mut list = LinkedList::new();
        list.push(2);
        list.push_front(1);
        list.push(3);

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_walks_the_chain() {
        let list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(*list.get(0), "a");
        assert_eq!(*list.get(2), "c");
    }

    #[test]
    fn test_remove_at_head_middle_tail() {
        let mut list: LinkedList<i32> = [1, 2, 3, 4, 5].into_iter().collect();

        assert_eq!(list.remove_at(0), 1); // head
        assert_eq!(list.remove_at(1), 3); // middle
        assert_eq!(list.remove_at(2), 5); // tail
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 4]);

        // Tail pointer must still be valid after removing the old tail
        list.push(6);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_remove_last_element_resets_list() {
        let mut list: LinkedList<i32> = [9].into_iter().collect();
        assert_eq!(list.remove_at(0), 9);
        assert!(list.is_empty());

        // Both ends must be usable again from empty
        list.push_front(1);
        list.push(2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
        list.insert(1, 2);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list: LinkedList<i32> = (0..4).collect();
        for _ in 0..4 {
            list.remove_at(0);
        }
        let slots_before = list.slots.len();

        for n in 0..4 {
            list.push(n);
        }
        assert_eq!(list.slots.len(), slots_before);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let list: LinkedList<i32> = LinkedList::new();
        list.get(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_insert_past_end_panics() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list.insert(1, 10);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_at_out_of_bounds_panics() {
        let mut list: LinkedList<i32> = [1].into_iter().collect();
        list.remove_at(1);
    }
}
