//! Doubly-linked list with arena-backed nodes and positional access.
//!
//! Nodes live in a [`slab::Slab`] owned by the list. Each node carries its
//! value plus `prev`/`next` links naming neighbouring slots. The links
//! are structural only: the slab owns every node, so there are no ownership
//! cycles and splicing a node out is O(1) once it has been located.
//!
//! Node keys are never handed to the caller. All access is by position
//! (0-based from the front) or at the two ends.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front` / `push_back` | O(1) |
//! | `pop_front` / `pop_back` | O(1) |
//! | `get` / `set` / `remove` / `insert` | O(index) |
//! | `len` | O(1) |
//!
//! # Example
//!
//! ```
//! use nexus_containers::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(20);
//! list.push_back(35);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 20, 35]);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![35, 20, 1]);
//!
//! assert_eq!(list.remove(1), Ok(20));
//! assert_eq!(list.get(1), Ok(&35));
//! ```

use core::fmt;
use core::iter::FusedIterator;

use slab::Slab;

use crate::error::{Error, Result};
use crate::link::Link;

/// A list node: the value plus its structural neighbours.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// A doubly-linked list.
///
/// Removal from an empty list and out-of-range positional access are
/// reported as [`Error`]s; nothing in this type panics on bad input.
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: Link,
    tail: Link,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Link::NONE,
            tail: Link::NONE,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Link::NONE,
            tail: Link::NONE,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // ========================================================================
    // End operations
    // ========================================================================

    /// Pushes a value to the front of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: Link::NONE,
            next: self.head,
        });
        let link = Link::new(key);

        match self.head.key() {
            Some(head) => self.nodes[head].prev = link,
            None => self.tail = link,
        }
        self.head = link;
    }

    /// Pushes a value to the back of the list. O(1).
    pub fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: Link::NONE,
        });
        let link = Link::new(key);

        match self.tail.key() {
            Some(tail) => self.nodes[tail].next = link,
            None => self.head = link,
        }
        self.tail = link;
    }

    /// Removes and returns the front element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let key = self.head.key().ok_or(Error::EmptyContainer)?;
        Ok(self.detach(key))
    }

    /// Removes and returns the back element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let key = self.tail.key().ok_or(Error::EmptyContainer)?;
        Ok(self.detach(key))
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        let key = self.head.key().ok_or(Error::EmptyContainer)?;
        Ok(&self.nodes[key].value)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let key = self.tail.key().ok_or(Error::EmptyContainer)?;
        Ok(&self.nodes[key].value)
    }

    // ========================================================================
    // Positional operations
    // ========================================================================

    /// Returns a reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainer`] if the list is empty.
    /// - [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let key = self.locate(index)?;
        Ok(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let key = self.locate(index)?;
        Ok(&mut self.nodes[key].value)
    }

    /// Overwrites the element at `index` in place, returning the old value.
    /// O(index).
    ///
    /// No other element moves and the length is unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get). On error `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let key = self.locate(index)?;
        Ok(core::mem::replace(&mut self.nodes[key].value, value))
    }

    /// Removes and returns the element at `index`. O(index).
    ///
    /// Elements after `index` shift down by one position.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get). The list is unchanged on error.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let key = self.locate(index)?;
        Ok(self.detach(key))
    }

    /// Inserts `value` so that it ends up at position `index`. O(index).
    ///
    /// `index == 0` is [`push_front`](Self::push_front) and
    /// `index == len` is [`push_back`](Self::push_back).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == len {
            self.push_back(value);
            return Ok(());
        }

        // Interior: both neighbours exist.
        let next = self.walk(index);
        let prev = self.nodes[next].prev;

        let key = self.nodes.insert(Node {
            value,
            prev,
            next: Link::new(next),
        });
        let link = Link::new(key);

        self.nodes[next].prev = link;
        if let Some(prev) = prev.key() {
            self.nodes[prev].next = link;
        }
        Ok(())
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = Link::NONE;
        self.tail = Link::NONE;
    }

    /// Returns a front-to-back iterator. Reverse it for back-to-front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Validates `index` and returns the key of the node at that position.
    fn locate(&self, index: usize) -> Result<usize> {
        let len = self.len();
        if len == 0 {
            return Err(Error::EmptyContainer);
        }
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.walk(index))
    }

    /// Follows `index` forward links from the head.
    ///
    /// Caller guarantees `index < len`.
    fn walk(&self, index: usize) -> usize {
        let mut link = self.head;
        for _ in 0..index {
            link = self.nodes[self.key_of(link)].next;
        }
        self.key_of(link)
    }

    #[inline]
    fn key_of(&self, link: Link) -> usize {
        debug_assert!(link.is_some(), "walked past the tail");
        link.key().unwrap_or(usize::MAX)
    }

    /// Unlinks the node at `key`, repairs its neighbours, and frees the slot.
    fn detach(&mut self, key: usize) -> T {
        let Node { value, prev, next } = self.nodes.remove(key);

        match prev.key() {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next.key() {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        value
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len());
        for value in self {
            out.push_back(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`LinkedList`].
///
/// Created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front.key()?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back.key()?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn from_slice<T: Clone>(values: &[T]) -> LinkedList<T> {
        let mut list = LinkedList::new();
        for v in values {
            list.push_back(v.clone());
        }
        list
    }

    fn collect<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    /// Walks both directions and checks every link pair.
    fn assert_links<T>(list: &LinkedList<T>) {
        assert_eq!(list.head.is_none(), list.tail.is_none());
        assert_eq!(list.head.is_none(), list.len() == 0);

        let mut forward = Vec::new();
        let mut prev = Link::NONE;
        let mut link = list.head;
        while let Some(key) = link.key() {
            assert_eq!(list.nodes[key].prev, prev, "broken back-link at {key}");
            forward.push(key);
            prev = link;
            link = list.nodes[key].next;
        }
        assert_eq!(prev, list.tail);

        let mut backward = Vec::new();
        let mut link = list.tail;
        while let Some(key) = link.key() {
            backward.push(key);
            link = list.nodes[key].prev;
        }
        backward.reverse();

        assert_eq!(forward.len(), list.len());
        assert_eq!(forward, backward);
    }

    #[test]
    fn new_is_empty() {
        let list: LinkedList<u64> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), Err(Error::EmptyContainer));
        assert_eq!(list.back(), Err(Error::EmptyContainer));
        assert_links(&list);
    }

    #[test]
    fn push_back_order() {
        let list = from_slice(&[1, 20, 35]);
        assert_eq!(collect(&list), vec![1, 20, 35]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![35, 20, 1]);
        assert_links(&list);
    }

    #[test]
    fn push_front_order() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(collect(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Ok(&3));
        assert_eq!(list.back(), Ok(&1));
        assert_links(&list);
    }

    #[test]
    fn pop_front_and_back() {
        let mut list = from_slice(&[1, 2, 3, 4]);

        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(4));
        assert_links(&list);
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(2));
        assert_links(&list);

        assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
        assert!(list.is_empty());
    }

    #[test]
    fn push_and_pop_single() {
        let mut list = LinkedList::new();
        list.push_front("a");
        assert_eq!(list.pop_back(), Ok("a"));
        list.push_back("b");
        assert_eq!(list.pop_front(), Ok("b"));
        assert_links(&list);
    }

    #[test]
    fn get_set() {
        let mut list = from_slice(&[10, 20, 30]);

        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(2), Ok(&30));

        assert_eq!(list.set(1, 99), Ok(20));
        assert_eq!(collect(&list), vec![10, 99, 30]);
        assert_eq!(list.len(), 3);

        *list.get_mut(2).unwrap() += 1;
        assert_eq!(list.get(2), Ok(&31));
    }

    #[test]
    fn out_of_range() {
        let mut list = from_slice(&[1, 2, 3]);
        let oob = Error::IndexOutOfRange { index: 3, len: 3 };

        assert_eq!(list.get(3), Err(oob));
        assert_eq!(list.set(3, 0), Err(oob));
        assert_eq!(list.remove(3), Err(oob));
        assert_eq!(
            list.get(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 3
            })
        );
        assert_eq!(collect(&list), vec![1, 2, 3]);
    }

    #[test]
    fn positional_on_empty() {
        let mut list: LinkedList<u8> = LinkedList::new();
        assert_eq!(list.get(0), Err(Error::EmptyContainer));
        assert_eq!(list.set(0, 1), Err(Error::EmptyContainer));
        assert_eq!(list.remove(0), Err(Error::EmptyContainer));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_shifts_down() {
        let mut list = from_slice(&[20, 30, 40, 50, 60]);

        assert_eq!(list.remove(3), Ok(50));
        assert_eq!(list.remove(2), Ok(40));
        assert_eq!(list.remove(1), Ok(30));
        assert_eq!(collect(&list), vec![20, 60]);
        assert_links(&list);
    }

    #[test]
    fn remove_ends() {
        let mut list = from_slice(&[1, 2, 3]);
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.back(), Ok(&2));
        assert_eq!(list.remove(0), Ok(2));
        assert!(list.is_empty());
        assert_links(&list);
    }

    #[test]
    fn insert_positions() {
        let mut list = LinkedList::new();
        list.insert(0, 2).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(1, 1).unwrap();
        list.insert(3, 3).unwrap();

        assert_eq!(collect(&list), vec![0, 1, 2, 3]);
        assert_eq!(
            list.insert(5, 9),
            Err(Error::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(list.len(), 4);
        assert_links(&list);
    }

    #[test]
    fn slot_reuse_keeps_order() {
        let mut list = from_slice(&[1, 2, 3, 4]);
        list.remove(1).unwrap();
        list.remove(1).unwrap();
        list.push_front(0);
        list.push_back(5);
        assert_eq!(collect(&list), vec![0, 1, 4, 5]);
        assert_links(&list);
    }

    #[test]
    fn clear() {
        let mut list = from_slice(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        list.push_back(7);
        assert_eq!(collect(&list), vec![7]);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list = from_slice(&[1, 2, 3, 4, 5]);
        let mut iter = list.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn clone_and_debug() {
        let list = from_slice(&[1, 2, 3]);
        let copy = list.clone();
        assert_eq!(format!("{copy:?}"), "[1, 2, 3]");
    }

    #[test]
    fn drops_values() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut list = LinkedList::new();
            for _ in 0..10 {
                list.push_back(Rc::clone(&tracker));
            }
            list.remove(4).unwrap();
            assert_eq!(Rc::strong_count(&tracker), 10);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn stress_random_ops() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut list = LinkedList::new();
        let mut reference: Vec<u32> = Vec::new();

        for i in 0..5_000u32 {
            match rng.random_range(0..7) {
                0 => {
                    list.push_back(i);
                    reference.push(i);
                }
                1 => {
                    list.push_front(i);
                    reference.insert(0, i);
                }
                2 => {
                    let expected = if reference.is_empty() {
                        Err(Error::EmptyContainer)
                    } else {
                        Ok(reference.remove(0))
                    };
                    assert_eq!(list.pop_front(), expected);
                }
                3 => {
                    let expected = reference.pop().ok_or(Error::EmptyContainer);
                    assert_eq!(list.pop_back(), expected);
                }
                4 => {
                    let idx = rng.random_range(0..=reference.len());
                    list.insert(idx, i).unwrap();
                    reference.insert(idx, i);
                }
                5 if !reference.is_empty() => {
                    let idx = rng.random_range(0..reference.len());
                    assert_eq!(list.remove(idx), Ok(reference.remove(idx)));
                }
                _ if !reference.is_empty() => {
                    let idx = rng.random_range(0..reference.len());
                    assert_eq!(list.set(idx, i), Ok(reference[idx]));
                    reference[idx] = i;
                }
                _ => {}
            }
            assert_eq!(list.len(), reference.len());
        }

        assert_links(&list);
        assert_eq!(collect(&list), reference);
    }
}
