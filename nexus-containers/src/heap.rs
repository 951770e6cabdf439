//! Array-backed binary heap ordered by an injected comparator.
//!
//! Elements live in a single `Vec<T>` laid out as a complete binary tree:
//! the children of position `i` are `2i + 1` and `2i + 2`, its parent is
//! `(i - 1) / 2`. Every non-root element compares greater than or equal to
//! its parent under the heap's [`Compare`] strategy.
//!
//! # Example
//!
//! ```
//! use nexus_containers::{Heap, MaxHeap};
//!
//! let mut heap = Heap::min();
//! heap.push(2);
//! heap.push(1);
//! heap.push(3);
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//!
//! let mut max: MaxHeap<u32> = Heap::max();
//! max.push(2);
//! max.push(9);
//! assert_eq!(max.peek(), Ok(&9));
//! ```

use core::fmt;

use crate::compare::{Compare, MaxOrder, MinOrder};
use crate::error::{Error, Result};

/// A heap that pops its smallest element first.
pub type MinHeap<T> = Heap<T, MinOrder>;

/// A heap that pops its largest element first.
pub type MaxHeap<T> = Heap<T, MaxOrder>;

/// A binary heap ordered by a caller-supplied comparator.
///
/// The comparator is fixed for the lifetime of the heap. Equal elements may
/// pop in any relative order.
///
/// The backing buffer keeps its peak capacity; popping never shrinks it.
pub struct Heap<T, C> {
    /// Heap-ordered elements.
    data: Vec<T>,
    compare: C,
}

impl<T: Ord> Heap<T, MinOrder> {
    /// Creates an empty min-heap using `T`'s natural ordering.
    #[inline]
    pub const fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> Heap<T, MaxOrder> {
    /// Creates an empty max-heap using `T`'s reversed natural ordering.
    #[inline]
    pub const fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, C> Heap<T, C> {
    /// Creates an empty heap ordered by `compare`.
    #[inline]
    pub const fn new(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(compare: C, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the root element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyContainer)
    }

    /// Returns the comparator driving this heap.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Pushes a value onto the heap. O(log n).
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root element. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        let last = self.data.len().checked_sub(1).ok_or(Error::EmptyContainer)?;

        self.data.swap(0, last);
        let root = self.data.pop().ok_or(Error::EmptyContainer)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(root)
    }

    /// Drains the heap, returning its elements in comparator order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop() {
            out.push(value);
        }
        out
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.compare.compare(&self.data[a], &self.data[b]).is_lt()
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }

            self.data.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<T, C: Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for Heap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}
