//! Ordering strategies for [`Heap`](crate::Heap).
//!
//! The heap never calls `Ord` directly. It asks a [`Compare`] implementation,
//! which lets one heap type serve as a min-heap, a max-heap, or anything
//! ordered by a caller-supplied closure.

use core::cmp::Ordering;

/// An order relation over `T`.
///
/// `compare(a, b)` returns `Less` when `a` belongs closer to the root than `b`.
/// Implementations must be a strict weak ordering. An inconsistent
/// comparator produces an unspecified pop order but never a panic.
///
/// Implemented for every `Fn(&T, &T) -> Ordering`:
///
/// ```
/// use nexus_containers::Heap;
///
/// // Order strings by length, shortest first.
/// let mut heap = Heap::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// heap.push("three");
/// heap.push("a");
/// heap.push("to");
/// assert_eq!(heap.pop(), Ok("a"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural ordering: the smallest value sits at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed natural ordering: the largest value sits at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
