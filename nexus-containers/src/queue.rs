//! Growable FIFO queue over a circular buffer.
//!
//! Occupied slots form a contiguous (wrapping) run of `len` slots starting at
//! the read cursor:
//!
//! ```text
//!            write            read
//!              │                │
//!              ▼                ▼
//! ┌─────┬─────┬─────┬─────┬─────┬─────┐
//! │  d  │  e  │     │     │  b  │  c  │   len = 4, capacity = 6
//! └─────┴─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! The explicit `len` is what tells a full buffer from an empty one: in both
//! cases the two cursors coincide.
//!
//! # Growth
//!
//! An enqueue into a full (or unallocated) buffer relocates the elements into
//! a larger one, in logical order, before writing:
//!
//! | Current capacity | New capacity |
//! |------------------|--------------|
//! | 0 | 1 |
//! | < [`GROWTH_THRESHOLD`] | 2 × |
//! | ≥ [`GROWTH_THRESHOLD`] | 5/4 × (rounded down) |
//!
//! Capacity never shrinks. [`Queue::grow`] pre-sizes the buffer exactly.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

use crate::error::{Error, Result};

/// Capacity at which growth switches from doubling to 5/4.
pub const GROWTH_THRESHOLD: usize = 1024;

/// Returns the capacity an implicit growth step moves to from `capacity`.
#[inline]
pub const fn next_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        1
    } else if capacity < GROWTH_THRESHOLD {
        capacity * 2
    } else {
        capacity + capacity / 4
    }
}

/// Largest slot count whose buffer stays within `isize::MAX` bytes.
#[inline]
const fn max_capacity<T>() -> usize {
    match size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

/// A first-in, first-out queue backed by a growable ring buffer.
///
/// # Example
///
/// ```
/// use nexus_containers::Queue;
///
/// let mut queue = Queue::new();
/// assert_eq!(queue.cap(), 0);
///
/// queue.enqueue("a");
/// queue.enqueue("b");
/// assert_eq!(queue.len(), 2);
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.peek(), Ok(&"b"));
/// ```
///
/// Pre-sizing avoids relocation during a burst:
///
/// ```
/// use nexus_containers::Queue;
///
/// let mut queue = Queue::new();
/// queue.grow(4999).unwrap();
/// for i in 0..4999 {
///     queue.enqueue(i);
/// }
/// assert_eq!(queue.cap(), 4999);
/// ```
pub struct Queue<T> {
    /// Slots `read..read+len` (mod capacity) are initialised; the rest are not.
    buf: Box<[MaybeUninit<T>]>,
    /// Position of the oldest element.
    read: usize,
    /// Position the next element is written to.
    write: usize,
    /// Number of initialised slots.
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue with zero capacity. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Box::<[T]>::new_uninit_slice(0),
            read: 0,
            write: 0,
            len: 0,
        }
    }

    /// Creates an empty queue with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] under the same conditions as
    /// [`grow`](Self::grow).
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut queue = Self::new();
        queue.grow(capacity)?;
        Ok(queue)
    }

    /// Returns the number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub const fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the next enqueue will relocate the buffer.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Appends a value at the back of the queue.
    ///
    /// Amortized O(1); O(n) when the buffer has to grow first.
    ///
    /// # Panics
    ///
    /// Panics if the grown buffer would exceed `isize::MAX` bytes.
    pub fn enqueue(&mut self, value: T) {
        if self.is_full() {
            self.relocate(next_capacity(self.cap()));
        }

        self.buf[self.write].write(value);
        self.write = (self.write + 1) % self.cap();
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        // Safety: len > 0, so the slot at `read` is initialised. Advancing
        // `read` past it marks it uninitialised again.
        let value = unsafe { self.buf[self.read].assume_init_read() };
        self.read = (self.read + 1) % self.cap();
        self.len -= 1;

        Ok(value)
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        // Safety: len > 0, so the slot at `read` is initialised.
        Ok(unsafe { self.buf[self.read].assume_init_ref() })
    }

    /// Ensures the buffer has exactly `target` slots if it currently has fewer.
    ///
    /// A no-op when `target <= cap()`. Afterwards, enqueuing until `len()`
    /// reaches `target` causes no further relocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a buffer of `target` slots would
    /// exceed `isize::MAX` bytes. The queue is unchanged on error.
    pub fn grow(&mut self, target: usize) -> Result<()> {
        if target <= self.cap() {
            return Ok(());
        }
        if target > max_capacity::<T>() {
            return Err(Error::InvalidArgument(
                "target capacity exceeds isize::MAX bytes",
            ));
        }

        tracing::debug!(
            from = self.cap(),
            to = target,
            len = self.len,
            "queue explicit grow"
        );
        self.relocate(target);
        Ok(())
    }

    /// Drops every queued element. Capacity is kept.
    pub fn clear(&mut self) {
        let (cap, read, len) = (self.cap(), self.read, self.len);

        // Reset first: a panicking destructor leaks the rest instead of
        // leaving them reachable for a second drop.
        self.read = 0;
        self.write = 0;
        self.len = 0;

        for i in 0..len {
            // Safety: every logical position below the old len was
            // initialised, and each is visited exactly once.
            unsafe { self.buf[(read + i) % cap].assume_init_drop() };
        }
    }

    /// Moves the occupied run, in logical order, into a new buffer of
    /// `new_cap` slots starting at slot 0.
    ///
    /// Caller guarantees `new_cap > len`.
    fn relocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.len);

        let old_cap = self.cap();
        let mut new_buf = Box::<[T]>::new_uninit_slice(new_cap);

        // The run may wrap: [read..old_cap) then [0..rest).
        let first = self.len.min(old_cap - self.read);
        let rest = self.len - first;

        // Safety: the source ranges cover exactly the initialised slots and
        // lie within the old buffer; the destination has room for `len`
        // slots. The old buffer is `MaybeUninit`, so dropping it afterwards
        // does not drop the moved values.
        unsafe {
            ptr::copy_nonoverlapping(
                self.buf.as_ptr().add(self.read),
                new_buf.as_mut_ptr(),
                first,
            );
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr().add(first), rest);
        }

        self.buf = new_buf;
        self.read = 0;
        self.write = self.len;

        tracing::trace!(old_cap, new_cap, len = self.len, "queue buffer relocated");
    }

    /// Iterates front to back without consuming.
    fn logical(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.cap();
        (0..self.len).map(move |i| {
            // Safety: logical positions below len are initialised.
            unsafe { self.buf[(self.read + i) % cap].assume_init_ref() }
        })
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        if self.cap() > 0 {
            out.relocate(self.cap());
        }
        for value in self.logical() {
            out.enqueue(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.logical()).finish()
    }
}
