//! Three independent containers with recoverable errors.
//!
//! | Container | Shape | Key Operations |
//! |-----------|-------|----------------|
//! | [`Heap`] | Array-backed binary heap | O(log n) push/pop, O(1) peek |
//! | [`LinkedList`] | Doubly-linked, arena nodes | O(1) ends, O(index) positional |
//! | [`Queue`] | Growable ring buffer | Amortized O(1) enqueue, O(1) dequeue |
//!
//! None of the containers depend on each other.
//!
//! # Errors, not panics
//!
//! Every operation that can fail returns [`Result`]. Reading or removing from
//! an empty container yields [`Error::EmptyContainer`], positional access past
//! the end yields [`Error::IndexOutOfRange`], and an unsatisfiable capacity
//! request yields [`Error::InvalidArgument`]. Validation runs before any
//! mutation, so a failed call leaves the container exactly as it was.
//!
//! ```
//! use nexus_containers::{Error, LinkedList};
//!
//! let mut list: LinkedList<u32> = LinkedList::new();
//! assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
//!
//! list.push_back(7);
//! assert_eq!(list.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
//! ```
//!
//! # Heap ordering
//!
//! A [`Heap`] is ordered by a [`Compare`] strategy fixed at construction.
//! [`MinOrder`] and [`MaxOrder`] cover `Ord` types; any
//! `Fn(&T, &T) -> Ordering` closure works too.
//!
//! ```
//! use nexus_containers::Heap;
//!
//! let mut min = Heap::min();
//! let mut by_len = Heap::new(|a: &String, b: &String| a.len().cmp(&b.len()));
//!
//! for word in ["pear", "fig", "banana"] {
//!     min.push(word);
//!     by_len.push(word.to_string());
//! }
//!
//! assert_eq!(min.pop(), Ok("banana"));
//! assert_eq!(by_len.pop().as_deref(), Ok("fig"));
//! ```
//!
//! # Concurrency
//!
//! No container synchronizes internally. Share them across threads behind
//! whatever exclusion the caller already uses.

#![warn(missing_docs)]

pub mod compare;
pub mod error;
pub mod heap;
mod link;
pub mod list;
pub mod queue;

pub use compare::{Compare, MaxOrder, MinOrder};
pub use error::{Error, Result};
pub use heap::{Heap, MaxHeap, MinHeap};
pub use list::LinkedList;
pub use queue::Queue;
