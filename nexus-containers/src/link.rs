//! Sentinel-encoded links between list nodes.
//!
//! A link is a slab key with `usize::MAX` reserved as "no node". This keeps a
//! node's `prev`/`next` at one word each instead of `Option<usize>`'s two.

/// A structural link to another node in the same arena.
///
/// Links are non-owning: the arena owns every node, and a link only names a
/// slot for traversal and splicing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Link(usize);

impl Link {
    /// The "no node" sentinel.
    pub(crate) const NONE: Self = Self(usize::MAX);

    /// Wraps an arena key.
    #[inline]
    pub(crate) const fn new(key: usize) -> Self {
        debug_assert!(key != usize::MAX, "arena key collides with sentinel");
        Self(key)
    }

    /// Returns `true` if this is the sentinel.
    #[inline]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    /// Returns `true` if this names a node.
    #[inline]
    pub(crate) const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the arena key, or `None` for the sentinel.
    #[inline]
    pub(crate) const fn key(self) -> Option<usize> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

impl core::fmt::Debug for Link {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.key() {
            Some(key) => write!(f, "Link({key})"),
            None => f.write_str("Link(NONE)"),
        }
    }
}
