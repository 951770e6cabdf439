//! Error types shared by every container in this crate.
//!
//! All fallible operations validate their input before touching any
//! internal state, so an `Err` always leaves the container unchanged.

/// Errors returned by container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A read or remove was attempted on a container with no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// A positional access fell outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The container length at the time of the request.
        len: usize,
    },

    /// An argument could not be honoured, e.g. a capacity too large to allocate.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
