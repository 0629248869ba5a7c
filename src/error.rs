//! The shared failure taxonomy for the containers.
//!
//! Every fallible container operation fails synchronously with one of these
//! variants and performs no mutation on failure.

use thiserror::Error;

/// A container operation failure. Each variant represents a distinct failure
/// mode; callers match on the variant to decide how to recover.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional access beyond the end of a list.
    #[error("index {index} is out of range for a list of length {length}")]
    OutOfRange { index: usize, length: usize },

    /// A pop or dequeue on a container with no elements.
    #[error("the container is empty")]
    Empty,

    /// A push or enqueue on a bounded container already at capacity.
    #[error("the container is already at its capacity of {capacity}")]
    CapacityExceeded { capacity: usize },

    /// A bounded container constructed with a capacity of zero.
    #[error("capacity must be greater than 0")]
    ZeroCapacity,
}

pub type Result<T> = std::result::Result<T, Error>;
