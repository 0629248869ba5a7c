//! Practice implementations of the four classic linear containers: a singly
//! linked list with positional insert/delete and deep copy, an unbounded
//! linked stack, and a bounded stack and queue backed by contiguous buffers.
//!
//! Each container is independent of the others and is demonstrated by its own
//! interactive binary under `src/bin/`. The containers themselves never print
//! and never retry; every failure is reported immediately through
//! [`error::Error`] and leaves the container exactly as it was.

pub mod bounded_queue;
pub mod bounded_stack;
pub mod console;
pub mod dynamic_stack;
pub mod error;
pub mod linked_list;

pub use bounded_queue::BoundedQueue;
pub use bounded_stack::BoundedStack;
pub use dynamic_stack::DynamicStack;
pub use error::{Error, Result};
pub use linked_list::LinkedList;
