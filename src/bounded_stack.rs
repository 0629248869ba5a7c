//! A fixed-capacity LIFO stack over a contiguous buffer.

use crate::error::{Error, Result};

/// A LIFO stack with a capacity chosen at construction and never resized.
///
/// Elements occupy buffer positions `[0, len)`; position `len - 1` is the
/// top. All accessors are O(1).
#[derive(Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates a stack that can hold at most `capacity` elements. Fails with
    /// [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(BoundedStack {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Pushes `value` on top of the stack, or fails with
    /// [`Error::CapacityExceeded`] if the stack is full.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Pops the topmost value, or fails with [`Error::Empty`].
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Empty)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
