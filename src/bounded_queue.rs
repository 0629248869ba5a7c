//! A fixed-capacity FIFO queue over a contiguous buffer.
//!
//! The front is always buffer position 0, so a dequeue shifts every
//! remaining element left by one slot. That makes `dequeue` O(n), a
//! deliberate trade of throughput for simplicity; the accessors stay O(1).

use crate::error::{Error, Result};

/// A FIFO queue with a capacity chosen at construction and never resized.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates a queue that can hold at most `capacity` elements. Fails with
    /// [`Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(BoundedQueue {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Adds `value` at the back of the queue, or fails with
    /// [`Error::CapacityExceeded`] if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the front value, shifting the remaining elements
    /// left by one position. Fails with [`Error::Empty`] if there are no
    /// elements.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::Empty);
        }
        Ok(self.items.remove(0))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(BoundedQueue::<i32>::new(0), Err(Error::ZeroCapacity)));
    }

    #[test]
    fn test_new_queue_is_empty_not_full() {
        let queue = BoundedQueue::<i32>::new(4).unwrap();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn test_dequeue_on_empty_queue_fails() {
        let mut queue = BoundedQueue::<bool>::new(1).unwrap();
        assert_eq!(queue.dequeue(), Err(Error::Empty));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_enqueue_on_full_queue_fails() {
        let mut queue = BoundedQueue::new(1).unwrap();
        queue.enqueue(true).unwrap();
        assert_eq!(
            queue.enqueue(true),
            Err(Error::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_enqueue_dequeue_single_value() {
        let mut queue = BoundedQueue::new(1).unwrap();
        queue.enqueue(5).unwrap();
        assert_eq!(queue.dequeue(), Ok(5));
        assert_eq!(queue.dequeue(), Err(Error::Empty));
    }

    #[test]
    fn test_dequeue_preserves_insertion_order() {
        let mut queue = BoundedQueue::new(10).unwrap();
        for i in 0..10 {
            queue.enqueue(i * 5).unwrap();
        }
        assert!(queue.is_full());

        for i in 0..10 {
            assert_eq!(queue.dequeue(), Ok(i * 5));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_interleaved_enqueue_dequeue() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3).unwrap();
        queue.enqueue(4).unwrap();
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
    }

    #[test]
    fn test_refill_after_draining() {
        let mut queue = BoundedQueue::new(2).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();

        queue.enqueue(3).unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Ok(3));
    }

    #[test]
    fn test_works_with_non_copy_types() {
        let mut queue = BoundedQueue::new(2).unwrap();
        queue.enqueue("front".to_string()).unwrap();
        queue.enqueue("back".to_string()).unwrap();
        assert_eq!(queue.dequeue().as_deref(), Ok("front"));
        assert_eq!(queue.dequeue().as_deref(), Ok("back"));
    }
}
