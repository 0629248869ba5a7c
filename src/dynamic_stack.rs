//! An unbounded LIFO stack backed by a chain of linked nodes.
//!
//! The stack grows node by node with no capacity limit; the only structural
//! state is the link to the top node. There is deliberately no cached size
//! counter, so `len` counts the chain.

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A LIFO stack that grows without a capacity limit.
pub struct DynamicStack<T> {
    top: Option<Box<Node<T>>>,
}

impl<T> DynamicStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        DynamicStack { top: None }
    }

    /// Pushes `value` onto the top of the stack. O(1): the new node's link
    /// is the old top.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
    }

    /// Pops the topmost value, or fails with [`Error::Empty`] if there are
    /// no elements.
    pub fn pop(&mut self) -> Result<T> {
        match self.top.take() {
            Some(node) => {
                self.top = node.next;
                Ok(node.value)
            }
            None => Err(Error::Empty),
        }
    }

    /// Counts the nodes from the top down to the terminal node.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.top.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl<T> Default for DynamicStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unlinks the chain top-down so a tall stack cannot overflow the call stack
/// with recursive drops.
impl<T> Drop for DynamicStack<T> {
    fn drop(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: DynamicStack<i32> = DynamicStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_pop_on_empty_stack_fails() {
        let mut stack: DynamicStack<i32> = DynamicStack::new();
        assert_eq!(stack.pop(), Err(Error::Empty));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_push_pop_single_value() {
        let mut stack = DynamicStack::new();
        stack.push(5);
        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.pop(), Err(Error::Empty));
    }

    #[test]
    fn test_pop_returns_values_in_reverse_order() {
        let mut stack = DynamicStack::new();
        for i in 0..10 {
            stack.push(i * 5);
        }

        for i in (0..10).rev() {
            assert_eq!(stack.pop(), Ok(i * 5));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_len_counts_nodes() {
        let mut stack = DynamicStack::new();
        assert_eq!(stack.len(), 0);
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        stack.pop().unwrap();
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut stack = DynamicStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Ok(2));
        stack.push(3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::Empty));
    }

    #[test]
    fn test_works_with_non_copy_types() {
        let mut stack = DynamicStack::new();
        stack.push("first".to_string());
        stack.push("second".to_string());
        assert_eq!(stack.pop().as_deref(), Ok("second"));
        assert_eq!(stack.pop().as_deref(), Ok("first"));
    }

    #[test]
    fn test_tall_stack_drops_without_overflow() {
        let mut stack = DynamicStack::new();
        for i in 0..100_000 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 100_000);
        drop(stack);
    }
}
