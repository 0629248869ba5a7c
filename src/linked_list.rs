//! A singly linked list with positional access, insert, and delete.
//!
//! Each node exclusively owns its successor, so the chain forms a
//! single-owner tree rooted at the head link. `Clone` deep-copies the chain:
//! the copy shares no nodes with the source, and mutating either list never
//! affects the other.

use std::fmt;

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// An ordered, variable-length singly linked list.
///
/// Positions are 0-based. There is no cached length or tail pointer: `len` is
/// an O(n) traversal and `append` walks to the tail, matching the simplicity
/// of the structure.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    /// Returns the number of elements by walking the chain.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::OutOfRange`] if the list is shorter than that.
    pub fn get(&self, index: usize) -> Result<&T> {
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref());
        }
        match cursor {
            Some(node) => Ok(&node.value),
            None => Err(Error::OutOfRange {
                index,
                length: self.len(),
            }),
        }
    }

    /// Adds `value` after the current tail. Walks the whole chain to find
    /// the tail.
    pub fn append(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
    }

    /// Inserts `value` so that it becomes the element at `index`; the element
    /// previously at `index` (if any) moves to `index + 1`. `index == 0`
    /// makes the new node the head and `index == len()` appends. Fails with
    /// [`Error::OutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let length = self.len();
        if index > length {
            return Err(Error::OutOfRange { index, length });
        }

        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                // Unreachable after the bounds check above.
                None => return Err(Error::OutOfRange { index, length }),
            }
        }

        let rest = link.take();
        *link = Some(Box::new(Node { value, next: rest }));
        Ok(())
    }

    /// Removes the element at `index`, relinking its predecessor to its
    /// successor. Fails with [`Error::OutOfRange`] if `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        let mut link = &mut self.head;
        for walked in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => {
                    return Err(Error::OutOfRange {
                        index,
                        length: walked,
                    })
                }
            }
        }

        match link.take() {
            Some(node) => {
                *link = node.next;
                Ok(())
            }
            None => Err(Error::OutOfRange {
                index,
                length: index,
            }),
        }
    }

    /// Returns a lazy front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: builds an entirely new node chain carrying clones of the
/// source values. Implemented iteratively so cloning a long list cannot
/// overflow the stack.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = LinkedList::new();
        let mut tail = &mut copy.head;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            let new_node = Box::new(Node {
                value: node.value.clone(),
                next: None,
            });
            tail = &mut tail.insert(new_node).next;
            cursor = node.next.as_deref();
        }
        copy
    }
}

/// Unlinks the chain front to back instead of letting the nodes drop
/// recursively, which would overflow the stack on a long list. Each node is
/// released exactly once.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
