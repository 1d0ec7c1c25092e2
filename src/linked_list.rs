//! Singly linked list backed by a generational arena.
//!
//! Storage for [`Stack`](crate::stack::Stack) and [`Queue`](crate::queue::Queue).

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

#[derive(Debug)]
struct LinkNode<T> {
    value: T,
    next: Option<Index>,
}

/// Forward-only list with O(1) insertion at both ends and O(1) removal at the head.
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    arena: Arena<LinkNode<T>>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[instrument(level = "trace", skip_all)]
    pub fn add_to_head(&mut self, value: T) {
        let idx = self.arena.insert(LinkNode {
            value,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
    }

    #[instrument(level = "trace", skip_all)]
    pub fn add_to_tail(&mut self, value: T) {
        let idx = self.arena.insert(LinkNode { value, next: None });
        match self.tail.and_then(|tail| self.arena.get_mut(tail)) {
            Some(old_tail) => old_tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Removes the first node and returns its value, `None` on an empty list.
    #[instrument(level = "trace", skip_all)]
    pub fn remove_head(&mut self) -> Option<T> {
        let node = self.arena.remove(self.head?)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    pub fn peek_head(&self) -> Option<&T> {
        self.head
            .and_then(|idx| self.arena.get(idx))
            .map(|node| &node.value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            current: self.head,
        }
    }
}

pub struct Iter<'a, T> {
    arena: &'a Arena<LinkNode<T>>,
    current: Option<Index>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.current?)?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        Ok(())
    }
}
