use tracing::instrument;

use crate::linked_list::SinglyLinkedList;

/// LIFO adapter: pushes and pops at the head of a [`SinglyLinkedList`].
#[derive(Debug)]
pub struct Stack<T> {
    size: usize,
    storage: SinglyLinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            size: 0,
            storage: SinglyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[instrument(level = "trace", skip_all, fields(size = self.size))]
    pub fn push(&mut self, value: T) {
        self.size += 1;
        self.storage.add_to_head(value);
    }

    /// `None` on an empty stack; the size never goes below zero.
    #[instrument(level = "trace", skip_all, fields(size = self.size))]
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        self.storage.remove_head()
    }

    pub fn peek(&self) -> Option<&T> {
        self.storage.peek_head()
    }
}
