use tracing::instrument;

use crate::linked_list::SinglyLinkedList;

/// FIFO adapter: enqueues at the tail and dequeues at the head of a [`SinglyLinkedList`].
#[derive(Debug)]
pub struct Queue<T> {
    size: usize,
    storage: SinglyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
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
    pub fn enqueue(&mut self, value: T) {
        self.size += 1;
        self.storage.add_to_tail(value);
    }

    #[instrument(level = "trace", skip_all, fields(size = self.size))]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        self.storage.remove_head()
    }
}
