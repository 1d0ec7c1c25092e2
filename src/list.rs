//! Doubly linked list addressed by node handles.
//!
//! Nodes live in a generational arena owned by the list; `prev`/`next` are
//! plain arena indices. A [`NodeHandle`] names one node of one list instance:
//! handles from another list, or to a node that has since been removed, are
//! rejected with [`CollectionError::NodeNotFound`].

use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::errors::{CollectionError, CollectionResult};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a node inside a specific [`PositionalList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    list: u64,
    index: Index,
}

#[derive(Debug)]
struct PositionalNode<T> {
    value: T,
    prev: Option<Index>,
    next: Option<Index>,
}

#[derive(Debug)]
pub struct PositionalList<T> {
    id: u64,
    arena: Arena<PositionalNode<T>>,
    head: Option<Index>,
    tail: Option<Index>,
    length: usize,
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PositionalList<T> {
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// List holding a single node.
    pub fn with_value(value: T) -> Self {
        let mut list = Self::new();
        list.add_to_head(value);
        list
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn head(&self) -> Option<NodeHandle> {
        self.head.map(|idx| self.handle(idx))
    }

    pub fn tail(&self) -> Option<NodeHandle> {
        self.tail.map(|idx| self.handle(idx))
    }

    fn handle(&self, index: Index) -> NodeHandle {
        NodeHandle {
            list: self.id,
            index,
        }
    }

    fn not_found(&self, handle: NodeHandle) -> CollectionError {
        CollectionError::NodeNotFound {
            list: self.id,
            index: handle.index.into_raw_parts().0,
        }
    }

    fn resolve(&self, handle: NodeHandle) -> CollectionResult<Index> {
        if handle.list == self.id && self.arena.contains(handle.index) {
            Ok(handle.index)
        } else {
            Err(self.not_found(handle))
        }
    }

    pub fn contains_node(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    pub fn get(&self, handle: NodeHandle) -> CollectionResult<&T> {
        let idx = self.resolve(handle)?;
        Ok(&self.arena[idx].value)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> CollectionResult<&mut T> {
        let idx = self.resolve(handle)?;
        Ok(&mut self.arena[idx].value)
    }

    /// Handle of the node after `handle`, `Ok(None)` at the tail.
    pub fn next(&self, handle: NodeHandle) -> CollectionResult<Option<NodeHandle>> {
        let idx = self.resolve(handle)?;
        Ok(self.arena[idx].next.map(|next| self.handle(next)))
    }

    /// Handle of the node before `handle`, `Ok(None)` at the head.
    pub fn prev(&self, handle: NodeHandle) -> CollectionResult<Option<NodeHandle>> {
        let idx = self.resolve(handle)?;
        Ok(self.arena[idx].prev.map(|prev| self.handle(prev)))
    }

    #[instrument(level = "trace", skip_all, fields(list = self.id, len = self.length))]
    pub fn add_to_head(&mut self, value: T) -> NodeHandle {
        let idx = self.arena.insert(PositionalNode {
            value,
            prev: None,
            next: None,
        });
        self.link_front(idx);
        self.length += 1;
        self.handle(idx)
    }

    #[instrument(level = "trace", skip_all, fields(list = self.id, len = self.length))]
    pub fn add_to_tail(&mut self, value: T) -> NodeHandle {
        let idx = self.arena.insert(PositionalNode {
            value,
            prev: None,
            next: None,
        });
        self.link_back(idx);
        self.length += 1;
        self.handle(idx)
    }

    /// Value of the removed head, `None` on an empty list.
    #[instrument(level = "trace", skip_all, fields(list = self.id, len = self.length))]
    pub fn remove_from_head(&mut self) -> Option<T> {
        let head = self.head?;
        self.detach(head)
    }

    /// Value of the removed tail, `None` on an empty list.
    #[instrument(level = "trace", skip_all, fields(list = self.id, len = self.length))]
    pub fn remove_from_tail(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.detach(tail)
    }

    /// Relinks the node as the new head. The handle stays valid.
    #[instrument(level = "debug", skip(self), fields(list = self.id, len = self.length))]
    pub fn move_to_front(&mut self, handle: NodeHandle) -> CollectionResult<()> {
        let idx = self.resolve(handle)?;
        if self.length <= 1 || self.head == Some(idx) {
            return Ok(());
        }
        self.unlink(idx);
        self.link_front(idx);
        debug!("moved node to front");
        Ok(())
    }

    /// Relinks the node as the new tail. The handle stays valid.
    #[instrument(level = "debug", skip(self), fields(list = self.id, len = self.length))]
    pub fn move_to_end(&mut self, handle: NodeHandle) -> CollectionResult<()> {
        let idx = self.resolve(handle)?;
        if self.length <= 1 || self.tail == Some(idx) {
            return Ok(());
        }
        self.unlink(idx);
        self.link_back(idx);
        debug!("moved node to end");
        Ok(())
    }

    /// Removes the node, keeping the order of the others, and returns its value.
    #[instrument(level = "debug", skip(self), fields(list = self.id, len = self.length))]
    pub fn delete(&mut self, handle: NodeHandle) -> CollectionResult<T> {
        let idx = self.resolve(handle)?;
        let value = self.detach(idx).ok_or_else(|| self.not_found(handle))?;
        debug!(len = self.length, "deleted node");
        Ok(value)
    }

    /// Largest value by `>`; the first of equal maxima wins.
    pub fn get_max(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        let mut values = self.iter();
        let mut max = values.next()?;
        for value in values {
            if value > max {
                max = value;
            }
        }
        Some(max)
    }

    /// Handle of the first node, from the head, holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeHandle>
    where
        T: PartialEq,
    {
        self.handles()
            .find(|&handle| self.get(handle).is_ok_and(|v| v == value))
    }

    pub fn handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        std::iter::successors(self.head, move |&idx| {
            self.arena.get(idx).and_then(|node| node.next)
        })
        .map(move |idx| self.handle(idx))
    }

    /// Values from head to tail; `.rev()` walks tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    pub fn iter_rev(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    fn link_front(&mut self, idx: Index) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head.and_then(|h| self.arena.get_mut(h)) {
            Some(old) => old.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn link_back(&mut self, idx: Index) {
        let old_tail = self.tail;
        if let Some(node) = self.arena.get_mut(idx) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail.and_then(|t| self.arena.get_mut(t)) {
            Some(old) => old.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    // Splices the node out of the chain; it stays in the arena with no links.
    fn unlink(&mut self, idx: Index) {
        let Some(node) = self.arena.get_mut(idx) else {
            return;
        };
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev.and_then(|p| self.arena.get_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.arena.get_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }
    }

    fn detach(&mut self, idx: Index) -> Option<T> {
        self.unlink(idx);
        let node = self.arena.remove(idx)?;
        self.length -= 1;
        Some(node.value)
    }
}

pub struct Iter<'a, T> {
    arena: &'a Arena<PositionalNode<T>>,
    front: Option<Index>,
    back: Option<Index>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_to_tail(value);
        }
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for PositionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" <-> "))
    }
}
