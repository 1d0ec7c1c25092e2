/*
Queue based traversal of the search tree.

The queue holds arena indices rather than node references, so the iterator
only borrows the tree and every call to `bft()` starts a fresh walk.
 */
use std::fmt;
use std::io::{self, Write};

use generational_arena::Index;
use tracing::instrument;

use crate::queue::Queue;
use crate::tree::{write_lines, OrderedTree};

/// Level-order walk, left child before right child within each level.
pub struct BreadthFirstIter<'a, T> {
    tree: &'a OrderedTree<T>,
    queue: Queue<Index>,
}

impl<'a, T> BreadthFirstIter<'a, T> {
    fn new(tree: &'a OrderedTree<T>) -> Self {
        let mut queue = Queue::new();
        queue.enqueue(tree.root());
        Self { tree, queue }
    }
}

impl<'a, T> Iterator for BreadthFirstIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get_node(self.queue.dequeue()?)?;
        if let Some(left) = node.left {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right {
            self.queue.enqueue(right);
        }
        Some(&node.value)
    }
}

impl<T> OrderedTree<T> {
    #[instrument(level = "trace", skip(self))]
    pub fn bft(&self) -> BreadthFirstIter<'_, T> {
        BreadthFirstIter::new(self)
    }

    /// Number of levels, the root alone counts as one.
    /// Each queue entry is a pair (node, level).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = Queue::new();
        queue.enqueue((self.root(), 1));

        while let Some((idx, depth)) = queue.dequeue() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            max_depth = max_depth.max(depth);
            for child in [node.left, node.right].into_iter().flatten() {
                queue.enqueue((child, depth + 1));
            }
        }

        max_depth
    }
}

impl<T: fmt::Display> OrderedTree<T> {
    pub fn bft_write(&self, out: &mut impl Write) -> io::Result<()> {
        write_lines(out, self.bft())
    }

    pub fn bft_print(&self) -> io::Result<()> {
        self.bft_write(&mut io::stdout().lock())
    }
}
