/*
Stack based depth-first traversal of the search tree.

Children are pushed left first and right last, so the right child is popped
first: the walk descends into right subtrees before left ones. This is not a
textbook pre-order; `OrderedTree::pre_order` is the recursive left-first one.
 */
use std::fmt;
use std::io::{self, Write};

use generational_arena::Index;
use tracing::instrument;

use crate::stack::Stack;
use crate::tree::{write_lines, OrderedTree};

pub struct DepthFirstIter<'a, T> {
    tree: &'a OrderedTree<T>,
    stack: Stack<Index>,
}

impl<'a, T> DepthFirstIter<'a, T> {
    fn new(tree: &'a OrderedTree<T>) -> Self {
        let mut stack = Stack::new();
        stack.push(tree.root());
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for DepthFirstIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get_node(self.stack.pop()?)?;
        // push order decides visit order
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        Some(&node.value)
    }
}

impl<T> OrderedTree<T> {
    #[instrument(level = "trace", skip(self))]
    pub fn dft(&self) -> DepthFirstIter<'_, T> {
        DepthFirstIter::new(self)
    }
}

impl<T: fmt::Display> OrderedTree<T> {
    pub fn dft_write(&self, out: &mut impl Write) -> io::Result<()> {
        write_lines(out, self.dft())
    }

    pub fn dft_print(&self) -> io::Result<()> {
        self.dft_write(&mut io::stdout().lock())
    }
}
