//! Unbalanced binary search tree stored in a generational arena.
//!
//! Values smaller than a node go to its left subtree, everything else (ties
//! included) goes right. Nodes are only ever added, so every index handed out
//! by the arena stays live for the lifetime of the tree.

use std::fmt;
use std::io::{self, Write};

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

/// Tree node in the arena-based search tree.
#[derive(Debug)]
pub struct TreeNode<T> {
    pub value: T,
    /// Subtree holding values `< value`
    pub left: Option<Index>,
    /// Subtree holding values `>= value`
    pub right: Option<Index>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree rooted at the first inserted value.
#[derive(Debug)]
pub struct OrderedTree<T> {
    arena: Arena<TreeNode<T>>,
    root: Index,
}

impl<T> OrderedTree<T> {
    pub fn new(value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode::leaf(value));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    // every index stored in the tree points at a live node
    fn node(&self, idx: Index) -> &TreeNode<T> {
        &self.arena[idx]
    }

    /// Number of values in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Largest value: the end of the right spine.
    pub fn get_max(&self) -> &T {
        let mut current = self.node(self.root);
        while let Some(right) = current.right {
            current = self.node(right);
        }
        &current.value
    }

    /// Calls `f` on every value in ascending order (left, self, right).
    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        self.visit_in_order(self.root, &mut f);
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.visit_in_order(self.root, &mut |v| values.push(v));
        values
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.visit_pre_order(self.root, &mut |v| values.push(v));
        values
    }

    pub fn post_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.visit_post_order(self.root, &mut |v| values.push(v));
        values
    }

    fn visit_in_order<'a>(&'a self, idx: Index, f: &mut dyn FnMut(&'a T)) {
        let node = self.node(idx);
        if let Some(left) = node.left {
            self.visit_in_order(left, f);
        }
        f(&node.value);
        if let Some(right) = node.right {
            self.visit_in_order(right, f);
        }
    }

    fn visit_pre_order<'a>(&'a self, idx: Index, f: &mut dyn FnMut(&'a T)) {
        let node = self.node(idx);
        f(&node.value);
        if let Some(left) = node.left {
            self.visit_pre_order(left, f);
        }
        if let Some(right) = node.right {
            self.visit_pre_order(right, f);
        }
    }

    fn visit_post_order<'a>(&'a self, idx: Index, f: &mut dyn FnMut(&'a T)) {
        let node = self.node(idx);
        if let Some(left) = node.left {
            self.visit_post_order(left, f);
        }
        if let Some(right) = node.right {
            self.visit_post_order(right, f);
        }
        f(&node.value);
    }
}

impl<T: Ord> OrderedTree<T> {
    #[instrument(level = "trace", skip_all, fields(len = self.arena.len()))]
    pub fn insert(&mut self, value: T) {
        let mut current = self.root;
        loop {
            let node = self.node(current);
            let goes_left = value < node.value;
            match if goes_left { node.left } else { node.right } {
                Some(child) => current = child,
                None => {
                    let idx = self.arena.insert(TreeNode::leaf(value));
                    let parent = &mut self.arena[current];
                    if goes_left {
                        parent.left = Some(idx);
                    } else {
                        parent.right = Some(idx);
                    }
                    trace!(?idx, goes_left, "attached leaf");
                    return;
                }
            }
        }
    }

    pub fn contains(&self, target: &T) -> bool {
        let mut current = Some(self.root);
        while let Some(idx) = current {
            let node = self.node(idx);
            if *target == node.value {
                return true;
            }
            current = if *target < node.value {
                node.left
            } else {
                node.right
            };
        }
        false
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Writes one line per value, in the order given.
pub(crate) fn write_lines<'a, T: fmt::Display + 'a>(
    out: &mut impl Write,
    values: impl IntoIterator<Item = &'a T>,
) -> io::Result<()> {
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Line output: the `*_write` methods take any writer, the `*_print` /
/// `*_dft` methods are the stdout case.
impl<T: fmt::Display> OrderedTree<T> {
    pub fn in_order_write(&self, out: &mut impl Write) -> io::Result<()> {
        write_lines(out, self.in_order())
    }

    pub fn pre_order_write(&self, out: &mut impl Write) -> io::Result<()> {
        write_lines(out, self.pre_order())
    }

    pub fn post_order_write(&self, out: &mut impl Write) -> io::Result<()> {
        write_lines(out, self.post_order())
    }

    pub fn in_order_print(&self) -> io::Result<()> {
        self.in_order_write(&mut io::stdout().lock())
    }

    pub fn pre_order_dft(&self) -> io::Result<()> {
        self.pre_order_write(&mut io::stdout().lock())
    }

    pub fn post_order_dft(&self) -> io::Result<()> {
        self.post_order_write(&mut io::stdout().lock())
    }
}
