use std::collections::HashMap;
use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::stack::Stack;
use crate::tree::OrderedTree;

const EMPTY_SLOT: &str = "∅";

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

// Leaves have no children rendered; an inner node with a single child shows
// the missing side as EMPTY_SLOT, so left and right stay distinguishable.
// Subtrees are assembled bottom-up from a post-order stack walk, so a chain
// of any length renders without recursion.
impl<T: Display> TreeRender for OrderedTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let mut finished: HashMap<Index, Tree<String>> = HashMap::new();
        let mut stack = Stack::new();
        stack.push((self.root(), false));

        while let Some((idx, visited)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            let children = [node.left, node.right];
            if !visited {
                stack.push((idx, true));
                for child in children.into_iter().flatten() {
                    stack.push((child, false));
                }
                continue;
            }

            let mut subtree = Tree::new(node.value.to_string());
            if children.iter().any(Option::is_some) {
                for child in children {
                    subtree.push(
                        child
                            .and_then(|child_idx| finished.remove(&child_idx))
                            .unwrap_or_else(|| Tree::new(EMPTY_SLOT.to_string())),
                    );
                }
            }
            finished.insert(idx, subtree);
        }

        finished
            .remove(&self.root())
            .unwrap_or_else(|| Tree::new(EMPTY_SLOT.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_one_sided_node_when_rendering_then_marks_missing_child() {
        let mut tree = OrderedTree::new(2);
        tree.insert(3);
        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "2");
        assert!(lines[1].ends_with(EMPTY_SLOT));
        assert!(lines[2].ends_with('3'));
    }

    #[test]
    fn given_full_node_when_rendering_then_left_comes_before_right() {
        let mut tree = OrderedTree::new(5);
        tree.extend([3, 8, 1]);
        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with('3'));
        assert!(lines[2].ends_with('1'));
        assert!(lines[3].ends_with(EMPTY_SLOT));
        assert!(lines[4].ends_with('8'));
    }
}
