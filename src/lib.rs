//! Classic data structures on generational arenas.
//!
//! - [`OrderedTree`]: unbalanced binary search tree with recursive, queue based
//!   and stack based traversals
//! - [`PositionalList`]: doubly linked list with handle based moves and deletion
//! - [`Stack`] / [`Queue`]: adapters over [`SinglyLinkedList`]
//!
//! Absence of data is reported as `None`. The only error is a [`NodeHandle`]
//! that does not name a live node of the list it is passed to.

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod linked_list;
pub mod list;
pub mod queue;
pub mod stack;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use errors::{CollectionError, CollectionResult};
pub use linked_list::SinglyLinkedList;
pub use list::{NodeHandle, PositionalList};
pub use queue::Queue;
pub use stack::Stack;
pub use tree::{OrderedTree, TreeNode};
pub use tree_traits::TreeRender;
