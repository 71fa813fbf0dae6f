//! A height-balanced (AVL) binary search tree ordered by a caller-supplied
//! predicate instead of `Ord`, so the relative priority of two elements can
//! be decided by anything from a plain closure to a human answering
//! questions on a terminal.

mod node;
mod tree;
mod tree_iter;

pub use tree::AvlTree;
pub use tree_iter::TreeIter;
