//! Ordered maps keyed by a totally-ordered key
//!
//! Two variants over one node shape:
//! - `BstTree`: plain binary search tree, O(height) operations
//! - `AvlTree`: height-balanced via rotations, O(log n) guaranteed

pub mod avl;
pub mod bst;
mod node;
pub mod traverse;

pub use avl::AvlTree;
pub use bst::BstTree;
pub use traverse::Traversal;
