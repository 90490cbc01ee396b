//! An ordered key/value container backed by a Binary Search Tree (BST) with
//! parent back-pointers.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key, a value associated
//! with that key, and up to two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! These invariants make searching take `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`) and give sorted
//! iteration for free by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! The tree here does no rebalancing, so `height` is only `O(lg N)` for
//! friendly insertion orders; inserting sorted input degrades the shape to a
//! list. Each node additionally keeps a back-reference to its parent, which
//! the deletion algorithm uses for relinking and the in-order iterator uses
//! to advance without a stack. Nodes are stored in an index-addressed arena
//! rather than behind owning pointers, so those back-references are plain
//! indices with no ownership of their own.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8] {
//!     tree.insert(key, key.to_string());
//! }
//!
//! assert_eq!(tree.find(&3), Some(&"3".to_string()));
//! assert_eq!(tree.min(), Some((&3, &"3".to_string())));
//!
//! let mut keys = Vec::new();
//! tree.traverse(Traversal::InOrder, |key, _| keys.push(*key));
//! assert_eq!(keys, [3, 5, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use crate::traverse::{Iter, Traversal};
pub use crate::tree::Tree;
