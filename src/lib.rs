//! This crate exposes a Binary Search Tree (BST) whose ordering comes from a
//! caller-supplied comparator rather than from `Ord`.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and owns up to two child `Node`s. Here the invariants are
//! phrased in terms of the comparator `cmp(candidate, current)`:
//!
//! 1. For every `Node` in the tree, every value in its left subtree got `true`
//!    from `cmp(value, node_value)`.
//! 2. For every `Node` in the tree, every value in its right subtree got
//!    `false` from `cmp(value, node_value)`.
//!
//! The comparator should be a strict weak ordering that agrees with `==` on
//! the stored type. The tree does not check this. With a comparator that
//! disagrees with `==`, inserts still terminate and land somewhere, but a
//! search may miss values that are in the tree.
//!
//! Each `Node` also carries a "visited" flag that plays no part in ordering.
//! It is scratch space for traversal code written on top of the tree (cycle or
//! repeat-visit detection, for instance) and has to be reset between passes
//! with [`Tree::unvisit_nodes`].
//!
//! The tree is not synchronized. Share it between threads behind a lock.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
//! tree.insert(5).insert(3).insert(8);
//!
//! let root = tree.root_mut().unwrap();
//! root.visit();
//! assert!(root.is_visited());
//!
//! tree.unvisit_nodes().unwrap();
//! assert!(!tree.root().unwrap().is_visited());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
