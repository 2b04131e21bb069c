//! A binary search tree ordered by a caller-supplied comparator.
//!
//! The comparator is a predicate `(candidate, current) -> bool`: `true` sends the
//! candidate into the left subtree, `false` into the right one. Equality (`==` on
//! `T`) is a separate concern. It decides whether a search has found its value
//! and, when the tree rejects duplicates, whether an insert is dropped.
//!
//! There is no balancing, no deletion and no iterator. Callers that need to walk
//! the tree start from [`Tree::root`] and use the visited flags on each
//! [`Node`] as scratch space; [`Tree::unvisit_nodes`] resets them between passes.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&5), None);
//!
//! tree.insert(5).insert(3).insert(8).insert(1);
//!
//! assert_eq!(tree.search(&3), Some(&3));
//! assert_eq!(tree.search(&9), None);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.get(), &5);
//! assert_eq!(root.left().unwrap().left().unwrap().get(), &1);
//! ```
//!
//! Rejecting duplicates:
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut tree = Tree::with_duplicates(|a: &i32, b: &i32| a < b, false);
//! tree.extend(vec![5, 5, 5]);
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree.search(&5), Some(&5));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::node::Node;

/// A binary search tree whose shape is decided by the comparator `F`.
///
/// The comparator and the duplicate policy are fixed when the tree is built.
/// Changing either afterwards would leave already placed nodes on the wrong side.
#[derive(Clone)]
pub struct Tree<T, F> {
    root: Option<Box<Node<T>>>,
    cmp: F,
    allow_duplicates: bool,
}

impl<T, F> fmt::Debug for Tree<T, F>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("allow_duplicates", &self.allow_duplicates)
            .finish()
    }
}

impl<T, F> Tree<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Generates a new, empty `Tree` that keeps duplicate values.
    pub fn new(cmp: F) -> Self {
        Self::with_duplicates(cmp, true)
    }

    /// Generates a new, empty `Tree` with an explicit duplicate policy. With
    /// `allow_duplicates` set to `false`, inserting a value `==` to one already
    /// met on the way down is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::with_duplicates(|a: &i32, b: &i32| a < b, true);
    /// tree.insert(1).insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn with_duplicates(cmp: F, allow_duplicates: bool) -> Self {
        Self {
            root: None,
            cmp,
            allow_duplicates,
        }
    }

    /// Generates a `Tree` whose root already holds `value`. Duplicates are kept.
    pub fn with_root(cmp: F, value: T) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
            cmp,
            allow_duplicates: true,
        }
    }

    /// Whether this tree keeps values that are `==` to one already present.
    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Places `value` in the tree and returns the tree for chaining.
    ///
    /// The first insert becomes the root without consulting the comparator.
    /// Every later one descends from the root, see [`Node::insert`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new(|a: &&str, b: &&str| a.len() < b.len());
    /// tree.insert("ccc").insert("a").insert("dddd");
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.get(), &"ccc");
    /// assert_eq!(root.left().unwrap().get(), &"a");
    /// assert_eq!(root.right().unwrap().get(), &"dddd");
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: PartialEq,
    {
        match self.root {
            Some(ref mut root) => root.insert(value, &self.cmp, self.allow_duplicates),
            None => {
                trace!("creating root node");
                self.root = Some(Box::new(Node::new(value)));
            }
        }
        self
    }

    /// Potentially finds a stored value `==` to `value`. If the descent picked
    /// by the comparator ends without a match, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.root()?.search(value, &self.cmp)
    }

    /// Same as [`search`][Tree::search] but hands back a mutable reference.
    pub fn search_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: PartialEq,
    {
        let cmp = &self.cmp;
        self.root.as_deref_mut()?.search_mut(value, cmp)
    }
}

impl<T, F> Tree<T, F> {
    /// The root node, or `None` for a tree that was never inserted into.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The root node mutably, or `None` for a tree that was never inserted into.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// The root node, failing with [`Error::EmptyTree`] if there is none.
    pub fn try_root(&self) -> Result<&Node<T>> {
        self.root().ok_or_else(|| empty_tree("try_root"))
    }

    /// The root node mutably, failing with [`Error::EmptyTree`] if there is none.
    pub fn try_root_mut(&mut self) -> Result<&mut Node<T>> {
        self.root_mut().ok_or_else(|| empty_tree("try_root_mut"))
    }

    /// Clears the visited flag on every node and returns the tree for chaining.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyTree`] if the tree has no root.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new(|a: &i32, b: &i32| a < b);
    /// assert!(matches!(tree.unvisit_nodes(), Err(Error::EmptyTree { .. })));
    ///
    /// tree.insert(1).insert(2);
    /// tree.root_mut().unwrap().visit();
    /// tree.unvisit_nodes().unwrap();
    ///
    /// assert!(!tree.root().unwrap().is_visited());
    /// ```
    pub fn unvisit_nodes(&mut self) -> Result<&mut Self> {
        match self.root_mut() {
            Some(root) => {
                debug!("unvisiting all nodes");
                root.unvisit(true);
            }
            None => return Err(empty_tree("unvisit_nodes")),
        }
        Ok(self)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree, counting kept duplicates.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }
}

impl<T, F> Extend<T> for Tree<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

fn empty_tree(operation: &'static str) -> Error {
    debug!("refusing `{}` on an empty tree", operation);
    Error::EmptyTree { operation }
}
