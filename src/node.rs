//! A single node of a comparator-ordered binary search tree.
//!
//! A `Node` owns its value and, through `Box`es, both of its children. There are
//! no parent pointers, so the nodes form a strict tree and dropping a node drops
//! everything below it.
//!
//! Most code goes through [`Tree`][crate::Tree], which stores the comparator and
//! the duplicate policy and hands them down to the root. `Node` is public so that
//! traversal code can walk the structure with [`left`][Node::left] and
//! [`right`][Node::right] and mark nodes with [`visit`][Node::visit].
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Node;
//!
//! let less = |a: &i32, b: &i32| a < b;
//!
//! let mut root = Node::new(5);
//! root.insert(3, &less, true);
//! root.insert(8, &less, true);
//!
//! assert_eq!(root.left().map(|n| *n.get()), Some(3));
//! assert_eq!(root.right().map(|n| *n.get()), Some(8));
//! assert_eq!(root.search(&8, &less), Some(&8));
//! assert_eq!(root.search(&7, &less), None);
//! ```

use log::trace;

/// A child slot. Either empty or exclusively owned by the parent.
type Child<T> = Option<Box<Node<T>>>;

/// A node holding one value and up to two owned children.
///
/// Every value in the left subtree was routed there because the comparator
/// returned `true` against this node's value; every value in the right
/// subtree got `false`.
///
/// Only dropping is iterative. `Clone`, `Debug`, searching, inserting and
/// [`unvisit`][Node::unvisit] all recurse once per level of the tree.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Child<T>,
    right: Child<T>,

    /// Scratch marker for traversal code. Has nothing to do with ordering.
    visited: bool,
}

impl<T> Node<T> {
    /// Construct a childless, unvisited `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            visited: false,
        }
    }

    /// Returns the stored value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the stored value mutably.
    ///
    /// **Note** the tree is not reordered afterwards. Changing the value in a way
    /// that changes how it compares breaks lookups through this node.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The left child mutably, if any.
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// The right child mutably, if any.
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Places `value` in the subtree rooted at this node.
    ///
    /// When `allow_duplicates` is `false` and a node on the way down already holds
    /// a value `==` to `value`, nothing is inserted. Otherwise `cmp(&value, current)`
    /// picks the branch at each level (`true` goes left) and a new node is created
    /// in the first empty slot reached.
    ///
    /// `==` is only used for the duplicate check and `cmp` only for routing. If
    /// the two disagree the value still lands somewhere, just not anywhere useful.
    pub fn insert<F>(&mut self, value: T, cmp: &F, allow_duplicates: bool)
    where
        T: PartialEq,
        F: Fn(&T, &T) -> bool,
    {
        if !allow_duplicates && self.value == value {
            trace!("dropping duplicate value");
            return;
        }

        let slot = if cmp(&value, &self.value) {
            &mut self.left
        } else {
            &mut self.right
        };

        match slot {
            Some(child) => child.insert(value, cmp, allow_duplicates),
            None => *slot = Some(Box::new(Node::new(value))),
        }
    }

    /// Finds the first node on the descent path for `value` whose value is `==`
    /// to it.
    ///
    /// The path is the one `cmp` picks, exactly as in [`insert`][Node::insert],
    /// so with duplicates the match closest to this node wins. Never touches
    /// the visited flags.
    pub fn search<F>(&self, value: &T, cmp: &F) -> Option<&T>
    where
        T: PartialEq,
        F: Fn(&T, &T) -> bool,
    {
        if self.value == *value {
            return Some(&self.value);
        }

        let child = if cmp(value, &self.value) {
            self.left()
        } else {
            self.right()
        };
        child?.search(value, cmp)
    }

    /// Same as [`search`][Node::search] but hands back a mutable reference.
    pub fn search_mut<F>(&mut self, value: &T, cmp: &F) -> Option<&mut T>
    where
        T: PartialEq,
        F: Fn(&T, &T) -> bool,
    {
        if self.value == *value {
            return Some(&mut self.value);
        }

        let child = if cmp(value, &self.value) {
            self.left_mut()
        } else {
            self.right_mut()
        };
        child?.search_mut(value, cmp)
    }

    /// Marks this node as visited.
    pub fn visit(&mut self) {
        self.visited = true;
    }

    /// Clears the visited mark on this node. With `recurse` the marks of every
    /// descendant are cleared too; without it the children are left alone.
    pub fn unvisit(&mut self, recurse: bool) {
        self.visited = false;

        if recurse {
            if let Some(left) = self.left_mut() {
                left.unvisit(true);
            }
            if let Some(right) = self.right_mut() {
                right.unvisit(true);
            }
        }
    }

    /// Whether [`visit`][Node::visit] was called since the last unvisit.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub(crate) fn len(&self) -> usize {
        1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len)
    }
}

impl<T> Drop for Node<T> {
    // Unlinks descendants onto the heap so that long chains (e.g. built from
    // sorted input) don't drop one stack frame per level. `unlinked` holds every
    // parent ahead of its children, so popping from the back releases children
    // first. This node's own value goes last, when its fields drop.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        let mut unlinked = Vec::new();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            unlinked.push(node);
        }

        while unlinked.pop().is_some() {}
    }
}
