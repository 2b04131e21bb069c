use cmp_bst::{Error, Node, Tree};

use std::cell::Cell;
use std::collections::HashSet;

use crate::{values, walk};

fn less(a: &i8, b: &i8) -> bool {
    a < b
}

fn greater(a: &i8, b: &i8) -> bool {
    a > b
}

/// Checks that every node's left subtree was routed left by `cmp` and every
/// right subtree was routed right.
fn ordered<F>(tree: &Tree<i8, F>, cmp: F) -> bool
where
    F: Fn(&i8, &i8) -> bool,
{
    let mut ok = true;
    if let Some(root) = tree.root() {
        walk(root, &mut |n: &Node<i8>| {
            ok &= values(n.left()).iter().all(|v| cmp(v, n.get()));
            ok &= values(n.right()).iter().all(|v| !cmp(v, n.get()));
        });
    }
    ok
}

quickcheck::quickcheck! {
    fn ordering_invariant_less(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new(less);
        tree.extend(xs);

        ordered(&tree, less)
    }

    fn ordering_invariant_greater(xs: Vec<i8>, allow_duplicates: bool) -> bool {
        let mut tree = Tree::with_duplicates(greater, allow_duplicates);
        tree.extend(xs);

        ordered(&tree, greater)
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new(less);
        tree.extend(xs.iter().copied());

        xs.iter().all(|x| tree.search(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new(less);
        tree.extend(xs.iter().copied());

        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }

    fn duplicates_rejected(xs: Vec<i8>) -> bool {
        let mut tree = Tree::with_duplicates(less, false);
        tree.extend(xs.iter().copied());

        let distinct: HashSet<_> = xs.iter().collect();
        tree.len() == distinct.len() && xs.iter().all(|x| tree.search(x) == Some(x))
    }

    fn duplicates_kept(xs: Vec<i8>, extra: i8) -> bool {
        let mut tree = Tree::new(less);
        tree.extend(xs.iter().copied());
        tree.insert(extra);
        let before = tree.len();
        tree.insert(extra);

        tree.len() == before + 1 && tree.len() == xs.len() + 2
    }

    fn erratic_comparator_keeps_every_insert(xs: Vec<i8>, seed: u32) -> bool {
        // Linear congruential generator: answers have nothing to do with the values.
        let state = Cell::new(seed);
        let erratic = |_: &i8, _: &i8| {
            state.set(state.get().wrapping_mul(1_664_525).wrapping_add(1_013_904_223));
            state.get() >> 31 == 1
        };
        let mut tree = Tree::new(erratic);
        tree.extend(xs.iter().copied());

        let searches_agree = xs
            .iter()
            .chain(&[i8::MIN, 0, i8::MAX])
            .all(|x| tree.search(x).map_or(true, |found| found == x));
        let unvisited = xs.is_empty() || tree.unvisit_nodes().is_ok();

        tree.len() == xs.len() && searches_agree && unvisited
    }

    fn unvisit_nodes_clears_everything(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new(less);
        tree.extend(xs.iter().copied());

        match tree.root_mut() {
            None => {
                tree.unvisit_nodes().unwrap_err()
                    == Error::EmptyTree { operation: "unvisit_nodes" }
            }
            Some(root) => {
                root.visit();
                if let Some(left) = root.left_mut() {
                    left.visit();
                }
                if let Some(right) = root.right_mut() {
                    right.visit();
                }
                tree.unvisit_nodes().unwrap();

                let mut any_visited = false;
                walk(tree.root().unwrap(), &mut |n: &Node<i8>| {
                    any_visited |= n.is_visited()
                });
                !any_visited
            }
        }
    }
}

#[test]
fn visited_chain_scenario() {
    let mut tree = Tree::new(less);
    tree.insert(1).insert(2).insert(3);

    let root = tree.root_mut().unwrap();
    root.visit();
    root.right_mut().unwrap().visit();
    root.unvisit(false);
    assert!(!root.is_visited());
    assert!(root.right().unwrap().is_visited());

    tree.unvisit_nodes().unwrap();
    let mut any_visited = false;
    walk(tree.root().unwrap(), &mut |n: &Node<i8>| any_visited |= n.is_visited());
    assert!(!any_visited);
}

#[test]
fn erratic_comparator_lets_rejected_duplicates_through() {
    let state = Cell::new(7u32);
    let erratic = |_: &i8, _: &i8| {
        state.set(state.get().wrapping_mul(1_664_525).wrapping_add(1_013_904_223));
        state.get() >> 31 == 1
    };
    let mut tree = Tree::with_duplicates(erratic, false);
    for x in 0..500 {
        tree.insert((x % 37) as i8);
    }

    // Without a consistent comparator the duplicate check only sees the nodes on
    // the path it happens to take, so some repeats are stored anyway.
    assert!(tree.len() > 37);
    assert!(tree.len() < 500);
    for x in 0..37 {
        if let Some(found) = tree.search(&x) {
            assert_eq!(*found, x);
        }
    }
    tree.unvisit_nodes().unwrap();
}
