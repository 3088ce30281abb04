//! Point updates by path copying.
//!
//! An update never touches an existing node. It walks from the base root
//! down to the target leaf, remembering the path, then rebuilds that path
//! bottom-up: a fresh leaf, and above it one fresh branch per level whose
//! off-path child is the very same `Arc` the old branch pointed at.
//!
//! Exactly `depth + 1` nodes are allocated, where `depth` is the number of
//! levels between the root and the leaf.

use smallvec::SmallVec;

use super::node::Node;
use super::node::NodeRef;
use super::primitives::Aggregate;
use super::primitives::Side;
use super::primitives::Span;

/// Path entries kept on the stack before spilling to the heap.
/// A tree of 2^32 elements is 32 levels deep.
const INLINE_DEPTH: usize = 32;

/// Return the root of a new tree equal to `root` except that element
/// `index` holds `value`. `len` is the array length `root` was built over.
///
/// The caller checks `index < len`.
pub fn update<T: Aggregate>(root: &NodeRef<T>, len: usize, index: usize, value: T) -> NodeRef<T> {
    debug_assert!(index < len);
    let Some(mut span) = Span::root(len) else {
        return root.clone();
    };

    let mut path: SmallVec<[(&NodeRef<T>, Side); INLINE_DEPTH]> = SmallVec::new();
    let mut node = root;
    while !span.is_leaf() {
        let [left, right] = node.children().expect("branch over a non-leaf span");
        let (side, next) = span.descend(index);
        path.push((node, side));
        node = match side {
            Side::Left => left,
            Side::Right => right,
        };
        span = next;
    }
    log::trace!("path copy: index {} at depth {}", index, path.len());

    let mut current = Node::leaf(value);
    while let Some((parent, side)) = path.pop() {
        let [left, right] = parent.children().expect("path entries are branches");
        current = match side {
            Side::Left => Node::branch(current, right.clone()),
            Side::Right => Node::branch(left.clone(), current),
        };
    }
    return current;
}

/// Apply `updates` in order on top of `root` and return the final root.
/// Later updates to the same index win.
///
/// The caller checks every index against `len`.
pub fn update_many<T: Aggregate>(root: &NodeRef<T>, len: usize, updates: &[(usize, T)]) -> NodeRef<T> {
    let mut current = root.clone();
    for (index, value) in updates {
        current = update(&current, len, *index, value.clone());
    }
    return current;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tree::build::build;

    #[test]
    fn base_root_unchanged() {
        let base = build(&[1i64, 2, 3, 4]);
        let derived = update(&base, 4, 1, 5);

        assert_eq!(*derived.value(), 13);
        assert_eq!(*base.value(), 10);
        assert_eq!(*derived.left().unwrap().value(), 6);
        assert_eq!(*base.left().unwrap().value(), 3);
    }

    #[test]
    fn off_path_child_is_shared() {
        let base = build(&[1i64, 2, 3, 4]);
        let derived = update(&base, 4, 1, 5);

        assert!(Arc::ptr_eq(base.right().unwrap(), derived.right().unwrap()));
        assert!(!Arc::ptr_eq(base.left().unwrap(), derived.left().unwrap()));
        assert!(Arc::ptr_eq(
            base.left().unwrap().left().unwrap(),
            derived.left().unwrap().left().unwrap(),
        ));
    }

    #[test]
    fn allocates_one_node_per_level() {
        for len in 1..50usize {
            let values: Vec<i32> = (0..len as i32).collect();
            let base = build(&values);
            let depth = Span::root(len).unwrap().depth();
            for index in 0..len {
                let derived = update(&base, len, index, -1);
                let fresh = Node::fresh_nodes(&base, &derived);
                assert!(fresh <= depth + 1);
                // Shallow leaves sit one level above the deepest ones.
                assert!(fresh >= depth);
            }
        }
    }

    #[test]
    fn single_element() {
        let base = build(&[7u32]);
        let derived = update(&base, 1, 0, 9);
        assert_eq!(*derived.value(), 9);
        assert_eq!(*base.value(), 7);
        assert!(derived.is_leaf());
    }

    #[test]
    fn many_applies_in_order() {
        let base = build(&[0i64; 8]);
        let derived = update_many(&base, 8, &[(0, 1), (7, 2), (0, 3)]);
        assert_eq!(*derived.value(), 5);
        assert_eq!(*base.value(), 0);
    }

    #[test]
    fn many_empty_is_base() {
        let base = build(&[1i64, 2]);
        let derived = update_many(&base, 2, &[]);
        assert!(Arc::ptr_eq(&base, &derived));
    }
}
