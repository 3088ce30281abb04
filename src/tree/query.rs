//! Read-only traversals: range sums, point lookups, materialization.
//!
//! Range sums use the three-way overlap decomposition. A node whose span is
//! disjoint from the query contributes the identity, a node wholly inside
//! it contributes its stored value without descending, and only the
//! straddling nodes recurse. At most two straddling nodes exist per level,
//! so a query visits O(log n) nodes.
//!
//! Nothing here allocates nodes or takes `&mut` to one.

use super::node::NodeRef;
use super::primitives::Aggregate;
use super::primitives::Overlap;
use super::primitives::Side;
use super::primitives::Span;

/// Sum of the elements in the inclusive range `[left, right]`.
///
/// An inverted range (`left > right`) or one that lies entirely outside
/// `[0, len)` sums to the identity. A range that sticks out past either end
/// sums the part that overlaps the array.
pub fn query<T: Aggregate>(root: &NodeRef<T>, len: usize, left: usize, right: usize) -> T {
    if left > right {
        return T::default();
    }
    return match Span::root(len) {
        Some(span) => query_span(root, span, left, right),
        None => T::default(),
    };
}

fn query_span<T: Aggregate>(node: &NodeRef<T>, span: Span, left: usize, right: usize) -> T {
    match span.overlap(left, right) {
        Overlap::None => return T::default(),
        Overlap::Total => return node.value().clone(),
        Overlap::Partial => {}
    }
    // A partial overlap is never a leaf: a one-element span either lies
    // inside the query or outside it.
    let [left_child, right_child] = node.children().expect("partial overlap on a branch");
    let (left_span, right_span) = span.split();
    let sum_left = query_span(left_child, left_span, left, right);
    let sum_right = query_span(right_child, right_span, left, right);
    return sum_left.combine(&sum_right);
}

/// The element at `index`. The caller checks `index < len`.
pub fn get<T: Aggregate>(root: &NodeRef<T>, len: usize, index: usize) -> T {
    debug_assert!(index < len);
    let Some(mut span) = Span::root(len) else {
        return T::default();
    };
    let mut node = root;
    while !span.is_leaf() {
        let [left, right] = node.children().expect("branch over a non-leaf span");
        let (side, next) = span.descend(index);
        node = match side {
            Side::Left => left,
            Side::Right => right,
        };
        span = next;
    }
    return node.value().clone();
}

/// Every element in index order.
pub fn to_vec<T: Aggregate>(root: &NodeRef<T>, len: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(len);
    if len == 0 {
        return out;
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.children() {
            Some([left, right]) => {
                stack.push(right);
                stack.push(left);
            }
            None => out.push(node.value().clone()),
        }
    }
    return out;
}
