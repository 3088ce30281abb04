//! Immutable sum nodes.
//!
//! A node is the sum of the elements under its implicit `Span`. Nodes are
//! only ever handed out behind `Arc`, so once one is built nobody can get
//! `&mut` access to it again: a "change" always means a new node.
//!
//! Several versions commonly share one node. Reference counting keeps it
//! alive while any version root, or any traversal that cloned a root,
//! still reaches it.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::primitives::Aggregate;

/// A shared handle to a node.
pub type NodeRef<T> = Arc<Node<T>>;

/// An aggregate-sum tree node.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    /// `None` for leaves, `[left, right]` otherwise.
    children: Option<[NodeRef<T>; 2]>,
}

impl<T: Aggregate> Node<T> {
    /// A leaf holding one array element.
    pub fn leaf(value: T) -> NodeRef<T> {
        return Arc::new(Node { value, children: None });
    }

    /// An internal node over two children. The value is always derived
    /// from the children, never supplied by the caller.
    pub fn branch(left: NodeRef<T>, right: NodeRef<T>) -> NodeRef<T> {
        let value = left.value.combine(&right.value);
        return Arc::new(Node {
            value,
            children: Some([left, right]),
        });
    }

    /// The root of an empty array: a childless node holding the identity.
    pub fn empty() -> NodeRef<T> {
        return Node::leaf(T::default());
    }
}

impl<T> Node<T> {
    /// The sum of every element under this node.
    #[inline(always)]
    pub fn value(&self) -> &T {
        return &self.value;
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        return self.children.is_none();
    }

    #[inline(always)]
    pub fn children(&self) -> Option<&[NodeRef<T>; 2]> {
        return self.children.as_ref();
    }

    pub fn left(&self) -> Option<&NodeRef<T>> {
        return self.children.as_ref().map(|[left, _]| left);
    }

    pub fn right(&self) -> Option<&NodeRef<T>> {
        return self.children.as_ref().map(|[_, right]| right);
    }

    /// Count the distinct nodes reachable from `root`.
    pub fn count(root: &NodeRef<T>) -> usize {
        return reachable(root).len();
    }

    /// Count the nodes reachable from `derived` that are not reachable from
    /// `base`, by identity. For a single point update this is the number of
    /// nodes the update allocated.
    pub fn fresh_nodes(base: &NodeRef<T>, derived: &NodeRef<T>) -> usize {
        let old = reachable(base);
        let mut seen = FxHashSet::default();
        let mut stack = vec![derived];
        let mut fresh = 0;
        while let Some(node) = stack.pop() {
            let ptr = Arc::as_ptr(node);
            // Anything below a shared node is shared too.
            if old.contains(&ptr) || !seen.insert(ptr) {
                continue;
            }
            fresh += 1;
            if let Some([left, right]) = node.children() {
                stack.push(right);
                stack.push(left);
            }
        }
        return fresh;
    }
}

fn reachable<T>(root: &NodeRef<T>) -> FxHashSet<*const Node<T>> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if !seen.insert(Arc::as_ptr(node)) {
            continue;
        }
        if let Some([left, right]) = node.children() {
            stack.push(right);
            stack.push(left);
        }
    }
    return seen;
}
