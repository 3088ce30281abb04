//! Building the initial version.

use super::node::Node;
use super::node::NodeRef;
use super::primitives::Aggregate;
use super::primitives::Span;

/// Build a tree over `values`, returning its root.
///
/// Allocates `2n - 1` nodes for `n > 0`. An empty slice yields the
/// degenerate identity root.
pub fn build<T: Aggregate>(values: &[T]) -> NodeRef<T> {
    return match Span::root(values.len()) {
        Some(span) => build_span(values, span),
        None => Node::empty(),
    };
}

fn build_span<T: Aggregate>(values: &[T], span: Span) -> NodeRef<T> {
    if span.is_leaf() {
        return Node::leaf(values[span.start].clone());
    }
    let (left, right) = span.split();
    return Node::branch(build_span(values, left), build_span(values, right));
}
