//! Implicit node ranges.
//!
//! Nodes never store the index range they cover. Every traversal threads a
//! `Span` down from the root instead, and splits it with `Span::split`, the
//! one midpoint rule used by build, update, query and lookup alike:
//!
//! ```text
//! mid   = floor((start + end) / 2)
//! left  = [start, mid]
//! right = [mid + 1, end]
//! ```

/// An inclusive index range `[start, end]`, never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Which child of a split span an index falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// How a query range relates to a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// The ranges are disjoint.
    None,
    /// The query range covers the whole span.
    Total,
    /// The query range straddles at least one edge of the span.
    Partial,
}

impl Span {
    /// Create a span over `[start, end]`.
    pub fn new(start: usize, end: usize) -> Span {
        debug_assert!(start <= end);
        return Span { start, end };
    }

    /// The root span of an array of length `len`, or `None` if it is empty.
    pub fn root(len: usize) -> Option<Span> {
        if len == 0 {
            return None;
        }
        return Some(Span::new(0, len - 1));
    }

    /// Number of indices covered.
    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.end - self.start + 1;
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        return self.start == self.end;
    }

    #[inline(always)]
    pub fn contains(&self, index: usize) -> bool {
        return self.start <= index && index <= self.end;
    }

    /// The midpoint, `floor((start + end) / 2)` without overflow.
    #[inline(always)]
    pub fn mid(&self) -> usize {
        return self.start + (self.end - self.start) / 2;
    }

    /// Split into `([start, mid], [mid + 1, end])`.
    ///
    /// Must not be called on a leaf span.
    #[inline]
    pub fn split(&self) -> (Span, Span) {
        debug_assert!(!self.is_leaf());
        let mid = self.mid();
        return (Span::new(self.start, mid), Span::new(mid + 1, self.end));
    }

    /// Which half of this span holds `index`.
    #[inline(always)]
    pub fn side(&self, index: usize) -> Side {
        if index <= self.mid() {
            return Side::Left;
        }
        return Side::Right;
    }

    /// Step into the half that holds `index`.
    #[inline]
    pub fn descend(&self, index: usize) -> (Side, Span) {
        let (left, right) = self.split();
        return match self.side(index) {
            Side::Left => (Side::Left, left),
            Side::Right => (Side::Right, right),
        };
    }

    /// Classify the inclusive query range `[left, right]` against this span.
    #[inline]
    pub fn overlap(&self, left: usize, right: usize) -> Overlap {
        if right < self.start || left > self.end {
            return Overlap::None;
        }
        if left <= self.start && self.end <= right {
            return Overlap::Total;
        }
        return Overlap::Partial;
    }

    /// Height of the tree over this span: the number of edges on the
    /// longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut span = *self;
        while !span.is_leaf() {
            // The left half is never shorter than the right one.
            span = span.split().0;
            depth += 1;
        }
        return depth;
    }
}
