//! The versioned range-sum tree.
//!
//! `PersistentSegmentTree` owns the array length and a version table. Every
//! operation takes `&self`: reads clone a root handle and walk it without
//! holding any lock, and updates build their new path unlocked and only
//! lock the table to publish the new root. Share it across threads with
//! `Arc`.

use std::ops::Bound;
use std::ops::RangeBounds;

use crate::error::Error;
use crate::error::Result;

use super::build;
use super::node::Node;
use super::node::NodeRef;
use super::primitives::Aggregate;
use super::primitives::Span;
use super::primitives::Version;
use super::query;
use super::update;
use super::versions::VersionTable;

/// A persistent segment tree answering range sums over every version.
#[derive(Debug)]
pub struct PersistentSegmentTree<T> {
    len: usize,
    versions: VersionTable<T>,
}

impl<T: Aggregate> PersistentSegmentTree<T> {
    /// Build version 0 from `values`.
    pub fn build(values: &[T]) -> PersistentSegmentTree<T> {
        let root = build::build(values);
        log::debug!("built {} over {} elements", Version::INITIAL, values.len());
        return PersistentSegmentTree {
            len: values.len(),
            versions: VersionTable::new(root),
        };
    }

    /// Build version 0 as `len` copies of the identity.
    pub fn zeroed(len: usize) -> PersistentSegmentTree<T> {
        return PersistentSegmentTree::build(&vec![T::default(); len]);
    }

    /// Length of the array every version holds.
    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of published versions, including version 0.
    pub fn version_count(&self) -> usize {
        return self.versions.len();
    }

    /// The most recently published version.
    pub fn latest(&self) -> Version {
        return self.versions.latest();
    }

    /// A handle to the root node of `version`.
    pub fn root(&self, version: Version) -> Result<NodeRef<T>> {
        return self.versions.get(version).ok_or_else(|| Error::InvalidVersion {
            version,
            count: self.versions.len(),
        });
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }
        return Ok(());
    }

    /// Publish a new version equal to `base` except that element `index`
    /// holds `value`, and return its id.
    ///
    /// `base` and every other version are left untouched; the new version
    /// shares all nodes off the updated path with `base`.
    pub fn update(&self, base: Version, index: usize, value: T) -> Result<Version> {
        let root = self.root(base)?;
        self.check_index(index)?;
        let new_root = update::update(&root, self.len, index, value);
        let version = self.versions.push(new_root);
        log::debug!("published {} from {}: index {}", version, base, index);
        return Ok(version);
    }

    /// Apply several point updates on top of `base` and publish only the
    /// result, as one new version. Later updates to the same index win.
    ///
    /// Every index is checked before anything is published.
    pub fn update_many(&self, base: Version, updates: &[(usize, T)]) -> Result<Version> {
        let root = self.root(base)?;
        for (index, _) in updates {
            self.check_index(*index)?;
        }
        let new_root = update::update_many(&root, self.len, updates);
        let version = self.versions.push(new_root);
        log::debug!("published {} from {}: {} updates", version, base, updates.len());
        return Ok(version);
    }

    /// Sum of the elements of `version` in the inclusive range
    /// `[left, right]`.
    ///
    /// An inverted range, or one entirely outside `[0, len)`, sums to the
    /// identity rather than failing. A range that extends past the end sums
    /// the part inside the array.
    pub fn query(&self, version: Version, left: usize, right: usize) -> Result<T> {
        let root = self.root(version)?;
        return Ok(query::query(&root, self.len, left, right));
    }

    /// Sum of the elements of `version` in `range`, for any Rust range
    /// form. Empty ranges sum to the identity.
    pub fn sum<R: RangeBounds<usize>>(&self, version: Version, range: R) -> Result<T> {
        let root = self.root(version)?;
        let left = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => match start.checked_add(1) {
                Some(start) => start,
                None => return Ok(T::default()),
            },
            Bound::Unbounded => 0,
        };
        let right = match range.end_bound() {
            Bound::Included(&end) => end,
            Bound::Excluded(&end) => match end.checked_sub(1) {
                Some(end) => end,
                None => return Ok(T::default()),
            },
            Bound::Unbounded => usize::MAX,
        };
        return Ok(query::query(&root, self.len, left, right));
    }

    /// Sum of every element of `version`, read straight off the root.
    pub fn total(&self, version: Version) -> Result<T> {
        let root = self.root(version)?;
        return Ok(root.value().clone());
    }

    /// The element at `index` in `version`.
    pub fn get(&self, version: Version, index: usize) -> Result<T> {
        let root = self.root(version)?;
        self.check_index(index)?;
        return Ok(query::get(&root, self.len, index));
    }

    /// The whole array as of `version`.
    pub fn to_vec(&self, version: Version) -> Result<Vec<T>> {
        let root = self.root(version)?;
        return Ok(query::to_vec(&root, self.len));
    }

    /// Number of nodes `derived` holds that `base` does not share.
    pub fn fresh_nodes(&self, base: Version, derived: Version) -> Result<usize> {
        let base = self.root(base)?;
        let derived = self.root(derived)?;
        return Ok(Node::fresh_nodes(&base, &derived));
    }

    /// Levels between the root and the deepest leaf.
    pub fn depth(&self) -> usize {
        return Span::root(self.len).map_or(0, |span| span.depth());
    }
}

impl<T: Aggregate> From<Vec<T>> for PersistentSegmentTree<T> {
    fn from(values: Vec<T>) -> PersistentSegmentTree<T> {
        return PersistentSegmentTree::build(&values);
    }
}

impl<T: Aggregate> FromIterator<T> for PersistentSegmentTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PersistentSegmentTree<T> {
        let values: Vec<T> = iter.into_iter().collect();
        return PersistentSegmentTree::build(&values);
    }
}
