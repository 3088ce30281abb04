//! The append-only table of version roots.
//!
//! Ids are dense: entry `i` is `Version(i)`. Entries are never replaced or
//! removed. A push holds the write lock only for the `Vec::push` itself, so
//! writers building new paths never block each other or readers.

use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use super::node::NodeRef;
use super::primitives::Version;

/// Maps version ids to root handles.
#[derive(Debug)]
pub struct VersionTable<T> {
    roots: RwLock<Vec<NodeRef<T>>>,
}

impl<T> VersionTable<T> {
    /// A table whose only entry is `root`, published as `Version(0)`.
    pub fn new(root: NodeRef<T>) -> VersionTable<T> {
        return VersionTable {
            roots: RwLock::new(vec![root]),
        };
    }

    // A push is a single `Vec::push`: a panic elsewhere while holding the
    // lock cannot leave the table half-written, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<NodeRef<T>>> {
        return self.roots.read().unwrap_or_else(PoisonError::into_inner);
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<NodeRef<T>>> {
        return self.roots.write().unwrap_or_else(PoisonError::into_inner);
    }

    /// Publish `root` and return its id.
    pub fn push(&self, root: NodeRef<T>) -> Version {
        let mut roots = self.write();
        let version = Version(roots.len());
        roots.push(root);
        return version;
    }

    /// A handle to the root of `version`, if it was published.
    ///
    /// The returned handle keeps every node of that version alive for as
    /// long as the caller holds it.
    pub fn get(&self, version: Version) -> Option<NodeRef<T>> {
        return self.read().get(version.index()).cloned();
    }

    /// Number of published versions.
    pub fn len(&self) -> usize {
        return self.read().len();
    }

    /// The most recently published id.
    pub fn latest(&self) -> Version {
        return Version(self.len() - 1);
    }
}
