//! Version identifiers.
//!
//! Versions are dense: the first build publishes `Version(0)` and every
//! update publishes the next integer. Ids are never reused or replaced.

use std::fmt;

/// Identifies one published snapshot of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(pub usize);

impl Version {
    /// The version produced by the initial build.
    pub const INITIAL: Version = Version(0);

    /// The raw index into the version table.
    #[inline(always)]
    pub fn index(self) -> usize {
        return self.0;
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "v{}", self.0);
    }
}
