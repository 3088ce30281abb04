//! The persistent range-sum tree and its building blocks.
//!
//! - `build`: the initial version from a slice
//! - `update`: point updates by path copying
//! - `query`: range sums, lookups and materialization
//! - `versions`: the append-only version table
//! - `persistent`: the public tree tying them together
//!
//! The traversals trust the root and length they are handed, so only
//! `PersistentSegmentTree`, which checks versions and indices first, is
//! exported.

pub(crate) mod build;
pub mod node;
pub mod persistent;
pub mod primitives;
pub(crate) mod query;
pub(crate) mod update;
pub(crate) mod versions;

pub use node::Node;
pub use node::NodeRef;
pub use persistent::PersistentSegmentTree;
