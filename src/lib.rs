//! Strata - a persistent range-sum segment tree.
//!
//! Every point update publishes a new version of the array and leaves all
//! earlier versions readable and unchanged. Only the nodes on the updated
//! root-to-leaf path are copied; everything else is shared between versions
//! through reference-counted handles.
//!
//! # Quick Start
//!
//! ```
//! use strata::PersistentSegmentTree;
//! use strata::Version;
//!
//! let tree = PersistentSegmentTree::build(&[1i64, 2, 3, 4]);
//! let v1 = tree.update(Version::INITIAL, 1, 5).unwrap();
//!
//! assert_eq!(tree.query(v1, 0, 3), Ok(13));
//! assert_eq!(tree.query(Version::INITIAL, 0, 3), Ok(10));
//! ```
//!
//! The raw traversals are internal; every read and write goes through the
//! checked methods on `PersistentSegmentTree`:
//!
//! ```compile_fail
//! use strata::tree::update::update;
//! ```

pub mod error;
pub mod tree;

pub use error::Error;
pub use error::Result;
pub use tree::PersistentSegmentTree;
pub use tree::primitives::Aggregate;
pub use tree::primitives::Version;
