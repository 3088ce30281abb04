//! Errors surfaced by tree operations.

use thiserror::Error;

use crate::tree::primitives::Version;

/// Error returned when an operation names something that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The version id was never published by this tree.
    #[error("invalid version {version}: only {count} versions exist")]
    InvalidVersion { version: Version, count: usize },
    /// The index lies outside `[0, len)`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
