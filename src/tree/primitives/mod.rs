//! Shared primitives for the tree operations.
//!
//! - `Aggregate`: the sum every node stores
//! - `Span`: the implicit `[start, end]` range and its one splitting rule
//! - `Version`: dense snapshot identifiers

pub mod aggregate;
pub mod span;
pub mod version;

pub use aggregate::Aggregate;
pub use span::Overlap;
pub use span::Side;
pub use span::Span;
pub use version::Version;
