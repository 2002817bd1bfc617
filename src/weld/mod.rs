//! Welding: first-occurrence deduplication and indexed vertex buffers.
//!
//! - [`registry::UniqueRegistry`] interns keys to dense indices in insertion order.
//! - [`dedup`](dedup::dedup) and [`dedup::Deduplicator`] split a sequence into its
//!   unique elements plus a per-element index map.
//! - [`indexed::IndexedGeometry`] applies the same pass to strided vertex data.

pub mod dedup;
pub mod indexed;
pub mod options;
pub mod registry;

#[cfg(test)]
mod tests;

pub use dedup::{Dedup, Deduplicator, dedup, dedup_points, dedup_with};
pub use indexed::{IndexBuffer, IndexedGeometry, WeldScalar};
pub use options::{IndexWidth, WeldOptions};
pub use registry::UniqueRegistry;
