#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-weld
//!
//! mesh-weld splits a sequence of points (or strided vertex records) into its
//! distinct elements plus an index buffer, preserving first-occurrence order.
//! It is the preprocessing step that turns raw vertex soup into indexed
//! geometry for element-array drawing.
//!
//! ## Features
//! - [`Point2`](geometry::point::Point2), an integer point with structural equality
//! - [`dedup`](weld::dedup::dedup) / [`Deduplicator`](weld::dedup::Deduplicator)
//!   for first-occurrence deduplication of any hashable sequence
//! - [`IndexedGeometry`](weld::indexed::IndexedGeometry) for welding flat
//!   component arrays with a fixed stride, and 16/32-bit index buffer export
//! - [`plane`](mesh_generation::plane) grid generator
//!
//! ## Determinism
//!
//! Output depends only on input order: the `n`-th distinct element seen
//! receives index `n`, independent of hashing.
//!
//! ## Usage
//! ```rust
//! use mesh_weld::prelude::*;
//!
//! let input: Vec<Point2> = [(0, 0), (1, 0), (0, 0), (2, 2), (0, 0)]
//!     .into_iter()
//!     .map(Point2::from)
//!     .collect();
//! let out = dedup_points(&input);
//! assert_eq!(out.indices(), &[0, 1, 0, 2, 0]);
//! assert_eq!(out.to_string(), "[0, 1, 0, 2, 0] [(0, 0), (1, 0), (2, 2)]");
//! ```
//!
//! ## Invariant checking
//! Debug builds validate results after each pass; enable the
//! `check-invariants` feature to keep those checks in release builds.

pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod mesh_generation;
pub mod weld;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::point::Point2;
    pub use crate::mesh_error::MeshWeldError;
    pub use crate::mesh_generation::plane;
    pub use crate::weld::dedup::{Dedup, Deduplicator, dedup, dedup_points, dedup_with};
    pub use crate::weld::indexed::{IndexBuffer, IndexedGeometry, WeldScalar};
    pub use crate::weld::options::{IndexWidth, WeldOptions};
    pub use crate::weld::registry::UniqueRegistry;
}
