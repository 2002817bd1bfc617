//! MeshWeldError: Unified error type for mesh-weld public APIs
//!
//! Point deduplication itself cannot fail; this error type covers the
//! indexed-geometry surface (stride validation, index buffers, generators).

use thiserror::Error;

/// Unified error type for mesh-weld operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshWeldError {
    /// Stride is zero or does not evenly divide the flat component array.
    #[error("flat array length {len} must be divisible by a positive stride (got {stride})")]
    InvalidStride { stride: usize, len: usize },
    /// Nested construction was given no vertices, so no stride can be inferred.
    #[error("vertex list is empty")]
    EmptyVertexList,
    /// A nested vertex has a different component count than the first one.
    #[error("vertex {index} has {found} components, expected {expected}")]
    RaggedVertex {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// An index buffer entry references a vertex that does not exist.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        vertex_count: usize,
    },
    /// An index does not fit in the requested element width.
    #[error("index {index} does not fit in a {width}-bit index buffer")]
    IndexOverflow { index: usize, width: u32 },
    /// Exported indices of this width cannot be widened to the platform `usize`.
    #[error("{width}-bit indices do not fit the platform usize")]
    IndexWidthUnsupported { width: u32 },
    /// Grid generators need at least one cell per side.
    #[error("plane detail must be positive")]
    InvalidDetail,
    /// A structure failed its internal consistency check.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
