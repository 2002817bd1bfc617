//! Configuration for welding passes and index-buffer export.

use serde::{Deserialize, Serialize};

/// Element width of an exported index buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexWidth {
    /// Narrowest width that holds every index (16-bit when possible).
    #[default]
    Auto,
    /// 16-bit indices; fails if any index exceeds `u16::MAX`.
    U16,
    /// 32-bit indices; fails if any index exceeds `u32::MAX`.
    U32,
}

/// Optional knobs shared by the deduplicator and geometry welding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeldOptions {
    /// Preferred element width when exporting index buffers.
    pub index_width: IndexWidth,
    /// Expected number of distinct keys; pre-sizes the registry.
    pub capacity_hint: Option<usize>,
}
