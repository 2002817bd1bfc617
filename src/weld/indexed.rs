//! IndexedGeometry: vertex welding over flat, strided component arrays.
//!
//! Input vertex data arrives as a flat array of scalar components where every
//! `stride` consecutive components form one vertex. Identical vertices are
//! merged into a single entry of the vertex buffer, and the index buffer
//! records, per input vertex, which unique vertex it became. The resulting
//! buffers feed an element-array draw directly.
//!
//! Vertex identity is component-wise. For floating-point data the comparison
//! is on a canonical bit pattern: `-0.0` and `0.0` weld together, and all NaN
//! payloads weld together.

use crate::debug_invariants::{DebugInvariants, violation};
use crate::mesh_error::MeshWeldError;
use crate::weld::options::{IndexWidth, WeldOptions};
use crate::weld::registry::UniqueRegistry;

/// Scalar component types that can be welded.
///
/// `Key` must be hashable and equal exactly when two components are
/// considered the same vertex coordinate.
pub trait WeldScalar: Copy {
    type Key: std::hash::Hash + Eq + Copy;
    fn weld_key(self) -> Self::Key;
}

macro_rules! impl_weld_scalar_int {
    ($($t:ty),*) => {$(
        impl WeldScalar for $t {
            type Key = $t;
            #[inline]
            fn weld_key(self) -> $t {
                self
            }
        }
    )*};
}

impl_weld_scalar_int!(i32, i64, u16, u32);

impl WeldScalar for f32 {
    type Key = u32;
    #[inline]
    fn weld_key(self) -> u32 {
        if self.is_nan() {
            f32::NAN.to_bits()
        } else if self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }
}

impl WeldScalar for f64 {
    type Key = u64;
    #[inline]
    fn weld_key(self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else if self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }
}

/// Index data ready for upload, in one of two element widths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexBuffer {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl IndexBuffer {
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(v) => v.len(),
            IndexBuffer::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element width in bits.
    pub fn width(&self) -> u32 {
        match self {
            IndexBuffer::U16(_) => 16,
            IndexBuffer::U32(_) => 32,
        }
    }

    /// Native-endian bytes of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IndexBuffer::U16(v) => bytemuck::cast_slice(v),
            IndexBuffer::U32(v) => bytemuck::cast_slice(v),
        }
    }

    /// Indices widened to `usize`.
    ///
    /// # Errors
    /// [`MeshWeldError::IndexWidthUnsupported`] when an element does not fit
    /// the platform `usize` (32-bit indices on a 16-bit target).
    pub fn to_usize(&self) -> Result<Vec<usize>, MeshWeldError> {
        match self {
            IndexBuffer::U16(v) => Ok(v.iter().map(|&i| usize::from(i)).collect()),
            IndexBuffer::U32(v) => v
                .iter()
                .map(|&i| {
                    usize::try_from(i)
                        .map_err(|_| MeshWeldError::IndexWidthUnsupported { width: 32 })
                })
                .collect(),
        }
    }
}

/// Welded vertex buffer plus index buffer.
///
/// # Invariants
/// - `vertices.len()` is a multiple of `stride` and `stride > 0`.
/// - Every index is `< vertex_count()`.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedGeometry<T> {
    vertices: Vec<T>,
    indices: Vec<usize>,
    stride: usize,
}

impl<T: WeldScalar> IndexedGeometry<T> {
    /// Welds a flat component array, `stride` components per vertex.
    ///
    /// # Errors
    /// [`MeshWeldError::InvalidStride`] if `stride == 0` or `flat.len()` is not
    /// a multiple of `stride`.
    ///
    /// # Example
    /// ```rust
    /// # fn try_main() -> Result<(), mesh_weld::mesh_error::MeshWeldError> {
    /// use mesh_weld::weld::indexed::IndexedGeometry;
    /// let g = IndexedGeometry::from_flat(&[0, 0, 1, 0, 0, 0], 2)?;
    /// assert_eq!(g.vertices(), &[0, 0, 1, 0]);
    /// assert_eq!(g.indices(), &[0, 1, 0]);
    /// # Ok(())
    /// # }
    /// # try_main().unwrap();
    /// ```
    pub fn from_flat(flat: &[T], stride: usize) -> Result<Self, MeshWeldError> {
        Self::from_flat_with(flat, stride, &WeldOptions::default())
    }

    /// [`from_flat`](Self::from_flat) with explicit options.
    ///
    /// `options.capacity_hint` is the expected number of distinct vertices and
    /// pre-sizes the registry and the vertex buffer.
    pub fn from_flat_with(
        flat: &[T],
        stride: usize,
        options: &WeldOptions,
    ) -> Result<Self, MeshWeldError> {
        if stride == 0 || flat.len() % stride != 0 {
            return Err(MeshWeldError::InvalidStride {
                stride,
                len: flat.len(),
            });
        }

        let input_count = flat.len() / stride;
        let unique_hint = options.capacity_hint.unwrap_or(0).min(input_count);
        let mut registry = UniqueRegistry::<Vec<T::Key>>::with_capacity(unique_hint);
        let mut vertices = Vec::with_capacity(unique_hint * stride);
        let mut indices = Vec::with_capacity(input_count);
        for vert in flat.chunks_exact(stride) {
            let key: Vec<T::Key> = vert.iter().map(|c| c.weld_key()).collect();
            let (idx, fresh) = registry.intern(&key);
            if fresh {
                vertices.extend_from_slice(vert);
            }
            indices.push(idx);
        }

        log::debug!(
            "welded {input_count} vertices (stride {stride}) into {}",
            registry.len()
        );
        let geometry = Self {
            vertices,
            indices,
            stride,
        };
        geometry.debug_assert_invariants();
        Ok(geometry)
    }

    /// Welds a list of equal-length vertices.
    ///
    /// # Errors
    /// [`MeshWeldError::EmptyVertexList`] when `vertices` is empty;
    /// [`MeshWeldError::RaggedVertex`] when any vertex length differs from the
    /// first one.
    pub fn from_nested<V: AsRef<[T]>>(vertices: &[V]) -> Result<Self, MeshWeldError> {
        let stride = vertices
            .first()
            .map(|v| v.as_ref().len())
            .ok_or(MeshWeldError::EmptyVertexList)?;
        let mut flat = Vec::with_capacity(stride * vertices.len());
        for (index, vert) in vertices.iter().enumerate() {
            let vert = vert.as_ref();
            if vert.len() != stride {
                return Err(MeshWeldError::RaggedVertex {
                    index,
                    expected: stride,
                    found: vert.len(),
                });
            }
            flat.extend_from_slice(vert);
        }
        Self::from_flat(&flat, stride)
    }
}

impl<T> IndexedGeometry<T> {
    /// Components per vertex.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Flat unique vertex data.
    #[inline]
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.stride
    }

    /// Components of unique vertex `i`.
    pub fn vertex(&self, i: usize) -> Option<&[T]> {
        let start = i.checked_mul(self.stride)?;
        let end = start.checked_add(self.stride)?;
        self.vertices.get(start..end)
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Replaces the index buffer, e.g. with direct triangle indexing.
    ///
    /// # Errors
    /// [`MeshWeldError::IndexOutOfRange`] for the first index that does not
    /// name an existing vertex; the geometry is left unchanged.
    pub fn set_indices(&mut self, indices: Vec<usize>) -> Result<(), MeshWeldError> {
        let vertex_count = self.vertex_count();
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i >= vertex_count)
        {
            return Err(MeshWeldError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }
        self.indices = indices;
        Ok(())
    }

    /// Exports the index buffer at the requested width.
    ///
    /// # Errors
    /// [`MeshWeldError::IndexOverflow`] if an index does not fit the fixed
    /// width (or does not fit 32 bits under [`IndexWidth::Auto`]).
    pub fn index_buffer(&self, width: IndexWidth) -> Result<IndexBuffer, MeshWeldError> {
        let max = self.indices.iter().copied().max().unwrap_or(0);
        let width = match width {
            IndexWidth::Auto if max <= usize::from(u16::MAX) => IndexWidth::U16,
            IndexWidth::Auto => IndexWidth::U32,
            fixed => fixed,
        };
        log::debug!(
            "exporting {} indices as {:?} (max index {max})",
            self.indices.len(),
            width
        );
        match width {
            IndexWidth::U16 => narrow(&self.indices, 16).map(IndexBuffer::U16),
            _ => narrow(&self.indices, 32).map(IndexBuffer::U32),
        }
    }

    /// Exports the index buffer at `options.index_width`.
    pub fn index_buffer_with(&self, options: &WeldOptions) -> Result<IndexBuffer, MeshWeldError> {
        self.index_buffer(options.index_width)
    }
}

fn narrow<U: TryFrom<usize>>(indices: &[usize], width: u32) -> Result<Vec<U>, MeshWeldError> {
    indices
        .iter()
        .map(|&index| {
            U::try_from(index).map_err(|_| MeshWeldError::IndexOverflow { index, width })
        })
        .collect()
}

impl<T> DebugInvariants for IndexedGeometry<T> {
    fn validate_invariants(&self) -> Result<(), MeshWeldError> {
        if self.stride == 0 || self.vertices.len() % self.stride != 0 {
            return Err(violation(format!(
                "{} components do not split into stride {}",
                self.vertices.len(),
                self.stride
            )));
        }
        let count = self.vertex_count();
        if let Some(pos) = self.indices.iter().position(|&i| i >= count) {
            return Err(violation(format!(
                "index at position {pos} exceeds vertex count {count}"
            )));
        }
        Ok(())
    }
}
