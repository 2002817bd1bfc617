//! Structured grid generators producing indexed triangle geometry.

use crate::mesh_error::MeshWeldError;
use crate::weld::indexed::{IndexedGeometry, WeldScalar};
use num_traits::{Float, NumCast};

/// Components per generated vertex (`x, y, z`).
pub const PLANE_STRIDE: usize = 3;

fn coord<T: Float>(step: usize, detail: T) -> Result<T, MeshWeldError> {
    let step = <T as NumCast>::from(step).ok_or(MeshWeldError::InvalidDetail)?;
    let two = T::one() + T::one();
    Ok(two * (step / detail) - T::one())
}

/// Generate a `detail`×`detail` grid on `[-1, 1]²` in the `z = 0` plane.
///
/// Vertices are laid out row-major with `y` as the outer loop, giving
/// `(detail + 1)²` vertices. Each grid cell contributes two triangles,
/// `(i, i+1, i+cols)` and `(i+cols, i+1, i+cols+1)`, where `cols = detail + 1`.
///
/// # Errors
/// [`MeshWeldError::InvalidDetail`] if `detail == 0` or is not representable
/// in `T`.
///
/// # Example
/// ```rust
/// # fn try_main() -> Result<(), mesh_weld::mesh_error::MeshWeldError> {
/// let g = mesh_weld::mesh_generation::plane::<f32>(1)?;
/// assert_eq!(g.vertex_count(), 4);
/// assert_eq!(g.indices(), &[0, 1, 2, 2, 1, 3]);
/// # Ok(())
/// # }
/// # try_main().unwrap();
/// ```
pub fn plane<T>(detail: usize) -> Result<IndexedGeometry<T>, MeshWeldError>
where
    T: Float + WeldScalar,
{
    if detail == 0 {
        return Err(MeshWeldError::InvalidDetail);
    }
    let scale = <T as NumCast>::from(detail).ok_or(MeshWeldError::InvalidDetail)?;

    let cols = detail + 1;
    let mut flat = Vec::with_capacity(cols * cols * PLANE_STRIDE);
    for y in 0..=detail {
        let pos_y = coord(y, scale)?;
        for x in 0..=detail {
            flat.extend_from_slice(&[coord(x, scale)?, pos_y, T::zero()]);
        }
    }

    let mut indices = Vec::with_capacity(detail * detail * 6);
    for y in 0..detail {
        for x in 0..detail {
            let i = x + y * cols;
            indices.extend_from_slice(&[i, i + 1, i + cols]);
            indices.extend_from_slice(&[i + cols, i + 1, i + cols + 1]);
        }
    }

    let mut geometry = IndexedGeometry::from_flat(&flat, PLANE_STRIDE)?;
    geometry.set_indices(indices)?;
    log::debug!(
        "plane: detail {detail}, {} vertices, {} triangles",
        geometry.vertex_count(),
        geometry.indices().len() / 3
    );
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weld::options::IndexWidth;

    #[test]
    fn zero_detail_is_rejected() {
        assert_eq!(plane::<f32>(0), Err(MeshWeldError::InvalidDetail));
    }

    #[test]
    fn unit_plane_corners() {
        let g = plane::<f64>(1).unwrap();
        assert_eq!(g.stride(), 3);
        assert_eq!(
            g.vertices(),
            &[
                -1.0, -1.0, 0.0, //
                1.0, -1.0, 0.0, //
                -1.0, 1.0, 0.0, //
                1.0, 1.0, 0.0,
            ]
        );
        assert_eq!(g.indices(), &[0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn counts_scale_with_detail() {
        let g = plane::<f32>(4).unwrap();
        assert_eq!(g.vertex_count(), 25);
        assert_eq!(g.indices().len(), 4 * 4 * 6);
        assert_eq!(g.vertex(12), Some(&[0.0f32, 0.0, 0.0][..]));
        assert!(g.indices().iter().all(|&i| i < 25));
        assert_eq!(g.index_buffer(IndexWidth::Auto).unwrap().width(), 16);
    }

    #[test]
    fn second_row_triangles() {
        let g = plane::<f32>(2).unwrap();
        // cell (x=0, y=1): i = 3, cols = 3
        assert_eq!(&g.indices()[12..18], &[3, 4, 6, 6, 4, 7]);
    }
}
