/// Double precision math types used to describe sketch geometry.
///
/// This module re-exports the [`glam`] types sketchgen works with. Geometry is kept in
/// `f64` so that literals written into a sketch round-trip exactly; canvas sizes are
/// integral pixels.
///
/// # Common Types
///
/// - [`DVec2`]: 2D point or direction (x, y)
/// - [`DVec3`]: 3D point or direction (x, y, z)
/// - [`IVec2`]: integer pixel size (width, height)
/// - [`DMat3`]: 3x3 matrix, used for 2D affine transforms
///
/// Arithmetic (`+`, `-`, `*`, [`DVec3::cross`], [`DVec3::dot`], [`DMat3::determinant`],
/// [`DMat3::inverse`]) comes from `glam` directly.
///
/// # Examples
///
/// ```
/// use sketchgen_core::math::{DMat3, DVec2};
///
/// let offset = DVec2::new(3.0, -1.0);
/// let transform = DMat3::from_translation(offset);
/// assert_eq!(transform.transform_point2(DVec2::ZERO), offset);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub use glam::{DMat3, DVec2, DVec3, IVec2};

/// Read the coefficient of `matrix` at `row`, `column`.
///
/// `glam` stores matrices column-major; this indexes the way the matrix is written on
/// paper.
///
/// # Panics
///
/// Panics if `row` or `column` is outside `0..=2`.
///
/// ```
/// use sketchgen_core::math::{DMat3, DVec2, coefficient};
///
/// let m = DMat3::from_translation(DVec2::new(7.0, 9.0));
/// assert_eq!(coefficient(&m, 0, 2), 7.0);
/// assert_eq!(coefficient(&m, 1, 2), 9.0);
/// ```
#[inline]
pub fn coefficient(matrix: &DMat3, row: usize, column: usize) -> f64 {
    assert!(
        row < 3 && column < 3,
        "matrix coefficient ({row}, {column}) is out of range"
    );
    matrix.row(row)[column]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_is_row_major() {
        let m = DMat3::from_cols(
            DVec3::new(1.0, 4.0, 7.0),
            DVec3::new(2.0, 5.0, 8.0),
            DVec3::new(3.0, 6.0, 9.0),
        );
        assert_eq!(coefficient(&m, 0, 0), 1.0);
        assert_eq!(coefficient(&m, 0, 1), 2.0);
        assert_eq!(coefficient(&m, 1, 0), 4.0);
        assert_eq!(coefficient(&m, 2, 2), 9.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_coefficient_out_of_range() {
        coefficient(&DMat3::IDENTITY, 3, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_coefficient_column_out_of_range() {
        coefficient(&DMat3::IDENTITY, 0, 3);
    }
}
