//! Script literal formatting.
//!
//! Every number written into a sketch goes through [`ScriptLiteral`], so the same value
//! always produces the same text. Scalars use the shortest representation that parses
//! back to the same `f64` and always carry a fractional part (`5.0`, not `5`).

use crate::math::{DMat3, DVec2, DVec3, IVec2, coefficient};

/// A value that can be written as a literal (or a comma separated list of literals) in
/// the generated script.
pub trait ScriptLiteral {
    /// The literal text for this value.
    fn literal(&self) -> String;
}

impl ScriptLiteral for f64 {
    fn literal(&self) -> String {
        // `Debug` is the shortest round-trip form and keeps the `.0` on integral values.
        format!("{self:?}")
    }
}

impl ScriptLiteral for DVec2 {
    fn literal(&self) -> String {
        format!("{}, {}", self.x.literal(), self.y.literal())
    }
}

impl ScriptLiteral for IVec2 {
    fn literal(&self) -> String {
        format!("{}, {}", self.x, self.y)
    }
}

impl ScriptLiteral for DVec3 {
    fn literal(&self) -> String {
        format!(
            "{}, {}, {}",
            self.x.literal(),
            self.y.literal(),
            self.z.literal()
        )
    }
}

/// Literal for a position handed to the script's camera.
///
/// Geometry is Z-up; the script's 3D space is Y-down with Z toward the viewer, so the
/// components are written as `x, -z, -y`. Zero stays `0.0` rather than `-0.0`.
pub fn camera_literal(v: DVec3) -> String {
    let flip = |c: f64| if c == 0.0 { 0.0 } else { -c };
    format!("{}, {}, {}", v.x.literal(), flip(v.z).literal(), flip(v.y).literal())
}

/// Literal arguments for a 2D `applyMatrix(a, b, c, d, e, f)` call.
///
/// Only the affine part of `matrix` is written; the bottom row is assumed to be
/// `0, 0, 1`.
pub fn affine_literal(matrix: &DMat3) -> String {
    [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        .into_iter()
        .map(|(row, column)| coefficient(matrix, row, column).literal())
        .collect::<Vec<_>>()
        .join(", ")
}
