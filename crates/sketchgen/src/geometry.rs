//! Geometry requests a sketch can draw.

use std::panic::Location;
use std::path::Path;

use sketchgen_core::math::{DVec2, DVec3};

/// A single piece of geometry to draw.
///
/// Lines, normals and tangents always have both ends in the same dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// A point in the plane, drawn as a small circle.
    Point2(DVec2),
    /// A point in space, drawn as a small sphere.
    Point3(DVec3),
    /// A segment in the plane.
    Line2(DVec2, DVec2),
    /// A segment in space.
    Line3(DVec3, DVec3),
    /// A unit normal drawn from `origin` along `direction`.
    Normal2 { origin: DVec2, direction: DVec2 },
    /// A unit normal in space drawn from `origin` along `direction`.
    Normal3 { origin: DVec3, direction: DVec3 },
    /// A tangent line through `origin` along `direction`.
    Tangent2 { origin: DVec2, direction: DVec2 },
}

/// What a [`Geometry`] is, for picking its default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    Normal,
    Tangent,
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point2(_) | Self::Point3(_) => GeometryKind::Point,
            Self::Line2(..) | Self::Line3(..) => GeometryKind::Line,
            Self::Normal2 { .. } | Self::Normal3 { .. } => GeometryKind::Normal,
            Self::Tangent2 { .. } => GeometryKind::Tangent,
        }
    }

    /// Whether drawing this needs a 3D canvas.
    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            Self::Point3(_) | Self::Line3(..) | Self::Normal3 { .. }
        )
    }
}

/// Where in the caller's source a geometry request came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The location of the caller of the `#[track_caller]` function this is used in.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// File name without its directories.
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// The `// file:line` comment written before the geometry's commands.
    pub fn comment(&self) -> String {
        format!("// {}:{}", self.file_name(), self.line)
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}
