//! Translation of geometry requests into draw-call lines.

use sketchgen_core::literal::{ScriptLiteral, affine_literal};
use sketchgen_core::math::DMat3;

use crate::{DrawState, Geometry, SourceLocation, Style};

/// Screen-space radius of drawn points, divided by `renderScale` in the script.
pub const POINT_RADIUS: f64 = 4.0;

/// The draw calls of one sketch, in the order they were requested.
///
/// Every request is written as an optional source comment, the draw-state commands
/// its style needs, and a single geometry command.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    lines: Vec<String>,
    state: DrawState,
    /// Draw state at each open `push();`, restored by the matching `pop();`.
    saved_states: Vec<DrawState>,
    contains_3d: bool,
    uses_normals: bool,
    uses_tangents: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The formatted lines, ready to be printed into the draw block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any geometry needs a 3D canvas.
    pub fn contains_3d(&self) -> bool {
        self.contains_3d
    }

    pub fn uses_normals(&self) -> bool {
        self.uses_normals
    }

    pub fn uses_tangents(&self) -> bool {
        self.uses_tangents
    }

    /// Append the lines drawing `geometry`.
    pub fn push(
        &mut self,
        geometry: Geometry,
        style: Option<&Style>,
        location: Option<&SourceLocation>,
    ) {
        tracing::trace!(?geometry, ?location, "Adding geometry");

        if let Some(location) = location {
            self.lines.push(location.comment());
        }
        if let Some(style) = style {
            let commands = self.state.apply(style);
            self.lines.extend(commands);
        }

        let radius = format!("{} / renderScale", POINT_RADIUS.literal());
        match geometry {
            Geometry::Point2(p) => {
                self.lines.push(format!("circle({}, {radius});", p.literal()));
            }
            Geometry::Point3(p) => {
                self.lines
                    .push(format!("drawSphere({}, {radius});", p.literal()));
            }
            Geometry::Line2(a, b) => {
                self.lines
                    .push(format!("line({}, {});", a.literal(), b.literal()));
                self.lines.push(String::new());
            }
            Geometry::Line3(a, b) => {
                self.lines
                    .push(format!("line({}, {});", a.literal(), b.literal()));
                self.lines.push(String::new());
            }
            Geometry::Normal2 { origin, direction } => {
                self.lines.push(format!(
                    "drawNormal({}, {});",
                    origin.literal(),
                    direction.literal()
                ));
                self.uses_normals = true;
            }
            Geometry::Normal3 { origin, direction } => {
                self.lines.push(format!(
                    "drawNormal3D({}, {});",
                    origin.literal(),
                    direction.literal()
                ));
                self.uses_normals = true;
            }
            Geometry::Tangent2 { origin, direction } => {
                self.lines.push(format!(
                    "drawTangent({}, {});",
                    origin.literal(),
                    direction.literal()
                ));
                self.uses_tangents = true;
            }
        }

        if geometry.is_spatial() {
            self.contains_3d = true;
        }
    }

    /// Append a line verbatim, bypassing draw-state tracking.
    pub fn raw(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Turn the stroke off unless it already is.
    pub fn no_stroke(&mut self) {
        if let Some(command) = self.state.explicit_no_stroke() {
            self.lines.push(command);
        }
    }

    /// Turn the fill off unless it already is.
    pub fn no_fill(&mut self) {
        if let Some(command) = self.state.explicit_no_fill() {
            self.lines.push(command);
        }
    }

    /// Open a `push();` scope and apply the affine part of `transform`.
    pub fn push_transform_2d(&mut self, transform: &DMat3) {
        self.lines.push("push();".to_owned());
        self.lines
            .push(format!("applyMatrix({});", affine_literal(transform)));
        self.saved_states.push(self.state.clone());
    }

    /// Close the innermost `push();` scope.
    ///
    /// The script restores stroke, fill and weight on `pop();`, so the tracked state
    /// goes back to what it was when the scope was opened.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open.
    pub fn pop_transform(&mut self) {
        let Some(state) = self.saved_states.pop() else {
            panic!("pop_transform without a matching push_transform_2d");
        };
        self.state = state;
        self.lines.push("pop();".to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use sketchgen_core::math::{DVec2, DVec3};

    fn black() -> Style {
        Style::stroke(Color::BLACK, 2.0)
    }

    #[test]
    fn test_point_with_style_and_location() {
        let mut list = DrawList::new();
        list.push(
            Geometry::Point2(DVec2::new(5.0, 10.0)),
            Some(&black()),
            Some(&SourceLocation::new("main.rs", 12)),
        );
        assert_eq!(
            list.lines(),
            [
                "// main.rs:12",
                "stroke(0);",
                "noFill();",
                "strokeWeight(2.0 / lineScale);",
                "circle(5.0, 10.0, 4.0 / renderScale);",
            ]
        );
        assert!(!list.contains_3d());
    }

    #[test]
    fn test_line_elides_repeated_style() {
        let mut list = DrawList::new();
        list.push(Geometry::Point2(DVec2::ZERO), Some(&black()), None);
        let before = list.len();
        list.push(
            Geometry::Line2(DVec2::new(-3.0, -1.0), DVec2::new(10.0, 5.0)),
            Some(&black()),
            None,
        );
        assert_eq!(
            &list.lines()[before..],
            ["line(-3.0, -1.0, 10.0, 5.0);", ""]
        );
    }

    #[test]
    fn test_without_style_emits_only_geometry() {
        let mut list = DrawList::new();
        list.push(Geometry::Point2(DVec2::ONE), None, None);
        assert_eq!(list.lines(), ["circle(1.0, 1.0, 4.0 / renderScale);"]);
    }

    #[test]
    fn test_spatial_geometry_sets_flag() {
        let mut list = DrawList::new();
        list.push(Geometry::Point3(DVec3::new(1.0, 2.0, 3.0)), None, None);
        assert!(list.contains_3d());
        assert_eq!(
            list.lines(),
            ["drawSphere(1.0, 2.0, 3.0, 4.0 / renderScale);"]
        );

        let mut list = DrawList::new();
        list.push(Geometry::Line3(DVec3::ZERO, DVec3::X), None, None);
        assert!(list.contains_3d());
        assert_eq!(list.lines()[0], "line(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);");
    }

    #[test]
    fn test_normals_and_tangents() {
        let mut list = DrawList::new();
        list.push(
            Geometry::Normal2 {
                origin: DVec2::new(1.0, 1.0),
                direction: DVec2::Y,
            },
            None,
            None,
        );
        assert!(list.uses_normals());
        assert!(!list.uses_tangents());
        list.push(
            Geometry::Tangent2 {
                origin: DVec2::new(1.0, 1.0),
                direction: DVec2::X,
            },
            None,
            None,
        );
        assert!(list.uses_tangents());
        assert_eq!(
            list.lines(),
            [
                "drawNormal(1.0, 1.0, 0.0, 1.0);",
                "drawTangent(1.0, 1.0, 1.0, 0.0);"
            ]
        );
    }

    #[test]
    fn test_explicit_none_commands() {
        let mut list = DrawList::new();
        list.push(Geometry::Point2(DVec2::ZERO), Some(&black()), None);
        list.no_stroke();
        list.no_fill();
        assert_eq!(list.lines().last().map(String::as_str), Some("noStroke();"));
    }

    #[test]
    fn test_raw_lines_bypass_state() {
        let mut list = DrawList::new();
        list.raw("stroke(0);");
        list.push(Geometry::Point2(DVec2::ZERO), Some(&black()), None);
        assert_eq!(list.lines()[..2], ["stroke(0);", "stroke(0);"]);
    }

    #[test]
    fn test_transform_scope_restores_state() {
        let mut list = DrawList::new();
        list.push(Geometry::Point2(DVec2::ZERO), Some(&black()), None);
        list.push_transform_2d(&DMat3::from_translation(DVec2::new(2.0, 0.0)));
        list.push(
            Geometry::Point2(DVec2::ZERO),
            Some(&Style::stroke(Color::RED, 2.0)),
            None,
        );
        list.pop_transform();
        let before = list.len();
        list.push(Geometry::Point2(DVec2::ZERO), Some(&black()), None);
        assert_eq!(
            &list.lines()[before - 1..],
            ["pop();", "circle(0.0, 0.0, 4.0 / renderScale);"]
        );
        assert!(list.lines().contains(&"applyMatrix(1.0, 0.0, 0.0, 1.0, 2.0, 0.0);".to_owned()));
    }

    #[test]
    #[should_panic(expected = "without a matching")]
    fn test_unbalanced_pop_panics() {
        DrawList::new().pop_transform();
    }
}
