//! Stroke and fill styling for emitted geometry.
//!
//! A style fully describes the draw state a geometry command is drawn with.

use crate::{Color, GeometryKind};

/// Stroke weight used by every default style.
pub const DEFAULT_STROKE_WEIGHT: f64 = 2.0;

/// Draw state applied before a geometry command.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Stroke color, `None` for no stroke
    pub stroke_color: Option<Color>,
    /// Fill color, `None` for no fill
    pub fill_color: Option<Color>,
    /// Stroke weight before division by `lineScale`
    pub stroke_weight: f64,
}

impl Style {
    /// Create a style that draws nothing.
    pub fn new() -> Self {
        Self {
            stroke_color: None,
            fill_color: None,
            stroke_weight: DEFAULT_STROKE_WEIGHT,
        }
    }

    /// Create a stroke-only style.
    pub fn stroke(color: Color, weight: f64) -> Self {
        Self {
            stroke_color: Some(color),
            fill_color: None,
            stroke_weight: weight,
        }
    }

    /// Create a fill-only style.
    pub fn fill(color: Color) -> Self {
        Self {
            stroke_color: None,
            fill_color: Some(color),
            stroke_weight: DEFAULT_STROKE_WEIGHT,
        }
    }

    /// Set the stroke color.
    pub fn with_stroke_color(mut self, color: Option<Color>) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the fill color.
    pub fn with_fill_color(mut self, color: Option<Color>) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the stroke weight.
    pub fn with_stroke_weight(mut self, weight: f64) -> Self {
        self.stroke_weight = weight;
        self
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke_color.is_some()
    }

    pub fn has_fill(&self) -> bool {
        self.fill_color.is_some()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

/// The style each kind of geometry is drawn with when no style is given.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefaults {
    pub point: Style,
    pub line: Style,
    pub normal: Style,
    pub tangent: Style,
}

impl StyleDefaults {
    /// The default style for `kind`.
    pub fn for_kind(&self, kind: GeometryKind) -> &Style {
        match kind {
            GeometryKind::Point => &self.point,
            GeometryKind::Line => &self.line,
            GeometryKind::Normal => &self.normal,
            GeometryKind::Tangent => &self.tangent,
        }
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            point: presets::black_stroke(),
            line: presets::black_stroke(),
            normal: Style::stroke(Color::RED.translucent(), DEFAULT_STROKE_WEIGHT),
            tangent: Style::stroke(Color::PURPLE.translucent(), DEFAULT_STROKE_WEIGHT),
        }
    }
}

/// Shorthand for creating common styles.
pub mod presets {
    use super::*;

    /// Black stroke, no fill.
    pub fn black_stroke() -> Style {
        Style::stroke(Color::BLACK, DEFAULT_STROKE_WEIGHT)
    }

    /// Black stroke with a solid fill.
    pub fn filled(color: Color) -> Style {
        black_stroke().with_fill_color(Some(color))
    }

    /// Red, thicker stroke for highlighting.
    pub fn highlight() -> Style {
        Style::stroke(Color::RED, 4.0)
    }
}
