//! Redundant draw-state elision.
//!
//! [`DrawState`] remembers the last stroke, fill and stroke weight command that was
//! emitted and suppresses an identical command of the same kind. Comparison is on the
//! formatted text: `strokeWeight(2 / lineScale)` and `strokeWeight(2.0 / lineScale)`
//! are different commands.

use sketchgen_core::literal::ScriptLiteral;

use crate::{Color, Style};

const NO_STROKE: &str = "noStroke();";
const NO_FILL: &str = "noFill();";

/// Last emitted draw-state commands.
///
/// `None` means nothing of that kind was emitted yet, so the first command of each kind
/// is never elided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawState {
    stroke: Option<String>,
    fill: Option<String>,
    stroke_weight: Option<String>,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The command setting the stroke to `color`, or `None` if it is already set.
    pub fn stroke_color(&mut self, color: Option<Color>) -> Option<String> {
        let command = match color {
            Some(color) => format!("stroke({});", color.literal()),
            None => NO_STROKE.to_owned(),
        };
        Self::update(&mut self.stroke, command)
    }

    /// The command setting the fill to `color`, or `None` if it is already set.
    pub fn fill_color(&mut self, color: Option<Color>) -> Option<String> {
        let command = match color {
            Some(color) => format!("fill({});", color.literal()),
            None => NO_FILL.to_owned(),
        };
        Self::update(&mut self.fill, command)
    }

    /// The command setting the stroke weight to `value / lineScale`, where `value` is
    /// script text, or `None` if that exact text is already set.
    pub fn stroke_weight(&mut self, value: &str) -> Option<String> {
        Self::update(
            &mut self.stroke_weight,
            format!("strokeWeight({value} / lineScale);"),
        )
    }

    /// `noStroke();` unless the stroke is already off.
    pub fn explicit_no_stroke(&mut self) -> Option<String> {
        Self::update(&mut self.stroke, NO_STROKE.to_owned())
    }

    /// `noFill();` unless the fill is already off.
    pub fn explicit_no_fill(&mut self) -> Option<String> {
        Self::update(&mut self.fill, NO_FILL.to_owned())
    }

    /// Commands establishing `style`, in stroke, fill, weight order.
    pub fn apply(&mut self, style: &Style) -> Vec<String> {
        [
            self.stroke_color(style.stroke_color),
            self.fill_color(style.fill_color),
            self.stroke_weight(&style.stroke_weight.literal()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn update(last: &mut Option<String>, command: String) -> Option<String> {
        if last.as_deref() == Some(command.as_str()) {
            tracing::trace!(%command, "Eliding redundant draw-state command");
            return None;
        }
        *last = Some(command.clone());
        Some(command)
    }
}
