//! 8-bit ARGB colors as the script understands them.

use sketchgen_core::literal::ScriptLiteral;

/// Alpha used by [`Color::translucent`].
pub const TRANSLUCENT_ALPHA: u8 = 100;

/// An 8-bit color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    /// Create a fully opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::argb(255, red, green, blue)
    }

    /// Create a color with an explicit alpha.
    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// The same color at alpha [`TRANSLUCENT_ALPHA`].
    pub const fn translucent(self) -> Self {
        Self {
            alpha: TRANSLUCENT_ALPHA,
            ..self
        }
    }

    /// The same color at full alpha.
    pub const fn opaque(self) -> Self {
        Self { alpha: 255, ..self }
    }

    pub const fn is_opaque(&self) -> bool {
        self.alpha == 255
    }

    /// Whether all three channels are equal.
    pub const fn is_gray(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

/// Arguments for `stroke(...)` / `fill(...)`.
///
/// Gray colors collapse to a single channel argument and the alpha is only written
/// when the color is not opaque.
impl ScriptLiteral for Color {
    fn literal(&self) -> String {
        let mut args = if self.is_gray() {
            self.red.to_string()
        } else {
            format!("{}, {}, {}", self.red, self.green, self.blue)
        };
        if !self.is_opaque() {
            args.push_str(&format!(", {}", self.alpha));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views() {
        let color = Color::argb(30, 1, 2, 3);
        assert_eq!(color.translucent(), Color::argb(100, 1, 2, 3));
        assert_eq!(color.opaque(), Color::rgb(1, 2, 3));
        assert!(!color.is_opaque());
    }

    #[test]
    fn test_literal_gray_collapse() {
        assert_eq!(Color::BLACK.literal(), "0");
        assert_eq!(Color::rgb(200, 200, 200).literal(), "200");
        assert_eq!(Color::rgb(200, 200, 201).literal(), "200, 200, 201");
    }

    #[test]
    fn test_literal_alpha() {
        assert_eq!(Color::RED.literal(), "255, 0, 0");
        assert_eq!(Color::RED.translucent().literal(), "255, 0, 0, 100");
        assert_eq!(Color::GRAY.translucent().literal(), "128, 100");
    }
}
