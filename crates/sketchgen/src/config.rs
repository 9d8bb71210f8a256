//! Sketch configuration.

use bitflags::bitflags;
use sketchgen_core::math::{DVec3, IVec2};

use crate::{SketchError, SketchResult, StyleDefaults};

bitflags! {
    /// Optional parts of the generated sketch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u8 {
        /// Draw a unit grid behind 2D sketches.
        const GRID     = 0b0000_0001;
        /// Draw the coordinate axes at the origin.
        const ORIGIN   = 0b0000_0010;
        /// Include the normal helper functions.
        const NORMALS  = 0b0000_0100;
        /// Include the tangent helper function.
        const TANGENTS = 0b0000_1000;
        /// Show the script's debug grid in 3D sketches.
        const DEBUG    = 0b0001_0000;
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Initial camera of a 3D sketch, in geometry coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLookAt {
    pub eye: DVec3,
    pub center: DVec3,
}

impl CameraLookAt {
    pub fn new(eye: DVec3, center: DVec3) -> Self {
        Self { eye, center }
    }
}

/// Configuration for a [`Sketch`](crate::Sketch).
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Canvas size in pixels
    pub size: IVec2,
    /// Divisor for stroke weights (`lineScale` in the script)
    pub line_scale: f64,
    /// Pixels per geometry unit (`renderScale` in the script)
    pub render_scale: f64,
    pub flags: FeatureFlags,
    /// Initial camera, only used by 3D sketches
    pub camera: Option<CameraLookAt>,
    /// Styles used when a request does not bring its own
    pub styles: StyleDefaults,
    /// Write a `// file:line` comment before each request's draw calls
    pub source_comments: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            size: IVec2::new(800, 600),
            line_scale: 40.0,
            render_scale: 20.0,
            flags: FeatureFlags::default(),
            camera: None,
            styles: StyleDefaults::default(),
            source_comments: true,
        }
    }
}

impl SketchConfig {
    /// Default configuration with the given canvas size and scales.
    pub fn new(size: IVec2, line_scale: f64, render_scale: f64) -> Self {
        Self {
            size,
            line_scale,
            render_scale,
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Turn on `flags` in addition to the current ones.
    pub fn with_enabled(mut self, flags: FeatureFlags) -> Self {
        self.flags.insert(flags);
        self
    }

    pub fn with_camera(mut self, camera: CameraLookAt) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_styles(mut self, styles: StyleDefaults) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_source_comments(mut self, enabled: bool) -> Self {
        self.source_comments = enabled;
        self
    }

    /// Check that the configuration produces a runnable script.
    pub fn validate(&self) -> SketchResult<()> {
        if self.size.x <= 0 || self.size.y <= 0 {
            return Err(SketchError::InvalidSize {
                width: self.size.x,
                height: self.size.y,
            });
        }
        for (name, value) in [
            ("line scale", self.line_scale),
            ("render scale", self.render_scale),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(SketchError::InvalidScale { name, value });
            }
        }
        Ok(())
    }
}
