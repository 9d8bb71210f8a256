//! Sketchgen - p5.js sketch generation from geometry
//!
//! This crate provides:
//! - An indentation-aware line buffer for emitting script text
//! - Draw-state tracking that drops redundant `stroke`/`fill`/`strokeWeight` calls
//! - Translation of points, lines, normals and tangents into draw calls
//! - Assembly of complete sketches with setup, draw and helper functions
//!
//! # Example
//!
//! ```
//! use sketchgen::math::{DVec2, IVec2};
//! use sketchgen::{Color, FeatureFlags, Sketch, SketchConfig, Style};
//!
//! let config = SketchConfig::new(IVec2::new(800, 600), 40.0, 20.0)
//!     .with_enabled(FeatureFlags::GRID);
//! let mut sketch = Sketch::new(config)?;
//!
//! sketch.add_point_2d(DVec2::new(5.0, 10.0), None);
//! sketch.add_line_2d(
//!     DVec2::new(-3.0, -1.0),
//!     DVec2::new(10.0, 5.0),
//!     Some(&Style::stroke(Color::BLUE, 1.0)),
//! );
//!
//! sketch.print_all();
//! let script = sketch.print_buffer(true);
//! assert!(script.contains("line(-3.0, -1.0, 10.0, 5.0);"));
//! # Ok::<(), sketchgen::SketchError>(())
//! ```

// Text emission
mod buffer;
pub mod boilerplate;

// Styling
mod color;
mod draw_state;
mod style;

// Geometry
mod draw_list;
mod geometry;

// Assembly
mod config;
mod error;
mod hooks;
mod sketch;

pub use sketchgen_core::{literal, math};

// Re-exports
pub use buffer::*;

pub use color::*;
pub use draw_state::*;
pub use style::*;

pub use draw_list::*;
pub use geometry::*;

pub use config::*;
pub use error::*;
pub use hooks::*;
pub use sketch::*;
