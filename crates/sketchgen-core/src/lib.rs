//! Sketchgen Core
//!
//! Shared building blocks for the sketchgen crates: the math types geometry is
//! expressed in, their script literal forms, and logging setup.

pub mod literal;
pub mod logging;
pub mod math;
