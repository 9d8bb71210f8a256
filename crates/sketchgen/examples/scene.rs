//! Writes a sketch of a regular polygon with its edge normals to stdout.
//!
//! ```sh
//! cargo run -p sketchgen --example scene > scene.js
//! ```

use sketchgen::math::{DVec2, IVec2};
use sketchgen::{Color, FeatureFlags, Sketch, SketchConfig, presets};

const SIDES: usize = 6;
const RADIUS: f64 = 8.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sketchgen_core::logging::init();

    let config = SketchConfig::new(IVec2::new(800, 800), 40.0, 20.0)
        .with_enabled(FeatureFlags::GRID | FeatureFlags::TANGENTS);
    let mut sketch = Sketch::new(config)?;

    let corners: Vec<DVec2> = (0..SIDES)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / SIDES as f64;
            DVec2::from_angle(angle) * RADIUS
        })
        .collect();

    let vertex_style = presets::filled(Color::WHITE);
    for (i, &start) in corners.iter().enumerate() {
        let end = corners[(i + 1) % SIDES];
        sketch.add_line_2d(start, end, None);

        let edge = end - start;
        let midpoint = (start + end) / 2.0;
        sketch.add_normal_2d(midpoint, edge.perp() * -1.0, None);
        sketch.add_tangent_2d(midpoint, edge, None);
        sketch.add_point_2d(start, Some(&vertex_style));
    }

    tracing::info!(corners = SIDES, "Generated polygon sketch");

    sketch.print_all();
    sketch.write_buffer(&mut std::io::stdout().lock(), true)?;
    Ok(())
}
