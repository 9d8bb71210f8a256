//! Hook placement tests.

use sketchgen::math::DVec2;
use sketchgen::{FeatureFlags, LineBuffer, Sketch, SketchConfig, SketchHooks};

struct Marked;

impl SketchHooks for Marked {
    fn pre_file(&mut self, buffer: &mut LineBuffer) {
        buffer.print_line("// pre-file");
    }

    fn header(&mut self, buffer: &mut LineBuffer) {
        buffer.print_line("let frames = 0;");
    }

    fn post_setup(&mut self, buffer: &mut LineBuffer) {
        buffer.print_line("frameRate(30);");
    }

    fn post_draw(&mut self, buffer: &mut LineBuffer) {
        buffer.indented_block("if (frames++ > 100) {", |buffer| {
            buffer.print_line("noLoop();");
        });
    }
}

#[test]
fn test_hooks_land_in_place() {
    let config = SketchConfig::default()
        .with_flags(FeatureFlags::empty())
        .with_source_comments(false);
    let mut sketch = Sketch::with_hooks(config, Box::new(Marked)).unwrap();
    sketch.add_point_2d(DVec2::ZERO, None);
    sketch.print_all();
    let script = sketch.print_buffer(true);

    assert!(script.starts_with(
        "// pre-file\nconst lineScale = 40.0;\nconst renderScale = 20.0;\nlet frames = 0;\n\nfunction setup() {\n"
    ));
    assert!(script.contains("  rectMode(CENTER);\n  frameRate(30);\n}\n"));
    assert!(script.contains(
        "  strokeWeight(1.0 / lineScale);\n  if (frames++ > 100) {\n    noLoop();\n  }\n}\n"
    ));
}

#[test]
fn test_default_hooks_add_nothing() {
    let config = SketchConfig::default().with_flags(FeatureFlags::empty());
    let mut sketch = Sketch::new(config).unwrap();
    sketch.print_all();
    let script = sketch.print_buffer(true);
    assert!(script.starts_with("const lineScale = 40.0;\nconst renderScale = 20.0;\n\nfunction setup() {\n"));
    assert!(script.contains("  rectMode(CENTER);\n}\n"));
}
