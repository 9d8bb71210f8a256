//! Sketch assembly.

use std::fmt;
use std::io::Write;

use sketchgen_core::literal::{ScriptLiteral, camera_literal};
use sketchgen_core::math::{DMat3, DVec2, DVec3};

use crate::boilerplate;
use crate::{
    CameraLookAt, DrawList, FeatureFlags, Geometry, LineBuffer, NoHooks, SketchConfig,
    SketchHooks, SketchResult, SourceLocation, Style,
};

/// A p5.js sketch being generated.
///
/// Geometry added with the `add_*` methods is collected as draw calls;
/// [`print_all`](Self::print_all) assembles the whole script into the line buffer and
/// [`print_buffer`](Self::print_buffer) takes the text out.
///
/// ```
/// use sketchgen::Sketch;
/// use sketchgen::math::DVec2;
///
/// let mut sketch = Sketch::new(Default::default()).unwrap();
/// sketch.add_point_2d(DVec2::new(1.0, 2.0), None);
/// sketch.print_all();
/// let script = sketch.print_buffer(true);
/// assert!(script.contains("circle(1.0, 2.0, 4.0 / renderScale);"));
/// ```
pub struct Sketch {
    config: SketchConfig,
    buffer: LineBuffer,
    draws: DrawList,
    hooks: Box<dyn SketchHooks>,
}

impl fmt::Debug for Sketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sketch")
            .field("config", &self.config)
            .field("buffer", &self.buffer)
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}

impl Sketch {
    /// Create a sketch without hooks.
    pub fn new(config: SketchConfig) -> SketchResult<Self> {
        Self::with_hooks(config, Box::new(NoHooks))
    }

    /// Create a sketch whose output is extended by `hooks`.
    pub fn with_hooks(config: SketchConfig, hooks: Box<dyn SketchHooks>) -> SketchResult<Self> {
        config.validate()?;
        tracing::debug!(
            width = config.size.x,
            height = config.size.y,
            line_scale = config.line_scale,
            render_scale = config.render_scale,
            flags = ?config.flags,
            "Creating sketch"
        );
        Ok(Self {
            config,
            buffer: LineBuffer::new(),
            draws: DrawList::new(),
            hooks,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn flags(&self) -> FeatureFlags {
        self.config.flags
    }

    pub fn set_flags(&mut self, flags: FeatureFlags) {
        self.config.flags = flags;
    }

    pub fn enable(&mut self, flags: FeatureFlags) {
        self.config.flags.insert(flags);
    }

    pub fn disable(&mut self, flags: FeatureFlags) {
        self.config.flags.remove(flags);
    }

    /// Set the initial camera of a 3D sketch.
    pub fn set_camera(&mut self, camera: Option<CameraLookAt>) {
        self.config.camera = camera;
    }

    /// Whether any 3D geometry was added, which turns this into a 3D sketch.
    pub fn contains_3d(&self) -> bool {
        self.draws.contains_3d()
    }

    /// Draw-call lines collected so far.
    pub fn draws(&self) -> &[String] {
        self.draws.lines()
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    #[track_caller]
    pub fn add_point_2d(&mut self, point: DVec2, style: Option<&Style>) {
        self.add_geometry(Geometry::Point2(point), style, Some(SourceLocation::caller()));
    }

    #[track_caller]
    pub fn add_point_3d(&mut self, point: DVec3, style: Option<&Style>) {
        self.add_geometry(Geometry::Point3(point), style, Some(SourceLocation::caller()));
    }

    #[track_caller]
    pub fn add_line_2d(&mut self, start: DVec2, end: DVec2, style: Option<&Style>) {
        self.add_geometry(
            Geometry::Line2(start, end),
            style,
            Some(SourceLocation::caller()),
        );
    }

    #[track_caller]
    pub fn add_line_3d(&mut self, start: DVec3, end: DVec3, style: Option<&Style>) {
        self.add_geometry(
            Geometry::Line3(start, end),
            style,
            Some(SourceLocation::caller()),
        );
    }

    #[track_caller]
    pub fn add_normal_2d(&mut self, origin: DVec2, direction: DVec2, style: Option<&Style>) {
        self.add_geometry(
            Geometry::Normal2 { origin, direction },
            style,
            Some(SourceLocation::caller()),
        );
    }

    #[track_caller]
    pub fn add_normal_3d(&mut self, origin: DVec3, direction: DVec3, style: Option<&Style>) {
        self.add_geometry(
            Geometry::Normal3 { origin, direction },
            style,
            Some(SourceLocation::caller()),
        );
    }

    #[track_caller]
    pub fn add_tangent_2d(&mut self, origin: DVec2, direction: DVec2, style: Option<&Style>) {
        self.add_geometry(
            Geometry::Tangent2 { origin, direction },
            style,
            Some(SourceLocation::caller()),
        );
    }

    /// Add `geometry` drawn with `style`, or the configured default for its kind.
    ///
    /// `location` is written as a comment before the draw calls unless source comments
    /// are disabled.
    pub fn add_geometry(
        &mut self,
        geometry: Geometry,
        style: Option<&Style>,
        location: Option<SourceLocation>,
    ) {
        let style = style.unwrap_or_else(|| self.config.styles.for_kind(geometry.kind()));
        let location = location.filter(|_| self.config.source_comments);
        self.draws.push(geometry, Some(style), location.as_ref());
    }

    /// Add the geometry drawn in `body` transformed by the affine part of `transform`.
    pub fn with_transform_2d(&mut self, transform: &DMat3, body: impl FnOnce(&mut Sketch)) {
        self.draws.push_transform_2d(transform);
        body(self);
        self.draws.pop_transform();
    }

    /// Turn the stroke off for the following geometry, unless it already is.
    pub fn no_stroke(&mut self) {
        self.draws.no_stroke();
    }

    /// Turn the fill off for the following geometry, unless it already is.
    pub fn no_fill(&mut self) {
        self.draws.no_fill();
    }

    /// Assemble the complete script into the line buffer.
    ///
    /// Calling this again appends another copy; flush with
    /// [`print_buffer`](Self::print_buffer) in between.
    pub fn print_all(&mut self) {
        let Self {
            config,
            buffer,
            draws,
            hooks,
        } = self;
        let is_3d = draws.contains_3d();
        tracing::debug!(draw_lines = draws.len(), is_3d, "Printing sketch");

        hooks.pre_file(buffer);
        print_globals(buffer, config, is_3d);
        hooks.header(buffer);
        buffer.print_line("");
        print_setup(buffer, config, is_3d, &mut **hooks);
        buffer.print_line("");
        print_draw(buffer, config, draws, is_3d, &mut **hooks);
        print_helpers(buffer, config, draws, is_3d);
    }

    /// Take the assembled script, trimmed. With `clear`, the buffer starts over empty.
    pub fn print_buffer(&mut self, clear: bool) -> String {
        self.buffer.print_buffer(clear)
    }

    /// Write the assembled script to `writer`.
    pub fn write_buffer<W: Write>(&mut self, writer: &mut W, clear: bool) -> SketchResult<()> {
        self.buffer.write_buffer(writer, clear)
    }
}

fn print_globals(buffer: &mut LineBuffer, config: &SketchConfig, is_3d: bool) {
    buffer.print_line(format!("const lineScale = {};", config.line_scale.literal()));
    buffer.print_line(format!(
        "const renderScale = {};",
        config.render_scale.literal()
    ));
    if is_3d {
        buffer.print_line("let spaceBarToggled = false;");
    }
}

fn print_setup(
    buffer: &mut LineBuffer,
    config: &SketchConfig,
    is_3d: bool,
    hooks: &mut dyn SketchHooks,
) {
    buffer.indented_block("function setup() {", |buffer| {
        if is_3d {
            buffer.print_line(format!("createCanvas({}, WEBGL);", config.size.literal()));
            if let Some(camera) = config.camera {
                // The scene is scaled by renderScale after the axis correction.
                buffer.print_line(format!(
                    "camera({}, {}, 0, 1, 0);",
                    camera_literal(camera.eye * config.render_scale),
                    camera_literal(camera.center * config.render_scale)
                ));
            }
        } else {
            buffer.print_line(format!("createCanvas({});", config.size.literal()));
        }
        buffer.print_line("ellipseMode(RADIUS);");
        buffer.print_line("rectMode(CENTER);");
        if is_3d && config.flags.contains(FeatureFlags::DEBUG) {
            buffer.print_line("debugMode(GRID);");
        }
        hooks.post_setup(buffer);
    });
}

fn print_draw(
    buffer: &mut LineBuffer,
    config: &SketchConfig,
    draws: &DrawList,
    is_3d: bool,
    hooks: &mut dyn SketchHooks,
) {
    let flags = config.flags;
    buffer.indented_block("function draw() {", |buffer| {
        buffer.print_line("background(255);");
        if is_3d {
            buffer.print_line("orbitControl();");
            buffer.print_line(boilerplate::AXIS_CORRECTION);
        } else {
            buffer.print_line("translate(width / 2, height / 2);");
        }
        buffer.print_line("strokeWeight(1.0 / lineScale);");

        if is_3d {
            if flags.contains(FeatureFlags::ORIGIN) {
                buffer.print_line("drawOrigin3D();");
            }
            buffer.print_multiline(boilerplate::SPACE_BAR_SPIN);
            buffer.print_line("scale(renderScale);");
        } else {
            buffer.print_line("scale(renderScale, -renderScale);");
            if flags.contains(FeatureFlags::GRID) {
                buffer.print_line("drawGrid();");
            }
            if flags.contains(FeatureFlags::ORIGIN) {
                buffer.print_line("drawOrigin();");
            }
        }

        for line in draws.lines() {
            buffer.print_line(line);
        }

        if !is_3d {
            buffer.print_line("showMouseLocation();");
        }
        buffer.print_line("stroke(0);");
        buffer.print_line("noFill();");
        buffer.print_line("strokeWeight(1.0 / lineScale);");
        hooks.post_draw(buffer);
    });
}

fn print_helpers(buffer: &mut LineBuffer, config: &SketchConfig, draws: &DrawList, is_3d: bool) {
    let flags = config.flags;
    let normals = flags.contains(FeatureFlags::NORMALS) || draws.uses_normals();
    let tangents = flags.contains(FeatureFlags::TANGENTS) || draws.uses_tangents();

    let helpers = [
        (!is_3d, boilerplate::MOUSE_LOCATION),
        (is_3d, boilerplate::KEY_PRESSED),
        (!is_3d && flags.contains(FeatureFlags::GRID), boilerplate::GRID),
        (!is_3d && flags.contains(FeatureFlags::ORIGIN), boilerplate::ORIGIN_2D),
        (is_3d && flags.contains(FeatureFlags::ORIGIN), boilerplate::ORIGIN_3D),
        (normals, boilerplate::NORMAL_2D),
        (normals && is_3d, boilerplate::NORMAL_3D),
        (tangents, boilerplate::TANGENT),
        (is_3d, boilerplate::SPHERE),
    ];
    for (_, helper) in helpers.into_iter().filter(|(enabled, _)| *enabled) {
        buffer.print_line("");
        buffer.print_multiline(helper);
    }
}
