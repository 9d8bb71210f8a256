//! Extension points for adding custom text to a sketch.

use crate::LineBuffer;

/// Custom text written at fixed points of [`Sketch::print_all`](crate::Sketch::print_all).
///
/// Every method defaults to writing nothing. Text printed from `post_setup` and
/// `post_draw` lands inside the respective function body, already indented.
///
/// ```
/// use sketchgen::{LineBuffer, Sketch, SketchConfig, SketchHooks};
///
/// struct Title;
///
/// impl SketchHooks for Title {
///     fn header(&mut self, buffer: &mut LineBuffer) {
///         buffer.print_line("// generated scene");
///     }
/// }
///
/// let mut sketch = Sketch::with_hooks(SketchConfig::default(), Box::new(Title)).unwrap();
/// sketch.print_all();
/// assert!(sketch.print_buffer(true).contains("// generated scene"));
/// ```
pub trait SketchHooks: Send {
    /// Before anything else in the file.
    fn pre_file(&mut self, _buffer: &mut LineBuffer) {}

    /// After the global constants.
    fn header(&mut self, _buffer: &mut LineBuffer) {}

    /// At the end of `setup()`.
    fn post_setup(&mut self, _buffer: &mut LineBuffer) {}

    /// At the end of `draw()`.
    fn post_draw(&mut self, _buffer: &mut LineBuffer) {}
}

/// Hooks that add nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl SketchHooks for NoHooks {}
