//! Indentation-aware text buffer.
//!
//! All generated script text is written line by line into a [`LineBuffer`], which
//! prefixes every non-empty line with the current indentation.

use std::cmp::Ordering;
use std::io::Write;
use std::ops::{Deref, DerefMut};

use crate::{SketchError, SketchResult};

/// Spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Append-only text buffer with an explicit indentation level.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    text: String,
    indent_level: usize,
    indent_width: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty buffer indenting by [`DEFAULT_INDENT_WIDTH`] spaces.
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Create an empty buffer indenting by `indent_width` spaces per level.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            text: String::new(),
            indent_level: 0,
            indent_width,
        }
    }

    /// Current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Everything printed so far, untrimmed.
    pub fn contents(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `text` as one line at the current indentation.
    ///
    /// An empty line is written as a bare newline.
    pub fn print_line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            self.text
                .extend(std::iter::repeat_n(' ', self.indent_level * self.indent_width));
            self.text.push_str(text);
        }
        self.text.push('\n');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease the indentation level by one.
    ///
    /// Going below zero is a logic error in the caller: it panics in debug builds and
    /// is clamped otherwise.
    pub fn deindent(&mut self) {
        debug_assert!(self.indent_level > 0, "deindent below indentation level 0");
        if self.indent_level == 0 {
            tracing::warn!("Ignoring deindent below indentation level 0");
            return;
        }
        self.indent_level -= 1;
    }

    /// Print `opening`, run `body` one level deeper, then print the closing `}`.
    ///
    /// The indentation level is restored even if `body` unwinds.
    ///
    /// ```
    /// use sketchgen::LineBuffer;
    ///
    /// let mut buffer = LineBuffer::new();
    /// buffer.indented_block("function setup() {", |buffer| {
    ///     buffer.print_line("createCanvas(400, 400);");
    /// });
    /// assert_eq!(
    ///     buffer.contents(),
    ///     "function setup() {\n  createCanvas(400, 400);\n}\n"
    /// );
    /// ```
    pub fn indented_block(&mut self, opening: impl AsRef<str>, body: impl FnOnce(&mut LineBuffer)) {
        self.print_line(opening);
        {
            let mut scope = IndentScope::enter(self);
            body(&mut *scope);
        }
        self.print_line("}");
    }

    /// Re-indent a block of pre-formatted text into the buffer.
    ///
    /// Indentation is inferred relative to the previous non-blank line: a deeper line
    /// indents one level, a shallower line deindents one level. Jumps of several levels
    /// between consecutive lines collapse to a single step. Blank lines are kept as
    /// empty lines. Leading and trailing newlines of `block` are ignored, and the
    /// indentation level is back where it started once the block is printed.
    pub fn print_multiline(&mut self, block: &str) {
        let start = self.indent_level;
        let mut previous_width: Option<usize> = None;

        for line in block.trim_matches('\n').lines() {
            let content = line.trim_start();
            if content.is_empty() {
                self.print_line("");
                continue;
            }

            let width = line.len() - content.len();
            if let Some(previous) = previous_width {
                match width.cmp(&previous) {
                    Ordering::Greater => self.indent(),
                    // Never step out past where the block started.
                    Ordering::Less if self.indent_level > start => self.deindent(),
                    _ => {}
                }
            }
            previous_width = Some(width);
            self.print_line(content);
        }

        self.indent_level = start;
    }

    /// Take the buffered text with surrounding whitespace trimmed.
    ///
    /// With `clear`, the buffer is emptied and the indentation reset so it can be
    /// reused for the next sketch.
    pub fn print_buffer(&mut self, clear: bool) -> String {
        let out = self.text.trim().to_owned();
        if clear {
            self.clear();
        }
        tracing::trace!(bytes = out.len(), cleared = clear, "Flushed line buffer");
        out
    }

    /// Write the trimmed buffer followed by a newline to `writer`.
    ///
    /// Nothing is written for an empty buffer. The buffer is only cleared once the
    /// write succeeded.
    pub fn write_buffer<W: Write>(&mut self, writer: &mut W, clear: bool) -> SketchResult<()> {
        let text = self.text.trim();
        if !text.is_empty() {
            writeln!(writer, "{text}").map_err(SketchError::from)?;
        }
        if clear {
            self.clear();
        }
        Ok(())
    }

    /// Drop all text and reset the indentation level.
    pub fn clear(&mut self) {
        self.text.clear();
        self.indent_level = 0;
    }
}

/// Restores the indentation level of the wrapped buffer when dropped.
struct IndentScope<'a> {
    buffer: &'a mut LineBuffer,
    restore_to: usize,
}

impl<'a> IndentScope<'a> {
    fn enter(buffer: &'a mut LineBuffer) -> Self {
        let restore_to = buffer.indent_level;
        buffer.indent();
        Self { buffer, restore_to }
    }
}

impl Deref for IndentScope<'_> {
    type Target = LineBuffer;

    fn deref(&self) -> &LineBuffer {
        self.buffer
    }
}

impl DerefMut for IndentScope<'_> {
    fn deref_mut(&mut self) -> &mut LineBuffer {
        self.buffer
    }
}

impl Drop for IndentScope<'_> {
    fn drop(&mut self) {
        self.buffer.indent_level = self.restore_to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_print_line_indents() {
        let mut buffer = LineBuffer::new();
        buffer.print_line("a");
        buffer.indent();
        buffer.print_line("b");
        buffer.indent();
        buffer.print_line("c");
        buffer.deindent();
        buffer.deindent();
        buffer.print_line("d");
        assert_eq!(buffer.contents(), "a\n  b\n    c\nd\n");
        assert_eq!(buffer.indent_level(), 0);
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let mut buffer = LineBuffer::new();
        buffer.indent();
        buffer.print_line("");
        assert_eq!(buffer.contents(), "\n");
    }

    #[test]
    fn test_custom_indent_width() {
        let mut buffer = LineBuffer::with_indent_width(4);
        buffer.indented_block("if (x) {", |buffer| buffer.print_line("y();"));
        assert_eq!(buffer.contents(), "if (x) {\n    y();\n}\n");
    }

    #[test]
    fn test_nested_blocks_restore_level() {
        let mut buffer = LineBuffer::new();
        buffer.indent();
        buffer.indented_block("function draw() {", |buffer| {
            buffer.indented_block("if (a) {", |buffer| {
                buffer.indented_block("if (b) {", |buffer| {
                    assert_eq!(buffer.indent_level(), 4);
                    buffer.print_line("c();");
                });
            });
        });
        assert_eq!(buffer.indent_level(), 1);
        assert_eq!(
            buffer.contents(),
            "  function draw() {\n    if (a) {\n      if (b) {\n        c();\n      }\n    }\n  }\n"
        );
    }

    #[test]
    fn test_block_restores_level_after_unbalanced_body() {
        let mut buffer = LineBuffer::new();
        buffer.indented_block("{", |buffer| {
            buffer.indent();
            buffer.indent();
        });
        assert_eq!(buffer.indent_level(), 0);
        assert!(buffer.contents().ends_with("\n}\n"));
    }

    #[test]
    fn test_block_restores_level_on_panic() {
        let mut buffer = LineBuffer::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            buffer.indented_block("{", |_| panic!("body failed"));
        }));
        assert!(result.is_err());
        assert_eq!(buffer.indent_level(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "deindent below indentation level 0")]
    fn test_deindent_underflow_asserts() {
        LineBuffer::new().deindent();
    }

    #[test]
    fn test_multiline_relative_indent() {
        let block = "
function drawSphere(x, y, z, radius) {
  push();
  translate(x, y, z);
  sphere(radius);
  pop();
}
";
        let mut buffer = LineBuffer::new();
        buffer.indent();
        buffer.print_multiline(block);
        assert_eq!(
            buffer.contents(),
            "  function drawSphere(x, y, z, radius) {\n    push();\n    translate(x, y, z);\n    sphere(radius);\n    pop();\n  }\n"
        );
        assert_eq!(buffer.indent_level(), 1);
    }

    #[test]
    fn test_multiline_ignores_base_indent() {
        let mut buffer = LineBuffer::new();
        buffer.print_multiline("        if (a) {\n            b();\n        }");
        assert_eq!(buffer.contents(), "if (a) {\n  b();\n}\n");
    }

    #[test]
    fn test_multiline_collapses_deep_jumps() {
        let mut buffer = LineBuffer::new();
        buffer.print_multiline("a\n      b\n      c\nd");
        assert_eq!(buffer.contents(), "a\n  b\n  c\nd\n");
    }

    #[test]
    fn test_multiline_keeps_blank_lines() {
        let mut buffer = LineBuffer::new();
        buffer.print_multiline("a {\n  b();\n\n  c();\n}");
        assert_eq!(buffer.contents(), "a {\n  b();\n\n  c();\n}\n");
    }

    #[test]
    fn test_multiline_does_not_escape_start_level() {
        let mut buffer = LineBuffer::new();
        buffer.indent();
        buffer.print_multiline("    a\n  b\nc");
        assert_eq!(buffer.contents(), "  a\n  b\n  c\n");
        assert_eq!(buffer.indent_level(), 1);
    }

    #[test]
    fn test_print_buffer_trims_and_clears() {
        let mut buffer = LineBuffer::new();
        buffer.print_line("");
        buffer.print_line("x();");
        buffer.print_line("");
        assert_eq!(buffer.print_buffer(false), "x();");
        assert!(!buffer.is_empty());
        assert_eq!(buffer.print_buffer(true), "x();");
        assert_eq!(buffer.print_buffer(true), "");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_buffer() {
        let mut buffer = LineBuffer::new();
        buffer.print_line("x();");
        let mut out = Vec::new();
        buffer.write_buffer(&mut out, true).unwrap();
        assert_eq!(out, b"x();\n");

        let mut again = Vec::new();
        buffer.write_buffer(&mut again, true).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_write_buffer_keeps_text_on_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut buffer = LineBuffer::new();
        buffer.print_line("x();");
        let err = buffer.write_buffer(&mut Broken, true).unwrap_err();
        assert!(matches!(err, SketchError::Io(_)));
        assert_eq!(buffer.contents(), "x();\n");
    }
}
