//! Indentation-aware text output.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Append-only output buffer with an indentation depth.
///
/// The buffer is exactly the concatenation of everything written, in call
/// order. The emitter never changes its own depth; the walker does, around
/// nested scopes.
#[derive(Debug, Clone, Default)]
pub struct IndentedEmitter {
    output: String,
    depth: usize,
}

impl IndentedEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn push_indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease the depth; stays at zero.
    pub fn pop_indent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append raw text.
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Append a line terminator.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Append the current indentation, then `text`.
    pub fn indented_write(&mut self, text: &str) {
        for _ in 0..self.depth * INDENT_WIDTH {
            self.output.push(' ');
        }
        self.output.push_str(text);
    }

    pub fn indented_write_line(&mut self, text: &str) {
        self.indented_write(text);
        self.newline();
    }

    /// Append only the current indentation, for a line continued inline.
    pub fn indent(&mut self) {
        self.indented_write("");
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}
