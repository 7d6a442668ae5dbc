//! Code builder utility for generating C text.

use super::{CodeFragment, Renderable};

/// Fluent API for building C code line by line.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental building.
///
/// # Example
///
/// ```
/// use cwrap_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("#include <stdio.h>")
///     .blank()
///     .comment("entry point")
///     .line("int main(void) { return 0; }")
///     .build();
///
/// assert_eq!(
///     code,
///     "#include <stdio.h>\n\n/* entry point */\nint main(void) { return 0; }\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without a newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a C block comment on its own line (mutable).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str("/* ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Comment(s) => {
                self.push_comment(&s);
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add raw text without a newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    /// Add a C block comment on its own line.
    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    /// Render a node into the builder.
    pub fn render(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Borrow the text built so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Finish and return the built text.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutable_api() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("#ifndef X_H")
            .push_line("#define X_H")
            .push_line("#endif");
        assert_eq!(builder.build(), "#ifndef X_H\n#define X_H\n#endif\n");
    }

    #[test]
    fn test_raw_has_no_newline() {
        let code = CodeBuilder::new().raw("int").raw(" x;").build();
        assert_eq!(code, "int x;");
    }

    #[test]
    fn test_apply_sequence() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::sequence(vec![
            CodeFragment::comment("a"),
            CodeFragment::blank(),
            CodeFragment::line("int a;"),
        ]));
        assert_eq!(builder.as_str(), "/* a */\n\nint a;\n");
    }
}
