//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Directives and declarations describe themselves as fragments and are
//! rendered through [`CodeBuilder`](super::CodeBuilder).

/// Represents a fragment of generated C code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without newline.
    Raw(String),
    /// A one-line C block comment, `/* text */`.
    Comment(String),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a raw text fragment.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a comment fragment.
    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(
            CodeFragment::raw("raw"),
            CodeFragment::Raw("raw".to_string())
        );
        assert_eq!(
            CodeFragment::comment("note"),
            CodeFragment::Comment("note".to_string())
        );
    }

    #[test]
    fn test_boxed_renderable() {
        struct One;
        impl Renderable for One {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line("int x;")]
            }
        }

        let boxed: Box<dyn Renderable> = Box::new(One);
        assert_eq!(boxed.to_fragments(), vec![CodeFragment::line("int x;")]);
    }
}
