//! Preprocessor directives and comment helpers.

use cwrap_core::{Error, Result, derive_wrapper_name, escape_quotes};

use crate::builder::{CodeBuilder, CodeFragment, Renderable};
use crate::includes::Include;

/// An include guard wrapped around a body of fragments.
///
/// ```
/// use cwrap_codegen::{IncludeGuard, builder::{CodeBuilder, CodeFragment}};
///
/// let guard = IncludeGuard::for_file("my.h")
///     .unwrap()
///     .with_body(vec![CodeFragment::line("int x;")]);
/// let text = CodeBuilder::new().render(&guard).build();
///
/// assert_eq!(text, "#ifndef MY_H\n#define MY_H\nint x;\n#endif /* MY_H */\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeGuard {
    wrapper: String,
    body: Vec<CodeFragment>,
}

impl IncludeGuard {
    /// Create an empty guard whose macro is derived from `file_name`.
    pub fn for_file(file_name: &str) -> Result<Self> {
        Ok(Self {
            wrapper: derive_wrapper_name(file_name)?,
            body: Vec::new(),
        })
    }

    /// Set the guarded body.
    pub fn with_body(mut self, body: Vec<CodeFragment>) -> Self {
        self.body = body;
        self
    }

    /// The guard macro name.
    pub fn wrapper(&self) -> &str {
        &self.wrapper
    }

    fn open_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(format!("#ifndef {}", self.wrapper)),
            CodeFragment::line(format!("#define {}", self.wrapper)),
        ]
    }

    fn close_fragment(&self) -> CodeFragment {
        CodeFragment::line(format!("#endif /* {} */", self.wrapper))
    }
}

impl Renderable for IncludeGuard {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.open_fragments();
        fragments.extend(self.body.iter().cloned());
        fragments.push(self.close_fragment());
        fragments
    }
}

/// The opening lines of an include guard for `file_name`.
pub fn include_guard_open(file_name: &str) -> Result<String> {
    let guard = IncludeGuard::for_file(file_name)?;
    let mut code = CodeBuilder::new();
    for fragment in guard.open_fragments() {
        code.apply_fragment(fragment);
    }
    Ok(code.build())
}

/// The closing line of an include guard for `file_name`.
pub fn include_guard_close(file_name: &str) -> Result<String> {
    let guard = IncludeGuard::for_file(file_name)?;
    let mut code = CodeBuilder::new();
    code.apply_fragment(guard.close_fragment());
    Ok(code.build())
}

/// A local `#include` line for `header_file_name`.
pub fn include(header_file_name: &str) -> String {
    CodeBuilder::new()
        .render(&Include::local(header_file_name))
        .build()
}

/// A `#line` directive.
///
/// Any integer type is accepted; values that do not fit a non-negative
/// line number fail with [`Error::InvalidLineNumber`]. Quotes and
/// backslashes in the file name are escaped.
pub fn line_directive<N>(line_number: N, file_name: &str) -> Result<String>
where
    N: TryInto<u64> + ToString + Copy,
{
    let line = line_number
        .try_into()
        .map_err(|_| Error::InvalidLineNumber {
            value: line_number.to_string(),
        })?;
    Ok(format!("#line {line} \"{}\"\n", escape_quotes(file_name)))
}

/// Parse a textual line number.
pub fn parse_line_number(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::InvalidLineNumber {
            value: value.to_string(),
        })
}

/// Put a `#line` directive before every line of `text`.
///
/// Each directive names the 1-based number of the line that follows it, so
/// compiler diagnostics point back at `file_name`.
pub fn add_line_directives(text: &str, file_name: &str) -> String {
    let file_name = escape_quotes(file_name);
    let mut code = CodeBuilder::new();
    for (index, line) in text.lines().enumerate() {
        code.push_line(&format!("#line {} \"{file_name}\"", index + 1))
            .push_line(line);
    }
    code.build()
}

/// A comment recording which program generated a file.
pub fn stamp(generator: &str) -> String {
    CodeBuilder::new()
        .line("/*")
        .line(&format!("This file was generated by {generator}."))
        .line("*/")
        .build()
}

/// Strip `/* ... */` comments from C text.
///
/// An unterminated comment runs to the end of the text. Comment markers
/// inside string literals are not recognised.
pub fn remove_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
