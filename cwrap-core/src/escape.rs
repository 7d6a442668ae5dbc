//! Conversion of raw text into C string literals.

use std::fmt;

/// One or more double-quoted C string literal lines.
///
/// Adjacent literals are concatenated by the C compiler, so the lines can be
/// emitted one per source line inside an initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CStringLiteral {
    lines: Vec<String>,
}

impl CStringLiteral {
    /// The quoted lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of literal lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: even empty text encodes to `""`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for CStringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Options controlling [`encode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Double every `%` so the literal survives use as a printf format.
    pub percent_escape: bool,
    /// Drop a backslash written before `@`.
    ///
    /// Only needed for text authored with `\@` escapes; off by default.
    pub legacy_at_unescape: bool,
}

impl EncodeOptions {
    /// Options with percent escaping switched on or off.
    pub fn percent(percent_escape: bool) -> Self {
        Self {
            percent_escape,
            ..Self::default()
        }
    }
}

type Step = fn(&str) -> String;

/// Encode `text` as C string literal lines.
///
/// With `percent_escape` every `%` is doubled.
///
/// ```
/// use cwrap_core::encode;
///
/// let literal = encode("say \"hi\"\nbye", false);
/// assert_eq!(literal.to_string(), "\"say \\\"hi\\\"\\n\"\n\"bye\"");
/// ```
pub fn encode(text: &str, percent_escape: bool) -> CStringLiteral {
    encode_with(text, EncodeOptions::percent(percent_escape))
}

/// Encode `text` as C string literal lines using explicit options.
pub fn encode_with(text: &str, options: EncodeOptions) -> CStringLiteral {
    if text.is_empty() {
        return CStringLiteral {
            lines: vec!["\"\"".to_string()],
        };
    }

    let escaped = steps(options)
        .into_iter()
        .fold(text.to_string(), |acc, step| step(&acc));

    CStringLiteral {
        lines: quote_lines(&escaped),
    }
}

/// Escape `text` for use inside a single pair of double quotes.
///
/// Backslashes and quotes are escaped and newlines become `\n`; the result
/// is not split into lines and `%` is left alone.
pub fn escape_quotes(text: &str) -> String {
    escape_quote_chars(&escape_backslashes(text)).replace('\n', "\\n")
}

// Order matters: backslashes are doubled before quotes gain their escaping
// backslash, so a quote always comes out as exactly `\"`.
fn steps(options: EncodeOptions) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::with_capacity(4);
    if options.percent_escape {
        steps.push(double_percents);
    }
    steps.push(escape_backslashes);
    steps.push(escape_quote_chars);
    if options.legacy_at_unescape {
        steps.push(unescape_at_signs);
    }
    steps
}

fn double_percents(text: &str) -> String {
    text.replace('%', "%%")
}

fn escape_backslashes(text: &str) -> String {
    text.replace('\\', "\\\\")
}

fn escape_quote_chars(text: &str) -> String {
    text.replace('"', "\\\"")
}

fn unescape_at_signs(text: &str) -> String {
    text.replace("\\@", "@")
}

fn quote_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| match line.strip_suffix('\n') {
            Some(body) => format!("\"{body}\\n\""),
            None => format!("\"{line}\""),
        })
        .collect()
}
