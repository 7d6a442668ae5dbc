//! The cwrap.toml schema, parsing and validation.

use std::{path::Path, str::FromStr};

use cwrap_codegen::{DeclarationPair, emit_declaration_pair};
use cwrap_core::{derive_header_name, derive_wrapper_name, is_valid_identifier};
use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root schema for cwrap.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output C files, keyed by file name, in declaration order.
    #[serde(default)]
    pub files: IndexMap<String, FileSpec>,
}

/// One `.c`/`.h` pair to generate.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSpec {
    /// Prepended to every variable name.
    #[serde(default)]
    pub prefix: String,

    /// Generator name for a comment at the top of both files.
    #[serde(default)]
    pub stamp: Option<String>,

    /// Variable name -> value. Strings, numbers and booleans are accepted.
    #[serde(default)]
    pub values: IndexMap<String, toml::Value>,
}

impl FileSpec {
    /// Values rendered as the strings that will be emitted.
    pub fn string_values(&self) -> impl Iterator<Item = (&str, String)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), toml_value_to_string(value)))
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "cwrap.toml")
    }
}

impl Manifest {
    /// Parse a cwrap.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a cwrap.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Emit the declaration pair of every file, in declaration order.
    pub fn declaration_pairs(&self) -> Result<Vec<DeclarationPair>> {
        self.files
            .iter()
            .map(|(c_file, spec)| {
                let pair = emit_declaration_pair(c_file, spec.string_values(), &spec.prefix)
                    .map_err(|e| Box::new(Error::from(e)))?;
                Ok(match &spec.stamp {
                    Some(generator) => pair.stamped(generator),
                    None => pair,
                })
            })
            .collect()
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    tracing::debug!(filename, files = manifest.files.len(), "loaded manifest");
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for (c_file, spec) in &manifest.files {
        validate_file_name(c_file, ctx)?;
        let table_start = find_quoted_span(ctx.src(), c_file).map_or(0, |span| span.offset());

        for (name, value) in &spec.values {
            let full_name = format!("{}{}", spec.prefix, name);
            if !is_valid_identifier(name) || !is_valid_identifier(&full_name) {
                return Err(ctx.invalid_variable_name_error(
                    full_name,
                    c_file.as_str(),
                    find_key_span(ctx.src(), table_start, name),
                ));
            }

            if matches!(value, toml::Value::Array(_) | toml::Value::Table(_)) {
                return Err(ctx.validation_error(
                    format!(
                        "value of '{name}' must be a string, number, boolean or datetime, found {}",
                        value.type_str()
                    ),
                    find_key_span(ctx.src(), table_start, name),
                ));
            }
        }
    }
    Ok(())
}

fn validate_file_name(c_file: &str, ctx: &SourceContext) -> Result<()> {
    let span = find_quoted_span(ctx.src(), c_file);
    let header = derive_header_name(c_file).map_err(|_| ctx.not_a_c_file_error(c_file, span))?;
    derive_wrapper_name(&header).map_err(|e| ctx.validation_error(e.to_string(), span))?;
    Ok(())
}

/// Convert a TOML value to its string representation
///
/// Strings are taken as-is; everything else uses its TOML spelling.
pub fn toml_value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        other => other.to_string(),
    }
}

/// Find the span of a quoted key such as `[files."version.c"]`.
fn find_quoted_span(src: &str, name: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{name}\"");
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}

/// Find the span of a bare key at the start of a `key = value` line,
/// searching from byte offset `from` (the start of the owning table).
fn find_key_span(src: &str, from: usize, name: &str) -> Option<SourceSpan> {
    let mut offset = from;
    for line in src[from..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(name) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, name.len())));
            }
        }
        offset += line.len();
    }

    // Fall back to a quoted key or inline table entry
    find_quoted_span(&src[from..], name)
        .map(|span| SourceSpan::from((from + span.offset(), span.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION_TOML: &str = r#"
[files."my.c"]
[files."my.c".values]
version = "0.01"
author = "Michael Caine"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_str(VERSION_TOML).unwrap();
        let spec = &manifest.files["my.c"];
        assert_eq!(spec.prefix, "");
        assert_eq!(spec.stamp, None);
        let names: Vec<&str> = spec.values.keys().map(String::as_str).collect();
        assert_eq!(names, ["version", "author"]);
    }

    #[test]
    fn test_declaration_pairs() {
        let manifest = Manifest::from_str(VERSION_TOML).unwrap();
        let pairs = manifest.declaration_pairs().unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs[0].c_text(),
            "#include \"my.h\"\n\
             const char * author = \"Michael Caine\";\n\
             const char * version = \"0.01\";\n"
        );
    }

    #[test]
    fn test_prefix_stamp_and_scalars() {
        let manifest = Manifest::from_str(
            r#"
[files."build.c"]
prefix = "build_"
stamp = "cwrap"

[files."build.c".values]
number = 42
ratio = 0.5
debug = true
"#,
        )
        .unwrap();
        let pair = &manifest.declaration_pairs().unwrap()[0];
        assert!(pair.c_text().starts_with("/*\nThis file was generated by cwrap.\n*/\n"));
        assert!(pair.c_text().contains("const char * build_debug = \"true\";\n"));
        assert!(pair.c_text().contains("const char * build_number = \"42\";\n"));
        assert!(pair.c_text().contains("const char * build_ratio = \"0.5\";\n"));
    }

    #[test]
    fn test_files_keep_declaration_order() {
        let manifest = Manifest::from_str(
            r#"
[files."zeta.c".values]
zz = "1"

[files."alpha.c".values]
aa = "2"
"#,
        )
        .unwrap();
        let names: Vec<String> = manifest
            .declaration_pairs()
            .unwrap()
            .iter()
            .map(|pair| pair.c_file_name().to_string())
            .collect();
        assert_eq!(names, ["zeta.c", "alpha.c"]);
    }

    #[test]
    fn test_not_a_c_file() {
        let src = "[files.\"notes.txt\".values]\nok = \"1\"\n";
        match *Manifest::from_str(src).unwrap_err() {
            Error::NotACFile { name, span, .. } => {
                assert_eq!(name, "notes.txt");
                assert_eq!(span, Some(SourceSpan::from((8, 9))));
            }
            other => panic!("expected NotACFile, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_variable_name() {
        let src = "[files.\"my.c\".values]\nok = \"1\"\nint = \"2\"\n";
        match *Manifest::from_str(src).unwrap_err() {
            Error::InvalidVariableName {
                name, file, span, ..
            } => {
                assert_eq!(name, "int");
                assert_eq!(file, "my.c");
                assert_eq!(span, Some(SourceSpan::from((31, 3))));
            }
            other => panic!("expected InvalidVariableName, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_variable_name_labels_owning_table() {
        let src = "\
[files.\"first.c\".values]
int_ok = \"1\"

[files.\"second.c\"]
prefix = \"9\"
[files.\"second.c\".values]
int_ok = \"2\"
";
        let expected = src.rfind("int_ok").unwrap();
        match *Manifest::from_str(src).unwrap_err() {
            Error::InvalidVariableName {
                name, file, span, ..
            } => {
                assert_eq!(name, "9int_ok");
                assert_eq!(file, "second.c");
                assert_eq!(span, Some(SourceSpan::from((expected, 6))));
            }
            other => panic!("expected InvalidVariableName, got {other:?}"),
        }
    }

    #[test]
    fn test_datetime_value_stringified() {
        let manifest = Manifest::from_str(
            "[files.\"built.c\".values]\nbuilt_on = 2024-05-01\n",
        )
        .unwrap();
        let pair = &manifest.declaration_pairs().unwrap()[0];
        assert!(pair.c_text().contains("const char * built_on = \"2024-05-01\";\n"));
    }

    #[test]
    fn test_nested_value_rejected() {
        let src = "[files.\"my.c\".values]\nlist = [1, 2]\n";
        assert!(matches!(
            *Manifest::from_str(src).unwrap_err(),
            Error::Validation { .. }
        ));
    }

    #[test]
    fn test_path_file_name_rejected() {
        let src = "[files.\"src/my.c\".values]\nok = \"1\"\n";
        assert!(matches!(
            *Manifest::from_str(src).unwrap_err(),
            Error::Validation { .. }
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            *Manifest::from_str("[files").unwrap_err(),
            Error::Parse { .. }
        ));
        assert!(matches!(
            *Manifest::from_str("unknown = 1").unwrap_err(),
            Error::Parse { .. }
        ));
    }

    #[test]
    fn test_toml_value_to_string() {
        assert_eq!(
            toml_value_to_string(&toml::Value::String("hello".to_string())),
            "hello"
        );
        assert_eq!(toml_value_to_string(&toml::Value::Integer(42)), "42");
        assert_eq!(toml_value_to_string(&toml::Value::Boolean(true)), "true");
        let datetime: toml::value::Datetime = "1979-05-27T07:32:00Z".parse().unwrap();
        assert_eq!(
            toml_value_to_string(&toml::Value::Datetime(datetime)),
            "1979-05-27T07:32:00Z"
        );
        let array = toml::Value::Array(vec![toml::Value::Integer(1), toml::Value::Integer(2)]);
        assert!(!toml_value_to_string(&array).is_empty());
    }
}
