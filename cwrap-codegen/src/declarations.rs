//! Paired `.c`/`.h` files of string constants.

use std::collections::BTreeMap;
use std::path::Path;

use cwrap_core::{
    Error, File, Result, WriteResult, derive_header_name, escape_quotes, is_valid_identifier,
};

use crate::builder::{CodeBuilder, CodeFragment, Renderable};
use crate::directives::{IncludeGuard, stamp};
use crate::includes::Include;

/// One string constant: its prefixed name and escaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Constant {
    name: String,
    value: String,
}

/// The `.c` side: `const char * name = "value";`
struct Definition<'a>(&'a Constant);

impl Renderable for Definition<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let Constant { name, value } = self.0;
        vec![CodeFragment::line(format!(
            "const char * {name} = \"{value}\";"
        ))]
    }
}

/// The `.h` side: `extern const char * name; /* value */`
///
/// A `*/` inside the value is written as `*\/` so the comment cannot end early.
struct ExternDeclaration<'a>(&'a Constant);

impl Renderable for ExternDeclaration<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let Constant { name, value } = self.0;
        let value = value.replace("*/", "*\\/");
        vec![CodeFragment::line(format!(
            "extern const char * {name}; /* {value} */"
        ))]
    }
}

/// Text of a matching C source and header file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationPair {
    c_file_name: String,
    h_file_name: String,
    c_text: String,
    h_text: String,
}

impl DeclarationPair {
    /// Name of the C source file.
    pub fn c_file_name(&self) -> &str {
        &self.c_file_name
    }

    /// Name of the header file.
    pub fn h_file_name(&self) -> &str {
        &self.h_file_name
    }

    /// Content of the C source file.
    pub fn c_text(&self) -> &str {
        &self.c_text
    }

    /// Content of the header file.
    pub fn h_text(&self) -> &str {
        &self.h_text
    }

    /// Prefix both files with a comment naming the generator.
    pub fn stamped(mut self, generator: &str) -> Self {
        let comment = stamp(generator);
        self.c_text.insert_str(0, &comment);
        self.h_text.insert_str(0, &comment);
        self
    }

    /// The pair as files inside `dir`, C source first.
    pub fn files(&self, dir: &Path) -> [File; 2] {
        [
            File::new(dir.join(&self.c_file_name), self.c_text.as_str()),
            File::new(dir.join(&self.h_file_name), self.h_text.as_str()),
        ]
    }

    /// Write the pair into `dir`, replacing existing files.
    ///
    /// The C source is written first; if that fails the header is left
    /// untouched.
    pub fn write(&self, dir: &Path) -> Result<[WriteResult; 2]> {
        let [c_file, h_file] = self.files(dir);
        let c_result = c_file.write()?;
        let h_result = h_file.write()?;
        Ok([c_result, h_result])
    }
}

/// Emit a `.c` file defining each value as a string constant and a `.h`
/// file declaring them `extern`.
///
/// Names are emitted in lexicographic order and each gets `prefix` in
/// front. Every key is checked before any text is produced; the first
/// invalid one fails the whole call with [`Error::InvalidVariableName`].
///
/// ```
/// use std::collections::BTreeMap;
///
/// use cwrap_codegen::emit_declaration_pair;
///
/// let values = BTreeMap::from([("version", "0.01")]);
/// let pair = emit_declaration_pair("my.c", &values, "").unwrap();
///
/// assert_eq!(pair.c_text(), "#include \"my.h\"\nconst char * version = \"0.01\";\n");
/// ```
pub fn emit_declaration_pair<I, K, V>(
    c_file_name: &str,
    values: I,
    prefix: &str,
) -> Result<DeclarationPair>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let sorted: BTreeMap<String, String> = values
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();

    let constants = sorted
        .iter()
        .map(|(key, value)| constant(key, value, prefix))
        .collect::<Result<Vec<_>>>()?;

    let h_file_name = derive_header_name(c_file_name)?;
    let guard = IncludeGuard::for_file(&h_file_name)?;

    tracing::debug!(
        c_file = c_file_name,
        h_file = %h_file_name,
        count = constants.len(),
        "emitting declaration pair"
    );

    let mut c_code = CodeBuilder::new();
    c_code.emit(&Include::local(h_file_name.as_str()));
    for constant in &constants {
        c_code.emit(&Definition(constant));
    }

    let declarations: Vec<CodeFragment> = constants
        .iter()
        .flat_map(|constant| ExternDeclaration(constant).to_fragments())
        .collect();
    let h_code = CodeBuilder::new().render(&guard.with_body(declarations));

    Ok(DeclarationPair {
        c_file_name: c_file_name.to_string(),
        h_file_name,
        c_text: c_code.build(),
        h_text: h_code.build(),
    })
}

fn constant(key: &str, value: &str, prefix: &str) -> Result<Constant> {
    let name = format!("{prefix}{key}");
    if !is_valid_identifier(key) || !is_valid_identifier(&name) {
        return Err(Error::InvalidVariableName { name });
    }
    Ok(Constant {
        name,
        value: escape_quotes(value),
    })
}
