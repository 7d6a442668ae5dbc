use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for cwrap-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Input-contract violations raised while deriving names or emitting C text.
///
/// Every variant is fatal to the call that produced it; nothing is retried
/// or partially emitted.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{name}' is not a C file name")]
    #[diagnostic(code(cwrap::not_a_c_file), help("the name must end in '.c'"))]
    NotACFile { name: String },

    #[error("'{name}' is not a valid C identifier")]
    #[diagnostic(
        code(cwrap::invalid_identifier),
        help(
            "use at least two letters, digits or underscores, starting with a letter or underscore, and avoid C keywords"
        )
    )]
    InvalidIdentifier { name: String },

    #[error("invalid line number '{value}'")]
    #[diagnostic(
        code(cwrap::invalid_line_number),
        help("line numbers must be non-negative integers")
    )]
    InvalidLineNumber { value: String },

    #[error("invalid variable name '{name}'")]
    #[diagnostic(
        code(cwrap::invalid_variable_name),
        help("variable names must be valid C identifiers and not C keywords")
    )]
    InvalidVariableName { name: String },

    #[error("cannot make C file names from an empty base name")]
    #[diagnostic(code(cwrap::empty_base_name))]
    EmptyBaseName,

    #[error("failed to write '{path}'")]
    #[diagnostic(code(cwrap::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
