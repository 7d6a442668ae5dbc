use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for cwrap-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelled when a span is known.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an error for an output name that is not a C file.
    pub fn not_a_c_file_error(&self, name: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::NotACFile {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create an error for a value name that is not a usable C variable.
    pub fn invalid_variable_name_error(
        &self,
        name: impl Into<String>,
        file: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidVariableName {
            src: self.named_source(),
            span,
            name: name.into(),
            file: file.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a cwrap.toml with a [files.\"name.c\".values] table"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cwrap.toml")]
    #[diagnostic(code(cwrap::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{name}' is not a C file name")]
    #[diagnostic(
        code(cwrap::not_a_c_file),
        help("output names must be bare file names ending in '.c', e.g. 'version.c'")
    )]
    NotACFile {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a .c file")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid variable name '{name}' in '{file}'")]
    #[diagnostic(
        code(cwrap::invalid_variable_name),
        help(
            "use at least two letters, digits or underscores, starting with a letter or underscore, and avoid C keywords"
        )
    )]
    InvalidVariableName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid variable name")]
        span: Option<SourceSpan>,
        name: String,
        file: String,
    },

    #[error("{message}")]
    #[diagnostic(code(cwrap::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] cwrap_core::Error),
}
