//! C text generation for cwrap.
//!
//! Builds on the transforms in `cwrap-core` to emit whole artifacts.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`emit_declaration_pair`] - `.c`/`.h` files of string constants
//! - [`IncludeGuard`], [`line_directive`] - Preprocessor directives
//! - [`IncludeCollector`], [`read_includes`] - `#include` handling

pub mod builder;
mod declarations;
mod directives;
mod includes;

pub use declarations::{DeclarationPair, emit_declaration_pair};
pub use directives::{
    IncludeGuard, add_line_directives, include, include_guard_close, include_guard_open,
    line_directive, parse_line_number, remove_comments, stamp,
};
pub use includes::{Include, IncludeCollector, read_includes};
