//! `cwrap.toml` manifests: batches of `.c`/`.h` declaration pairs.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use file::CwrapToml;
pub use manifest::{FileSpec, Manifest, parse_manifest, toml_value_to_string};
