//! Core text transforms for cwrap.
//!
//! This crate turns plain data into pieces of C source:
//!
//! - [`encode`] converts arbitrary text into C string literal lines
//! - [`is_valid_identifier`] and [`derive_wrapper_name`] check and
//!   synthesize C identifiers
//! - [`File`] writes generated text to disk

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod escape;
mod file;
mod ident;

pub use error::{Error, Result};
pub use escape::{CStringLiteral, EncodeOptions, encode, encode_with, escape_quotes};
pub use file::{File, WriteResult};
pub use ident::{
    C_RESERVED_WORDS, ch_file_names, derive_header_name, derive_wrapper_name, is_reserved_word,
    is_valid_identifier, validate_identifier,
};
