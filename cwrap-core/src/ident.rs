//! C identifier validation and name derivation from file names.

use crate::{Error, Result};

/// Keywords that can never be used as a generated C identifier.
pub const C_RESERVED_WORDS: &[&str] = &[
    "auto", "if", "break", "int", "case", "long", "char", "register", "continue", "return",
    "default", "short", "do", "sizeof", "double", "static", "else", "struct", "entry", "switch",
    "extern", "typedef", "float", "union", "for", "unsigned", "goto", "while", "enum", "void",
    "const", "signed", "volatile",
];

/// Check if a name is a C reserved word (case-sensitive).
pub fn is_reserved_word(name: &str) -> bool {
    C_RESERVED_WORDS.contains(&name)
}

/// Check whether `name` is usable as a C identifier.
///
/// The name must start with a letter or underscore, be followed by at least
/// one letter, digit or underscore, and must not be a reserved word. Single
/// character names are rejected.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    let mut rest = 0usize;
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }
        rest += 1;
    }

    rest > 0 && !is_reserved_word(name)
}

/// Like [`is_valid_identifier`], failing with [`Error::InvalidIdentifier`].
pub fn validate_identifier(name: &str) -> Result<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

/// Derive an include-guard macro name from a file name.
///
/// `.` and `-` become `_` and the result is uppercased. Any other character
/// that is not valid in an identifier (such as a path separator) makes the
/// derivation fail.
///
/// ```
/// use cwrap_core::derive_wrapper_name;
///
/// assert_eq!(derive_wrapper_name("my-file.h").unwrap(), "MY_FILE_H");
/// assert!(derive_wrapper_name("include/my.h").is_err());
/// ```
pub fn derive_wrapper_name(file_name: &str) -> Result<String> {
    let wrapper = file_name.replace(['.', '-'], "_").to_uppercase();
    validate_identifier(&wrapper)?;
    Ok(wrapper)
}

/// Make a header file name from a C file name (`frog.c` -> `frog.h`).
pub fn derive_header_name(c_file_name: &str) -> Result<String> {
    match c_file_name.strip_suffix(".c") {
        Some(stem) => Ok(format!("{stem}.h")),
        None => Err(Error::NotACFile {
            name: c_file_name.to_string(),
        }),
    }
}

/// Make the `.c` and `.h` file names for a base name (`frog` -> `frog.c`, `frog.h`).
pub fn ch_file_names(base: &str) -> Result<(String, String)> {
    if base.is_empty() {
        return Err(Error::EmptyBaseName);
    }
    Ok((format!("{base}.c"), format!("{base}.h")))
}
