//! `#include` lines: rendering, collecting and scanning.

use std::fmt;

use cwrap_core::escape_quotes;
use indexmap::IndexSet;

use crate::builder::{CodeFragment, Renderable};

/// A single `#include` directive.
///
/// Local names are quote-escaped when rendered; system names are written
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Include {
    /// `#include "name"`
    Local(String),
    /// `#include <name>`
    System(String),
}

impl Include {
    /// Create a local (quoted) include.
    pub fn local(name: impl Into<String>) -> Self {
        Self::Local(name.into())
    }

    /// Create a system (angle-bracket) include.
    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    /// The included file name.
    pub fn name(&self) -> &str {
        match self {
            Self::Local(name) | Self::System(name) => name,
        }
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(name) => write!(f, "#include \"{}\"", escape_quotes(name)),
            Self::System(name) => write!(f, "#include <{name}>"),
        }
    }
}

impl Renderable for Include {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.to_string())]
    }
}

/// Tracks includes and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use cwrap_codegen::IncludeCollector;
///
/// let mut includes = IncludeCollector::new();
/// includes.add_system("stdio.h");
/// includes.add_local("my.h");
/// includes.add_system("stdio.h");
///
/// assert_eq!(includes.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IncludeCollector {
    includes: IndexSet<Include>,
}

impl IncludeCollector {
    /// Create a new empty include collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include, ignoring duplicates.
    pub fn add(&mut self, include: Include) {
        self.includes.insert(include);
    }

    /// Add a local include (`"name"`).
    pub fn add_local(&mut self, name: &str) {
        self.add(Include::local(name));
    }

    /// Add a system include (`<name>`).
    pub fn add_system(&mut self, name: &str) {
        self.add(Include::system(name));
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &IncludeCollector) {
        self.includes.extend(other.includes.iter().cloned());
    }

    /// Check if an include is already present.
    pub fn contains(&self, include: &Include) -> bool {
        self.includes.contains(include)
    }

    /// Iterate over all includes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Include> {
        self.includes.iter()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// Get the number of includes.
    pub fn len(&self) -> usize {
        self.includes.len()
    }
}

impl Renderable for IncludeCollector {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.includes.iter().flat_map(Include::to_fragments).collect()
    }
}

/// Find every `#include` line in C text.
///
/// Whitespace is allowed before the `#` and between `#` and `include`.
/// Lines whose target is not closed on the same line are skipped.
pub fn read_includes(text: &str) -> Vec<Include> {
    text.lines().filter_map(parse_include_line).collect()
}

fn parse_include_line(line: &str) -> Option<Include> {
    let rest = line.trim_start().strip_prefix('#')?;
    let rest = rest.trim_start().strip_prefix("include")?;
    let rest = rest.trim_start();

    if let Some(target) = rest.strip_prefix('"') {
        let end = target.find('"')?;
        Some(Include::local(&target[..end]))
    } else if let Some(target) = rest.strip_prefix('<') {
        let end = target.find('>')?;
        Some(Include::system(&target[..end]))
    } else {
        None
    }
}
