use std::path::PathBuf;

use clap::Args;
use cwrap_codegen::{Include, IncludeCollector, read_includes, remove_comments};
use eyre::Result;

use super::read_input;

#[derive(Args)]
pub struct IncludesCommand {
    /// C file to scan (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,
}

impl IncludesCommand {
    pub fn run(&self) -> Result<()> {
        let text = read_input(self.input.as_deref())?;
        for line in list_includes(&text) {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Includes outside comments, first occurrence only, in file order.
fn list_includes(text: &str) -> Vec<String> {
    let mut includes = IncludeCollector::new();
    for include in read_includes(&remove_comments(text)) {
        includes.add(include);
    }

    includes
        .iter()
        .map(|include| match include {
            Include::Local(name) => format!("\"{}\"", name),
            Include::System(name) => format!("<{}>", name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_includes_dedups_and_skips_comments() {
        let text = "\
#include <stdio.h>
#include \"my.h\"
/* #include \"hidden.h\" */
#include <stdio.h>
#include <stdlib.h>
";
        assert_eq!(
            list_includes(text),
            ["<stdio.h>", "\"my.h\"", "<stdlib.h>"]
        );
    }
}
