mod completions;
mod guard;
mod ident;
mod includes;
mod lines;
mod pair;
mod string;

use std::{
    io::{self, Read},
    path::Path,
};

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use guard::GuardCommand;
use ident::IdentCommand;
use includes::IncludesCommand;
use lines::LinesCommand;
use pair::PairCommand;
use string::StringCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cwrap_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for cwrap_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

/// Read a whole input file, or stdin when no path (or `-`) is given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[derive(Parser)]
#[command(name = "cwrap")]
#[command(version)]
#[command(about = "Generate C string literals, include guards and declaration files")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::String(cmd) => cmd.run(),
            Commands::Ident(cmd) => cmd.run(),
            Commands::Guard(cmd) => cmd.run(),
            Commands::Pair(cmd) => cmd.run(),
            Commands::Lines(cmd) => cmd.run(),
            Commands::Includes(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text as C string literal lines
    String(StringCommand),

    /// Check whether names are valid C identifiers
    Ident(IdentCommand),

    /// Print the include guard for a header file
    Guard(GuardCommand),

    /// Generate .c/.h declaration files from cwrap.toml
    Pair(PairCommand),

    /// Put a #line directive before every line of a file
    Lines(LinesCommand),

    /// List the #include lines of a C file
    Includes(IncludesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_string_flags() {
        let cli = Cli::try_parse_from(["cwrap", "string", "--percent", "in.txt"]).unwrap();
        match cli.command {
            Commands::String(cmd) => {
                assert!(cmd.percent);
                assert!(!cmd.legacy_at);
            }
            _ => panic!("expected string command"),
        }
    }

    #[test]
    fn test_parse_pair_defaults() {
        let cli = Cli::try_parse_from(["cwrap", "pair"]).unwrap();
        match cli.command {
            Commands::Pair(cmd) => {
                assert_eq!(cmd.config, Path::new("cwrap.toml"));
                assert_eq!(cmd.output, Path::new("."));
                assert!(!cmd.dry_run);
            }
            _ => panic!("expected pair command"),
        }
    }
}
