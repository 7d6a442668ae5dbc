use std::path::PathBuf;

use clap::Args;
use cwrap_core::{EncodeOptions, encode_with};
use eyre::Result;

use super::read_input;

#[derive(Args)]
pub struct StringCommand {
    /// File to encode (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Double every `%` so the literal can be used as a printf format
    #[arg(short, long)]
    pub percent: bool,

    /// Drop backslashes written before `@`
    #[arg(long)]
    pub legacy_at: bool,
}

impl StringCommand {
    pub fn run(&self) -> Result<()> {
        let text = read_input(self.input.as_deref())?;
        let options = EncodeOptions {
            percent_escape: self.percent,
            legacy_at_unescape: self.legacy_at,
        };

        for line in encode_with(&text, options).lines() {
            println!("{}", line);
        }
        Ok(())
    }
}
