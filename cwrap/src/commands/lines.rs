use std::path::PathBuf;

use clap::Args;
use cwrap_codegen::add_line_directives;
use eyre::Result;

use super::read_input;

#[derive(Args)]
pub struct LinesCommand {
    /// C file to annotate
    pub input: PathBuf,

    /// File name to report in the directives (defaults to the input path)
    #[arg(short, long)]
    pub name: Option<String>,
}

impl LinesCommand {
    pub fn run(&self) -> Result<()> {
        let text = read_input(Some(&self.input))?;
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| self.input.display().to_string());
        print!("{}", add_line_directives(&text, &name));
        Ok(())
    }
}
