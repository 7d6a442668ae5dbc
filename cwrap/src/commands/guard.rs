use clap::Args;
use cwrap_codegen::{include_guard_close, include_guard_open};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GuardCommand {
    /// Header file name, without directories (e.g. `my-file.h`)
    pub file_name: String,
}

impl GuardCommand {
    pub fn run(&self) -> Result<()> {
        let open = include_guard_open(&self.file_name).unwrap_or_exit();
        let close = include_guard_close(&self.file_name).unwrap_or_exit();
        print!("{}{}", open, close);
        Ok(())
    }
}
