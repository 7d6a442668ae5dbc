use std::path::PathBuf;

use clap::Args;
use cwrap_manifest::CwrapToml;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::reports::{PairReport, Report, TerminalOutput};

#[derive(Args)]
pub struct PairCommand {
    /// Path to cwrap.toml (defaults to ./cwrap.toml)
    #[arg(short, long, default_value = "cwrap.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl PairCommand {
    pub fn run(&self) -> Result<()> {
        let cwrap_toml = CwrapToml::open(&self.config).unwrap_or_exit();
        let pairs = cwrap_toml.manifest().declaration_pairs().unwrap_or_exit();
        tracing::debug!(
            config = %cwrap_toml.path().display(),
            pairs = pairs.len(),
            dry_run = self.dry_run,
            "emitting declaration pairs"
        );

        let mut report = PairReport::new(self.dry_run);
        for pair in &pairs {
            if self.dry_run {
                report.preview(pair);
                continue;
            }
            let [c_result, h_result] = pair
                .write(&self.output)
                .wrap_err_with(|| format!("Failed to write {}", pair.c_file_name()))?;
            report.written(&self.output, pair.c_file_name(), c_result);
            report.written(&self.output, pair.h_file_name(), h_result);
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
