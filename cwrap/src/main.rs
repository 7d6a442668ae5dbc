mod commands;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    Cli::parse().run()
}

/// Enable debug output with `RUST_LOG=cwrap_codegen=debug` and friends.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
