use clap::Args;
use cwrap_core::{is_reserved_word, is_valid_identifier};
use eyre::Result;

#[derive(Args)]
pub struct IdentCommand {
    /// Names to check
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl IdentCommand {
    pub fn run(&self) -> Result<()> {
        let mut all_valid = true;
        for name in &self.names {
            if is_valid_identifier(name) {
                println!("✓ {}", name);
            } else if is_reserved_word(name) {
                all_valid = false;
                println!("✗ {} (reserved word)", name);
            } else {
                all_valid = false;
                println!("✗ {}", name);
            }
        }

        if !all_valid {
            std::process::exit(1);
        }
        Ok(())
    }
}
