//! Generate config command implementation

use crate::config::{default_config_path, InputConfig};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust storage and input settings");
        println!("2. Use it with:");
        println!("   wordreveal --config {} study", self.output.display());
        if let Some(default_path) = default_config_path() {
            println!(
                "   or copy it to {} to use it by default",
                default_path.display()
            );
        }

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let input = InputConfig::default();
        format!(
            r#"# WordReveal CLI configuration
#
# Every section and key is optional; missing values use the defaults shown.

[storage]
# Directory holding wordreveal_settings.json and wordreveal_app_state.json.
# The --data-dir option and WORDREVEAL_DATA_DIR take precedence.
# data_dir = "/path/to/wordreveal"

[input]
# Milliseconds a Next/Back button must be held before it starts repeating
hold_delay_ms = {}

# Milliseconds between repeated steps while a button is held
repeat_interval_ms = {}

# Columns a horizontal drag must cover to count as a swipe
swipe_min_columns = {}

# Rows a swipe may drift vertically
swipe_max_rows = {}
"#,
            input.hold_delay_ms,
            input.repeat_interval_ms,
            input.swipe_min_columns,
            input.swipe_max_rows
        )
    }
}
