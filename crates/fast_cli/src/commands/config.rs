//! Config command - Show or initialize the configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use fast_core::{Config, DEFAULT_CONFIG_FILE};

#[derive(Args)]
pub struct ConfigArgs {
    /// Print the effective configuration (file merged with environment)
    #[arg(long)]
    show: bool,

    /// Write a default fast-engine.json in the current directory
    #[arg(long)]
    init: bool,
}

pub async fn execute(args: ConfigArgs) -> Result<()> {
    if args.init {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", DEFAULT_CONFIG_FILE);
        }
        Config::default()
            .save(path)
            .context("Failed to write config file")?;
        println!("✅ Created {}", DEFAULT_CONFIG_FILE);
        return Ok(());
    }

    // --show is also the default action.
    let config = Config::load(DEFAULT_CONFIG_FILE);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
