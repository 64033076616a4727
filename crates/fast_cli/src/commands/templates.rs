//! Templates command - List available templates.

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use fast_core::{Config, DEFAULT_CONFIG_FILE};
use fast_templates::TemplateRegistry;

#[derive(Args)]
pub struct TemplatesArgs {}

pub async fn execute(_args: TemplatesArgs) -> Result<()> {
    let config = Config::load(DEFAULT_CONFIG_FILE);
    let registry = TemplateRegistry::new(config.templates_path.clone());

    let names = registry.list().context("Failed to scan templates")?;
    if names.is_empty() {
        println!("No templates found under {:?}", config.templates_path);
        return Ok(());
    }

    println!("Available templates ({}):", names.len());
    println!();
    for name in names {
        // An invalid descriptor disables that template, not the listing.
        match registry.describe(&name) {
            Ok(template) => {
                let author = template.author.as_deref().unwrap_or("unknown");
                println!("  📦 {} (v{}, by {})", template.id, template.version, author);
                println!("     {}", template.description);
            }
            Err(e) => {
                warn!("Skipping template {}: {}", name, e);
                println!("  ⚠️  {} (invalid descriptor)", name);
            }
        }
    }

    Ok(())
}
