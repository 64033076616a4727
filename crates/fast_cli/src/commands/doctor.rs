//! Doctor command - Diagnose configuration and environment.

use anyhow::{Context, Result};
use clap::Args;

use fast_core::{Config, FastEngine, DEFAULT_CONFIG_FILE};

#[derive(Args)]
pub struct DoctorArgs {
    /// Emit the report as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: DoctorArgs) -> Result<()> {
    let config = Config::load(DEFAULT_CONFIG_FILE);
    let engine = FastEngine::new(config);
    let report = engine.doctor().context("Failed to collect diagnostics")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let check = |ok: bool| if ok { "✅" } else { "❌" };

    println!("Fast-Engine doctor");
    println!();
    println!("  {} Config valid (all API keys set)", check(report.config_valid));
    println!("  {} OpenAI API key", check(report.api_keys.openai));
    println!("  {} Claude API key", check(report.api_keys.claude));
    println!("  {} DeepSeek API key", check(report.api_keys.deepseek));
    println!(
        "  {} Templates path: {:?}",
        check(report.templates_path_exists),
        report.templates_absolute_path
    );
    println!(
        "  {} Writable working directory: {:?}",
        check(report.can_write),
        report.current_directory
    );
    println!();
    println!("  Output path: {:?}", report.output_path);
    if report.available_templates.is_empty() {
        println!("  Templates: none found");
    } else {
        println!("  Templates: {}", report.available_templates.join(", "));
    }

    Ok(())
}
