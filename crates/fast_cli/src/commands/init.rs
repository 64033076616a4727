//! Init command - Generate a new project from a template.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use fast_core::{Config, FastEngine, DEFAULT_CONFIG_FILE};

#[derive(Args)]
pub struct InitArgs {
    /// Name of the project to generate
    name: String,

    /// Template to use (defaults to the only template when exactly one exists)
    #[arg(short, long)]
    template: Option<String>,

    /// Project description substituted into the template
    #[arg(short, long)]
    description: Option<String>,

    /// Output directory root (defaults to the configured output path)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn execute(args: InitArgs) -> Result<()> {
    info!("Generating project: {}", args.name);

    let mut config = Config::load(DEFAULT_CONFIG_FILE);
    if let Some(output) = args.output {
        config.output_path = output;
    }

    // Demo pipeline: the provider calls are simulated, no network is touched.
    println!("🧠 Simulating Claude call for architecture...");
    tokio::time::sleep(Duration::from_secs(1)).await;
    println!("⚙️  Simulating OpenAI call for backend...");
    tokio::time::sleep(Duration::from_secs(1)).await;
    println!("🎨 Simulating DeepSeek call for frontend...");
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("📄 Rendering template...");
    let engine = FastEngine::new(config);
    let outcome = engine
        .scaffold(
            &args.name,
            args.template.as_deref(),
            args.description.as_deref(),
        )
        .context("Failed to generate project")?;

    println!("💾 Writing project files...");
    for entry in &outcome.report.entries {
        match &entry.status {
            fast_core::FileStatus::Written => println!("  ✅ {}", entry.path),
            fast_core::FileStatus::Failed { reason } => {
                println!("  ❌ {} ({})", entry.path, reason)
            }
        }
    }
    println!(
        "📊 Files created: {}/{}",
        outcome.report.written(),
        outcome.report.total()
    );

    // A partially failed run must never look like a success.
    if !outcome.report.is_complete_success() {
        let failed: Vec<_> = outcome.report.failures().map(|(path, _)| path).collect();
        anyhow::bail!(
            "{} of {} files could not be written: {}",
            outcome.report.failed(),
            outcome.report.total(),
            failed.join(", ")
        );
    }

    println!();
    println!(
        "✅ Project '{}' created at {:?} from template '{}'",
        args.name, outcome.project_path, outcome.template
    );
    println!();
    println!("Next steps:");
    println!("  cd {}", args.name);
    println!("  docker-compose up -d");

    Ok(())
}
