//! CLI command definitions.
//!
//! Each subcommand maps to one engine operation; the commands own all
//! user-facing printing while the library crates only log.

use clap::{Parser, Subcommand};

pub mod config;
pub mod doctor;
pub mod init;
pub mod templates;

/// Fast-Engine - rapid full-stack project generator
#[derive(Parser)]
#[command(name = "fast-engine")]
#[command(version, about = "Fast-Engine - rapid full-stack project generator")]
#[command(long_about = r#"
Fast-Engine generates full-stack project skeletons from disk-resident
templates, substituting project name and description into parametrized files.

WORKFLOWS:
  init       → Generate a new project from a template
  templates  → List available templates
  doctor     → Diagnose configuration and environment
  config     → Show or initialize the fast-engine.json config file
  version    → Print the Fast-Engine version

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new project from a template
    Init(init::InitArgs),

    /// List available templates
    #[command(alias = "list-templates")]
    Templates(templates::TemplatesArgs),

    /// Diagnose configuration and environment
    Doctor(doctor::DoctorArgs),

    /// Show or initialize the configuration file
    Config(config::ConfigArgs),

    /// Print the Fast-Engine version
    Version,
}
