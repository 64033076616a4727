//! # fast_core
//!
//! Scaffolding engine for Fast-Engine.
//!
//! This crate provides the configuration layer, the project writer, and the
//! orchestrator that turns a template plus a project name into a directory on
//! disk.
//!
//! # Architecture
//!
//! - **Config**: JSON file merged under environment-variable overrides
//! - **ProjectWriter**: writes a rendered file set, isolating per-file failures
//! - **FastEngine**: linear scaffold pipeline (resolve → render → write)
//! - **retry_async**: reusable backoff helper for future provider calls
//!
//! # Example
//!
//! ```rust,no_run
//! use fast_core::{Config, FastEngine};
//!
//! let config = Config::load(fast_core::DEFAULT_CONFIG_FILE);
//! let engine = FastEngine::new(config);
//!
//! let outcome = engine
//!     .scaffold("my-app", Some("saas-basic"), Some("A demo service"))
//!     .unwrap();
//! println!(
//!     "{}/{} files written to {:?}",
//!     outcome.report.written(),
//!     outcome.report.total(),
//!     outcome.project_path
//! );
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod retry;
pub mod writer;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use engine::{ApiKeyStatus, DoctorReport, FastEngine, ScaffoldOutcome};
pub use error::{CoreError, CoreResult};
pub use retry::retry_async;
pub use writer::{FileOutcome, FileStatus, ProjectWriter, WriteReport};
