//! Error types for the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that abort a scaffold operation before or at the project root.
///
/// Per-file write problems are never a `CoreError`; they are recorded in the
/// [`crate::writer::WriteReport`] instead.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Template error: {0}")]
    Template(#[from] fast_templates::TemplateError),

    #[error("No template specified and {count} are available: {names:?}")]
    NoTemplateSelected { count: usize, names: Vec<String> },

    #[error("Cannot create project directory {path:?}: {source}")]
    ProjectDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
