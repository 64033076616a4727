//! Error types for templates.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Invalid metadata in template {template}: {message}")]
    InvalidMetadata { template: String, message: String },

    #[error("Undefined variable {{{{{variable}}}}} in {file}")]
    UndefinedVariable { file: String, variable: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
