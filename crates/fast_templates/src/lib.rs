//! # fast_templates
//!
//! Template discovery and rendering for Fast-Engine.
//!
//! Templates are disk-resident directories under a configured root, each made
//! valid by a `template.yml` descriptor. Rendering produces an in-memory file
//! set (relative path to final content) that the engine crate writes out.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fast_templates::{RenderContext, TemplateRegistry, TemplateRenderer};
//!
//! let registry = TemplateRegistry::new("templates");
//! let names = registry.list().unwrap();
//!
//! let renderer = TemplateRenderer::new(registry);
//! let context = RenderContext::new()
//!     .with("app_name", "demo")
//!     .with("app_description", "A demo service");
//!
//! let files = renderer.render("saas-basic", &context).unwrap();
//! for path in files.keys() {
//!     println!("{path}");
//! }
//! ```

pub mod error;
pub mod manifest;
pub mod registry;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use manifest::{Template, TemplateManifest, DESCRIPTOR_FILE};
pub use registry::TemplateRegistry;
pub use renderer::{
    to_pascal_case, to_snake_case, FileSet, RenderContext, TemplateRenderer, TEMPLATE_SUFFIX,
};
