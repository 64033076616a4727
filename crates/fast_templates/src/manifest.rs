//! Template descriptor definitions.
//!
//! Every template directory must carry a `template.yml` descriptor directly
//! inside it; a directory without one is not a template, whatever else it
//! contains.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fixed descriptor filename inside each template directory.
pub const DESCRIPTOR_FILE: &str = "template.yml";

/// Parsed contents of a `template.yml` descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name
    pub name: String,
    /// Template description
    pub description: String,
    /// Template version
    #[serde(default = "default_version")]
    pub version: String,
    /// Template author
    #[serde(default)]
    pub author: Option<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl TemplateManifest {
    /// Validate required descriptor fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("descriptor field 'name' is empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("descriptor field 'description' is empty".to_string());
        }
        Ok(())
    }
}

/// A discovered template: its descriptor metadata plus disk location.
///
/// Templates are discovered by scanning the registry root, never constructed
/// ahead of disk state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Identity: the directory name under the registry root.
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: Option<String>,
    /// Absolute path of the template directory.
    pub location: PathBuf,
}

impl Template {
    pub(crate) fn from_manifest(id: &str, manifest: TemplateManifest, location: PathBuf) -> Self {
        Self {
            id: id.to_string(),
            name: manifest.name,
            description: manifest.description,
            version: manifest.version,
            author: manifest.author,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_defaults() {
        let manifest: TemplateManifest = serde_yaml::from_str(
            r#"
name: saas-basic
description: Minimal SaaS service
"#,
        )
        .unwrap();
        assert_eq!(manifest.version, "1.0.0");
        assert!(manifest.author.is_none());
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_manifest_rejects_empty_description() {
        let manifest: TemplateManifest = serde_yaml::from_str(
            r#"
name: saas-basic
description: ""
"#,
        )
        .unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_manifest_missing_field_is_parse_error() {
        let result: Result<TemplateManifest, _> = serde_yaml::from_str("name: t1");
        assert!(result.is_err());
    }
}
