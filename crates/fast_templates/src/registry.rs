//! Template discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::{Template, TemplateManifest, DESCRIPTOR_FILE};

/// Registry of disk-resident templates under a single root directory.
///
/// Holds only the root path; every operation re-scans the filesystem so the
/// registry never drifts from disk state.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates_root: PathBuf,
}

impl TemplateRegistry {
    /// Create a registry over the given templates root.
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
        }
    }

    /// The configured templates root.
    pub fn root(&self) -> &Path {
        &self.templates_root
    }

    /// List template names in lexicographic order.
    ///
    /// A direct child directory counts iff it contains `template.yml`. A
    /// missing root yields an empty list.
    pub fn list(&self) -> TemplateResult<Vec<String>> {
        if !self.templates_root.exists() {
            warn!(
                "Templates directory does not exist: {:?}",
                self.templates_root
            );
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.templates_root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_dir() && path.join(DESCRIPTOR_FILE).is_file() {
                if let Some(name) = path.file_name() {
                    names.push(name.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        debug!("Discovered {} templates", names.len());
        Ok(names)
    }

    /// Whether a template with this name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.content_path(name).join(DESCRIPTOR_FILE).is_file()
    }

    /// Load and validate a template's descriptor metadata.
    pub fn describe(&self, name: &str) -> TemplateResult<Template> {
        let location = self.content_path(name);
        let descriptor = location.join(DESCRIPTOR_FILE);
        if !descriptor.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        let content = fs::read_to_string(&descriptor)?;
        let manifest: TemplateManifest =
            serde_yaml::from_str(&content).map_err(|e| TemplateError::InvalidMetadata {
                template: name.to_string(),
                message: e.to_string(),
            })?;
        manifest
            .validate()
            .map_err(|message| TemplateError::InvalidMetadata {
                template: name.to_string(),
                message,
            })?;

        Ok(Template::from_manifest(name, manifest, location))
    }

    /// Path of a template directory under the root.
    pub fn content_path(&self, name: &str) -> PathBuf {
        self.templates_root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_descriptor(dir: &Path, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(DESCRIPTOR_FILE), body).unwrap();
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let temp = tempdir().unwrap();
        write_descriptor(&temp.path().join("t2"), "name: t2\ndescription: second");
        write_descriptor(&temp.path().join("t1"), "name: t1\ndescription: first");
        // Directory without a descriptor is never listed.
        fs::create_dir_all(temp.path().join("nope")).unwrap();
        // Stray file at the root is ignored.
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let registry = TemplateRegistry::new(temp.path());
        assert_eq!(registry.list().unwrap(), vec!["t1", "t2"]);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = tempdir().unwrap();
        let registry = TemplateRegistry::new(temp.path().join("missing"));
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn test_describe_valid() {
        let temp = tempdir().unwrap();
        write_descriptor(
            &temp.path().join("saas-basic"),
            "name: saas-basic\ndescription: Minimal SaaS service\nversion: 2.0.0\nauthor: Fast-Engine Team",
        );

        let registry = TemplateRegistry::new(temp.path());
        let template = registry.describe("saas-basic").unwrap();
        assert_eq!(template.id, "saas-basic");
        assert_eq!(template.name, "saas-basic");
        assert_eq!(template.version, "2.0.0");
        assert_eq!(template.author.as_deref(), Some("Fast-Engine Team"));
        assert_eq!(template.location, temp.path().join("saas-basic"));
    }

    #[test]
    fn test_describe_not_found() {
        let temp = tempdir().unwrap();
        let registry = TemplateRegistry::new(temp.path());
        assert!(matches!(
            registry.describe("ghost"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_describe_invalid_metadata() {
        let temp = tempdir().unwrap();
        // Listed (descriptor present) but describe fails: no description field.
        write_descriptor(&temp.path().join("broken"), "name: broken");

        let registry = TemplateRegistry::new(temp.path());
        assert_eq!(registry.list().unwrap(), vec!["broken"]);
        assert!(matches!(
            registry.describe("broken"),
            Err(TemplateError::InvalidMetadata { .. })
        ));
    }
}
