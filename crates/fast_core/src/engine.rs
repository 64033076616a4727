//! Scaffold orchestrator.
//!
//! Wires Configuration → Template Registry → Renderer → Project Writer as a
//! linear pipeline. Registry and renderer errors abort before anything is
//! written; per-file write failures are delegated to the [`WriteReport`].

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use fast_templates::{
    to_pascal_case, to_snake_case, RenderContext, TemplateRegistry, TemplateRenderer,
};

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::writer::{ProjectWriter, WriteReport};

/// Result of one scaffold run.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Template the project was generated from.
    pub template: String,
    /// Directory the project was written into.
    pub project_path: PathBuf,
    /// Per-file write outcomes.
    pub report: WriteReport,
}

/// Presence of the provider API keys (placeholders, never used for calls).
#[derive(Debug, Serialize)]
pub struct ApiKeyStatus {
    pub openai: bool,
    pub claude: bool,
    pub deepseek: bool,
}

/// System diagnostics for the `doctor` command.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub config_valid: bool,
    pub api_keys: ApiKeyStatus,
    pub templates_path_exists: bool,
    pub templates_absolute_path: PathBuf,
    pub available_templates: Vec<String>,
    pub current_directory: PathBuf,
    pub output_path: PathBuf,
    pub can_write: bool,
}

/// Fast-Engine orchestrator.
pub struct FastEngine {
    config: Config,
    registry: TemplateRegistry,
    renderer: TemplateRenderer,
}

impl FastEngine {
    /// Build an engine from a loaded configuration.
    pub fn new(config: Config) -> Self {
        let registry = TemplateRegistry::new(config.templates_path.clone());
        let renderer = TemplateRenderer::new(registry.clone());
        Self {
            config,
            registry,
            renderer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Generate a project under `<output_path>/<name>`.
    ///
    /// Fails before any write when the template cannot be resolved or
    /// rendered; afterwards, partial write failures are reported per file,
    /// with no rollback of files already written.
    pub fn scaffold(
        &self,
        name: &str,
        template: Option<&str>,
        description: Option<&str>,
    ) -> CoreResult<ScaffoldOutcome> {
        let template = self.resolve_template(template)?;
        info!("Scaffolding project {} from template {}", name, template);

        let description = description
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("SaaS application: {name}"));
        let context = RenderContext::new()
            .with("app_name", name)
            .with("app_description", description)
            .with("app_name_snake", to_snake_case(name))
            .with("app_name_pascal", to_pascal_case(name));

        let files = self.renderer.render(&template, &context)?;
        info!("Rendered {} files", files.len());

        let project_path = self.config.output_path.join(name);
        let report = ProjectWriter::write(&project_path, &files)?;

        Ok(ScaffoldOutcome {
            template,
            project_path,
            report,
        })
    }

    /// Resolve the template to use, validating its descriptor.
    ///
    /// When no name is given, defaults silently iff exactly one template
    /// exists; with zero or several candidates the caller must choose.
    fn resolve_template(&self, requested: Option<&str>) -> CoreResult<String> {
        let name = match requested {
            Some(name) => name.to_string(),
            None => {
                let mut names = self.registry.list()?;
                if names.len() == 1 {
                    names.remove(0)
                } else {
                    return Err(CoreError::NoTemplateSelected {
                        count: names.len(),
                        names,
                    });
                }
            }
        };
        // Surfaces NotFound and InvalidMetadata before anything is rendered.
        let template = self.registry.describe(&name)?;
        Ok(template.id)
    }

    /// Collect system diagnostics.
    pub fn doctor(&self) -> CoreResult<DoctorReport> {
        let current_directory = std::env::current_dir()?;
        let templates_path = &self.config.templates_path;
        let can_write = fs::metadata(&current_directory)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false);

        Ok(DoctorReport {
            config_valid: self.config.validate(),
            api_keys: ApiKeyStatus {
                openai: self.config.openai_api_key.is_some(),
                claude: self.config.claude_api_key.is_some(),
                deepseek: self.config.deepseek_api_key.is_some(),
            },
            templates_path_exists: templates_path.exists(),
            templates_absolute_path: fs::canonicalize(templates_path)
                .unwrap_or_else(|_| templates_path.clone()),
            available_templates: self.registry.list()?,
            current_directory,
            output_path: self.config.output_path.clone(),
            can_write,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_template(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("template.yml"),
            format!("name: {name}\ndescription: test template"),
        )
        .unwrap();
        fs::write(dir.join("README.md.tmpl"), "# {{app_name}}\n").unwrap();
    }

    fn engine_for(templates_root: &Path, output: &Path) -> FastEngine {
        FastEngine::new(Config {
            templates_path: templates_root.to_path_buf(),
            output_path: output.to_path_buf(),
            ..Config::default()
        })
    }

    #[test]
    fn test_default_template_when_single() {
        let temp = tempdir().unwrap();
        write_template(temp.path(), "only");
        let engine = engine_for(temp.path(), temp.path());

        let outcome = engine.scaffold("demo", None, None).unwrap();
        assert_eq!(outcome.template, "only");
        assert!(outcome.report.is_complete_success());
    }

    #[test]
    fn test_ambiguous_default_fails_before_writes() {
        let temp = tempdir().unwrap();
        write_template(temp.path(), "a");
        write_template(temp.path(), "b");
        let output = temp.path().join("out");
        let engine = engine_for(temp.path(), &output);

        let err = engine.scaffold("demo", None, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::NoTemplateSelected { count: 2, .. }
        ));
        assert!(!output.join("demo").exists());
    }

    #[test]
    fn test_unknown_template_fails_before_writes() {
        let temp = tempdir().unwrap();
        write_template(temp.path(), "only");
        let output = temp.path().join("out");
        let engine = engine_for(temp.path(), &output);

        let err = engine.scaffold("demo", Some("ghost"), None).unwrap_err();
        assert!(matches!(err, CoreError::Template(_)));
        assert!(!output.join("demo").exists());
    }

    #[test]
    fn test_description_default_derived_from_name() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("t");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("template.yml"), "name: t\ndescription: d").unwrap();
        fs::write(dir.join("about.txt.tmpl"), "{{app_description}}").unwrap();
        let engine = engine_for(temp.path(), temp.path());

        engine.scaffold("demo", Some("t"), None).unwrap();
        let about = fs::read_to_string(temp.path().join("demo").join("about.txt")).unwrap();
        assert_eq!(about, "SaaS application: demo");
    }
}
