//! Template rendering.
//!
//! Rendering is a pure function from (template contents, context) to an
//! in-memory file set; nothing is written to a destination here, which keeps
//! the renderer testable without touching a project directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::DESCRIPTOR_FILE;
use crate::registry::TemplateRegistry;

/// Reserved suffix marking a source file as parametrized. The suffix is
/// stripped to form the output path.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Materialized file set: relative output path (slash-separated) to final
/// text content. `BTreeMap` keeps iteration deterministic.
pub type FileSet = BTreeMap<String, String>;

/// Immutable set of named string values substituted into parametrized files.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion; consumes self so the context is fixed once
    /// handed to a render call.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Template renderer producing materialized file sets.
pub struct TemplateRenderer {
    registry: TemplateRegistry,
    variable_pattern: Regex,
}

impl TemplateRenderer {
    /// Create a renderer over a template registry.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render a template into an in-memory file set.
    ///
    /// Static files are copied verbatim; files carrying [`TEMPLATE_SUFFIX`]
    /// have the suffix stripped and their placeholders substituted from the
    /// context. The descriptor file itself is excluded.
    pub fn render(&self, template_name: &str, context: &RenderContext) -> TemplateResult<FileSet> {
        if !self.registry.exists(template_name) {
            return Err(TemplateError::NotFound(template_name.to_string()));
        }
        let template_path = self.registry.content_path(template_name);
        debug!("Rendering template {} from {:?}", template_name, template_path);

        let mut files = FileSet::new();
        for entry in WalkDir::new(&template_path)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let source = entry.path();
            if !source.is_file() {
                continue;
            }
            // Entries always live under the walk root.
            let relative = source.strip_prefix(&template_path).unwrap();
            let relative_key = slash_path(relative);
            if relative_key == DESCRIPTOR_FILE {
                continue;
            }

            if let Some(output_key) = relative_key.strip_suffix(TEMPLATE_SUFFIX) {
                let content = fs::read_to_string(source)?;
                let rendered = self.render_content(&relative_key, &content, context)?;
                files.insert(output_key.to_string(), rendered);
                debug!("Rendered: {}", output_key);
            } else {
                files.insert(relative_key.clone(), fs::read_to_string(source)?);
                debug!("Copied: {}", relative_key);
            }
        }

        Ok(files)
    }

    /// Substitute every `{{variable}}` placeholder in `content`.
    ///
    /// A placeholder naming a variable absent from the context is an error;
    /// leaving it in the output as literal text would produce a broken file.
    pub fn render_content(
        &self,
        file: &str,
        content: &str,
        context: &RenderContext,
    ) -> TemplateResult<String> {
        for caps in self.variable_pattern.captures_iter(content) {
            let variable = &caps[1];
            if !context.contains(variable) {
                return Err(TemplateError::UndefinedVariable {
                    file: file.to_string(),
                    variable: variable.to_string(),
                });
            }
        }

        Ok(self
            .variable_pattern
            .replace_all(content, |caps: &regex::Captures| {
                context.get(&caps[1]).unwrap_or_default().to_string()
            })
            .to_string())
    }
}

/// Slash-separated form of a relative path, independent of host separators.
fn slash_path(path: &Path) -> String {
    path.iter()
        .map(|c| c.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Convert to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap_or(c));
    }
    result.replace(['-', ' '], "_")
}

/// Convert to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fixture_registry(temp: &Path) -> TemplateRegistry {
        let root = temp.join("minimal");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(
            root.join(DESCRIPTOR_FILE),
            "name: minimal\ndescription: fixture",
        )
        .unwrap();
        fs::write(root.join("README.md.tmpl"), "# {{app_name}}\n").unwrap();
        fs::write(root.join("static.txt"), "unchanged {not a placeholder}\n").unwrap();
        fs::write(root.join("src/main.py.tmpl"), "print(\"{{app_name}}\")\n").unwrap();
        TemplateRegistry::new(temp)
    }

    #[test]
    fn test_render_content() {
        let renderer = TemplateRenderer::new(TemplateRegistry::new("templates"));
        let context = RenderContext::new()
            .with("name", "my-app")
            .with("version", "1.0.0");

        let rendered = renderer
            .render_content("x", "App: {{name}}, Version: {{version}}", &context)
            .unwrap();
        assert_eq!(rendered, "App: my-app, Version: 1.0.0");
    }

    #[test]
    fn test_render_content_undefined_variable() {
        let renderer = TemplateRenderer::new(TemplateRegistry::new("templates"));
        let context = RenderContext::new().with("name", "my-app");

        let err = renderer
            .render_content("README.md.tmpl", "{{name}} {{missing}}", &context)
            .unwrap_err();
        match err {
            TemplateError::UndefinedVariable { file, variable } => {
                assert_eq!(file, "README.md.tmpl");
                assert_eq!(variable, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_mirrors_tree_and_strips_suffix() {
        let temp = tempdir().unwrap();
        let renderer = TemplateRenderer::new(fixture_registry(temp.path()));
        let context = RenderContext::new().with("app_name", "demo");

        let files = renderer.render("minimal", &context).unwrap();
        let keys: Vec<_> = files.keys().cloned().collect();
        assert_eq!(keys, vec!["README.md", "src/main.py", "static.txt"]);
        assert_eq!(files["README.md"], "# demo\n");
        assert_eq!(files["src/main.py"], "print(\"demo\")\n");
        assert_eq!(files["static.txt"], "unchanged {not a placeholder}\n");
    }

    #[test]
    fn test_render_deterministic() {
        let temp = tempdir().unwrap();
        let renderer = TemplateRenderer::new(fixture_registry(temp.path()));
        let context = RenderContext::new().with("app_name", "demo");

        let first = renderer.render("minimal", &context).unwrap();
        let second = renderer.render("minimal", &context).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_unknown_template() {
        let temp = tempdir().unwrap();
        let renderer = TemplateRenderer::new(TemplateRegistry::new(temp.path()));
        let err = renderer
            .render("ghost", &RenderContext::new())
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[test]
    fn test_case_conversions() {
        assert_eq!(to_snake_case("MyApp"), "my_app");
        assert_eq!(to_snake_case("my-app"), "my_app");
        assert_eq!(to_pascal_case("my-app"), "MyApp");
        assert_eq!(to_pascal_case("my_app"), "MyApp");
    }
}
