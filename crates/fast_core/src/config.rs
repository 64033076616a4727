//! Fast-Engine configuration.
//!
//! Values come from an optional JSON file (`fast-engine.json` by default)
//! with environment variables taking precedence. The API keys are
//! placeholders for future provider calls; nothing in the scaffolding path
//! uses them for network access.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreResult;

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fast-engine.json";

const ENV_KEYS: [&str; 3] = ["OPENAI_API_KEY", "CLAUDE_API_KEY", "DEEPSEEK_API_KEY"];

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub claude_api_key: Option<String>,
    pub deepseek_api_key: Option<String>,
    pub templates_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            claude_api_key: None,
            deepseek_api_key: None,
            templates_path: PathBuf::from("templates"),
            output_path: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from the given JSON file merged with process
    /// environment variables (environment wins).
    pub fn load(path: impl AsRef<Path>) -> Config {
        let env: HashMap<String, String> = ENV_KEYS
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self::from_sources(path.as_ref(), &env)
    }

    /// Pure merge of file values and an environment map. Split out so tests
    /// never have to mutate process-wide environment state.
    pub fn from_sources(path: &Path, env: &HashMap<String, String>) -> Config {
        let mut config = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Config>(&content) {
                Ok(config) => {
                    debug!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Ignoring malformed config file {:?}: {}", path, e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        if let Some(value) = env.get("OPENAI_API_KEY") {
            config.openai_api_key = Some(value.clone());
        }
        if let Some(value) = env.get("CLAUDE_API_KEY") {
            config.claude_api_key = Some(value.clone());
        }
        if let Some(value) = env.get("DEEPSEEK_API_KEY") {
            config.deepseek_api_key = Some(value.clone());
        }

        config
    }

    /// Persist the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// True iff all three provider keys are configured.
    pub fn validate(&self) -> bool {
        self.openai_api_key.is_some()
            && self.claude_api_key.is_some()
            && self.deepseek_api_key.is_some()
    }
}
