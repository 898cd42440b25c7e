use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::registries::npm::DEFAULT_BASE_URL;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Timeout for registry requests in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default depth recorded in the configuration
pub const DEFAULT_MAX_DEPTH: u32 = 1;

/// Keys written to the example configuration
const EXAMPLE_KEYS: [&str; 7] = [
    "package_name",
    "repository_url",
    "test_repo_mode",
    "output_image",
    "ascii_tree_output",
    "max_depth",
    "filter_substring",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Analyzer configuration read from `config.json`
///
/// Only `package_name`, `registry_url` and `timeout_ms` affect analysis.
/// The remaining keys are carried so they can be shown back to the user.
/// Defaults fill in absent keys, but only keys listed in `displayed_keys`
/// are shown.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub test_repo_mode: Option<String>,
    pub output_image: Option<String>,
    pub ascii_tree_output: bool,
    pub max_depth: u32,
    pub filter_substring: String,
    pub registry_url: String,
    pub timeout_ms: u64,
    /// Keys this tool does not know about, in file order
    #[serde(flatten)]
    pub unknown_fields: IndexMap<String, serde_json::Value>,
    /// Keys present in the file or set by an override, in that order
    #[serde(skip)]
    pub displayed_keys: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            package_name: None,
            repository_url: None,
            test_repo_mode: None,
            output_image: None,
            ascii_tree_output: false,
            max_depth: DEFAULT_MAX_DEPTH,
            filter_substring: String::new(),
            registry_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            unknown_fields: IndexMap::new(),
            displayed_keys: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Configuration written out as a starting point when none exists
    pub fn example() -> Self {
        Self {
            package_name: Some("express".to_string()),
            repository_url: Some("https://github.com/expressjs/express".to_string()),
            test_repo_mode: Some("remote".to_string()),
            output_image: Some("dependencies.png".to_string()),
            ascii_tree_output: true,
            displayed_keys: EXAMPLE_KEYS.iter().map(|key| key.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Mark `key` as set so it shows up in [`entries`](Self::entries)
    pub fn mark_displayed(&mut self, key: &str) {
        if !self.displayed_keys.iter().any(|displayed| displayed == key) {
            self.displayed_keys.push(key.to_string());
        }
    }

    /// Key/value pairs for the displayed keys, in display order
    pub fn entries(&self) -> Vec<(String, String)> {
        self.displayed_keys
            .iter()
            .filter_map(|key| self.display_value(key).map(|value| (key.clone(), value)))
            .collect()
    }

    fn display_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "package_name" => self.package_name.clone().unwrap_or_default(),
            "repository_url" => self.repository_url.clone().unwrap_or_default(),
            "test_repo_mode" => self.test_repo_mode.clone().unwrap_or_default(),
            "output_image" => self.output_image.clone().unwrap_or_default(),
            "ascii_tree_output" => self.ascii_tree_output.to_string(),
            "max_depth" => self.max_depth.to_string(),
            "filter_substring" => self.filter_substring.clone(),
            "registry_url" => self.registry_url.clone(),
            "timeout_ms" => self.timeout_ms.to_string(),
            other => match self.unknown_fields.get(other)? {
                serde_json::Value::String(s) => s.clone(),
                value => value.to_string(),
            },
        };

        Some(value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.registry_url).map_err(|e| {
            ConfigError::Invalid(format!("registry_url '{}': {}", self.registry_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "registry_url '{}' must use http or https",
                self.registry_url
            )));
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load and validate the configuration at `path`
pub fn load(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let config = read(path)?;
    config.validate()?;
    Ok(config)
}

/// Read the configuration at `path` without validating it
///
/// Callers that apply overrides on top should call
/// [`AnalyzerConfig::validate`] afterwards.
pub fn read(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut config: AnalyzerConfig = serde_json::from_str(&content).map_err(parse_error)?;
    let present: IndexMap<String, IgnoredAny> =
        serde_json::from_str(&content).map_err(parse_error)?;
    config.displayed_keys = present.into_keys().collect();

    for key in config.unknown_fields.keys() {
        warn!("Unknown configuration key '{}' in {}", key, path.display());
    }

    Ok(config)
}

/// Returns the path to the data directory for npm-deps.
/// Uses $XDG_DATA_HOME/npm-deps if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/npm-deps,
/// or ./npm-deps if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("npm-deps.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("npm-deps")
}
