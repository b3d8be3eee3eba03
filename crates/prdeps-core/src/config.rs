use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use prdeps_util::errors::PrdepsError;

/// User configuration loaded from `~/.prdeps/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub go: GoConfig,
}

/// Defaults for command-line options, from `[defaults]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Include standard-library packages.
    #[serde(default)]
    pub std: bool,
    /// Maximum recursion depth.
    #[serde(default)]
    pub depth: Option<usize>,
    /// Output template.
    #[serde(default)]
    pub format: Option<String>,
}

/// Settings for the `go list` resolver, from `[go]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoConfig {
    #[serde(default = "default_go_binary")]
    pub binary: String,
    /// Extra flags passed to `go list` before the import path.
    #[serde(default)]
    pub flags: Vec<String>,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            binary: default_go_binary(),
            flags: Vec::new(),
        }
    }
}

fn default_go_binary() -> String {
    "go".to_string()
}

impl UserConfig {
    /// Load the configuration from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, PrdepsError> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no user config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PrdepsError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content).map_err(|e| match e {
            PrdepsError::Config { message } => PrdepsError::Config {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Load the configuration from the default location.
    pub fn load() -> Result<Self, PrdepsError> {
        Self::load_from(&Self::default_path())
    }

    /// Parse a configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self, PrdepsError> {
        toml::from_str(content).map_err(|e| PrdepsError::Config {
            message: format!("Failed to parse config: {e}"),
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the home directory, falling back to the current directory.
pub fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

/// Returns the path to the prdeps data directory (`~/.prdeps/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".prdeps")
}
