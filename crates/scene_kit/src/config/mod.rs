//! Configuration system
//!
//! Config files are TOML or RON, chosen by extension. [`SceneKitConfig`] holds
//! the settings the rest of the crate reads: where save files live and the
//! default log filter.

use std::path::{Path, PathBuf};

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level settings for the crate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneKitConfig {
    /// Save file settings
    pub save: SaveConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config for SceneKitConfig {}

/// Save file settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Explicit save root; when unset a build-dependent default is used
    pub root: Option<PathBuf>,

    /// Whether saves replace existing files by default
    pub overwrite: bool,
}

/// Directory used when no platform data directory can be determined
pub const LOCAL_DATA_DIR: &str = "data";

impl SaveConfig {
    /// Directory that save files are written under.
    ///
    /// Debug builds keep saves next to the working directory so they are easy
    /// to inspect; release builds use the platform's per-user data directory.
    pub fn resolve_root(&self) -> PathBuf {
        if let Some(root) = &self.root {
            return root.clone();
        }
        if cfg!(debug_assertions) {
            return PathBuf::from(LOCAL_DATA_DIR);
        }
        platform_data_dir().unwrap_or_else(|| PathBuf::from(LOCAL_DATA_DIR))
    }
}

/// Per-user data directory for this crate's saves, if the platform has one
pub fn platform_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "scene-kit", "scene-kit")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
