//! JSON save files
//!
//! A [`SaveStore`] maps a `(sub_path, name)` pair to
//! `<root>/<sub_path>/<name>.json`. Loading a file that does not exist yet
//! writes and returns the type's default value, so first runs need no setup.

pub mod record;

use crate::config::SaveConfig;
use crate::foundation::logging::warn_with_trace;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistence errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON encode/decode error
    #[error("JSON error at {path}: {source}")]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Value cannot be flattened into named fields
    #[error("Value is not a record: {0}")]
    NotARecord(String),

    /// Conversion to a JSON value failed
    #[error("Conversion error: {0}")]
    Convert(#[from] serde_json::Error),
}

/// Result alias for persistence operations
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Reads and writes pretty-printed JSON files under a root directory
#[derive(Debug, Clone)]
pub struct SaveStore {
    root: PathBuf,
    overwrite: bool,
}

impl SaveStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overwrite: false,
        }
    }

    /// Create a store rooted at the configured save directory, using the
    /// configured overwrite policy for [`SaveStore::save_default`]
    pub fn from_config(config: &SaveConfig) -> Self {
        Self::new(config.resolve_root()).with_overwrite(config.overwrite)
    }

    /// Builder: set the overwrite policy used by [`SaveStore::save_default`]
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Whether [`SaveStore::save_default`] replaces existing files
    pub fn overwrites(&self) -> bool {
        self.overwrite
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the save file for `sub_path` / `name`
    pub fn path_for(&self, sub_path: &str, name: &str) -> PathBuf {
        self.root.join(sub_path).join(format!("{name}.json"))
    }

    /// Write `data` as JSON.
    ///
    /// An existing file is only replaced when `overwrite` is set. Returns
    /// whether the file was written.
    pub fn save<T: Serialize + ?Sized>(&self, data: &T, sub_path: &str, name: &str, overwrite: bool) -> Result<bool> {
        let dir = self.root.join(sub_path);
        fs::create_dir_all(&dir).map_err(|source| PersistenceError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = self.path_for(sub_path, name);
        if path.exists() && !overwrite {
            debug!("Save file {} exists, leaving it untouched", path.display());
            return Ok(false);
        }

        info!("Saving data to {}", path.display());
        let json = serde_json::to_string_pretty(data).map_err(|source| PersistenceError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| PersistenceError::Io { path, source })?;
        Ok(true)
    }

    /// Write `data` as JSON using the store's overwrite policy.
    pub fn save_default<T: Serialize + ?Sized>(&self, data: &T, sub_path: &str, name: &str) -> Result<bool> {
        self.save(data, sub_path, name, self.overwrite)
    }

    /// Read `sub_path` / `name`, or create it from `T::default()` if missing.
    pub fn load<T>(&self, sub_path: &str, name: &str) -> Result<T>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let path = self.path_for(sub_path, name);
        if !path.exists() {
            warn_with_trace(&format!("No saved data found at {}", path.display()));
            let data = T::default();
            self.save(&data, sub_path, name, false)?;
            return Ok(data);
        }

        let contents = fs::read_to_string(&path).map_err(|source| PersistenceError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| PersistenceError::Json { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Progress {
        level: u32,
        coins: u64,
        unlocked: Vec<String>,
    }

    fn sample() -> Progress {
        Progress {
            level: 4,
            coins: 1250,
            unlocked: vec!["bow".to_string(), "lantern".to_string()],
        }
    }

    #[test]
    fn test_path_layout() {
        let store = SaveStore::new("/saves");
        assert_eq!(store.path_for("profiles", "slot1"), PathBuf::from("/saves/profiles/slot1.json"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path());

        assert!(store.save(&sample(), "profiles", "slot1", false).unwrap());
        let loaded: Progress = store.load("profiles", "slot1").unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path());
        store.save(&sample(), "", "pretty", false).unwrap();

        let text = fs::read_to_string(store.path_for("", "pretty")).unwrap();
        assert!(text.contains("\n  \"level\": 4"));
    }

    #[test]
    fn test_existing_file_kept_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path());

        store.save(&sample(), "profiles", "slot1", false).unwrap();
        let replacement = Progress::default();
        assert!(!store.save(&replacement, "profiles", "slot1", false).unwrap());
        assert_eq!(store.load::<Progress>("profiles", "slot1").unwrap(), sample());

        assert!(store.save(&replacement, "profiles", "slot1", true).unwrap());
        assert_eq!(store.load::<Progress>("profiles", "slot1").unwrap(), replacement);
    }

    #[test]
    fn test_missing_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path());

        let loaded: Progress = store.load("fresh", "slot9").unwrap();
        assert_eq!(loaded, Progress::default());
        assert!(store.path_for("fresh", "slot9").exists());
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path());
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let err = store.load::<Progress>("", "broken").unwrap_err();
        assert!(matches!(err, PersistenceError::Json { .. }));
    }

    #[test]
    fn test_from_config_uses_explicit_root() {
        let config = SaveConfig {
            root: Some(PathBuf::from("custom_root")),
            overwrite: false,
        };
        let store = SaveStore::from_config(&config);
        assert_eq!(store.root(), Path::new("custom_root"));
        assert!(!store.overwrites());
    }

    #[test]
    fn test_configured_overwrite_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SaveConfig {
            root: Some(dir.path().to_path_buf()),
            overwrite: true,
        };
        let store = SaveStore::from_config(&config);

        let first = Progress { level: 1, ..Progress::default() };
        let second = Progress { level: 2, ..Progress::default() };
        assert!(store.save_default(&first, "profiles", "slot1").unwrap());
        assert!(store.save_default(&second, "profiles", "slot1").unwrap());
        assert_eq!(store.load::<Progress>("profiles", "slot1").unwrap().level, 2);
    }

    #[test]
    fn test_default_policy_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path());

        let first = Progress { level: 1, ..Progress::default() };
        let second = Progress { level: 2, ..Progress::default() };
        assert!(store.save_default(&first, "profiles", "slot1").unwrap());
        assert!(!store.save_default(&second, "profiles", "slot1").unwrap());
        assert_eq!(store.load::<Progress>("profiles", "slot1").unwrap().level, 1);
    }

    #[test]
    fn test_load_never_overwrites_when_creating_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = SaveStore::new(dir.path()).with_overwrite(true);

        let loaded: Progress = store.load("fresh", "slot2").unwrap();
        assert_eq!(loaded, Progress::default());
        store.save(&sample(), "fresh", "slot2", true).unwrap();
        assert_eq!(store.load::<Progress>("fresh", "slot2").unwrap(), sample());
    }
}
