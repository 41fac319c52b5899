//! Minimal key-value slots the preference store can sit on.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A string-valued key-value capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-process store. Used by tests and wherever nothing outlives the session.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// On-disk layout of [`JsonFileStore`].
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
struct PreferenceFile {
    #[serde(default)]
    values: HashMap<String, String>,
    /// Last write, milliseconds since epoch
    #[serde(default)]
    saved_at_ms: i64,
}

/// A JSON object file. Missing or unreadable files read as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    cached: PreferenceFile,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = match Self::read_file(&path) {
            Ok(file) => file,
            Err(e) => {
                if path.exists() {
                    log::warn!("Ignoring unreadable preference file: {:#}", e);
                }
                PreferenceFile::default()
            }
        };
        Self { path, cached }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Result<PreferenceFile> {
        let text = fs::read_to_string(path)
            .context(format!("Failed to read preference file: {}", path.display()))?;
        let file = serde_json::from_str(&text)
            .context(format!("Failed to parse preference file: {}", path.display()))?;
        Ok(file)
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.cached)?;
        fs::write(&self.path, text)
            .context(format!("Failed to write preference file: {}", self.path.display()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cached.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.cached.values.insert(key.to_string(), value);
        self.cached.saved_at_ms = chrono::Utc::now().timestamp_millis();
        self.write_file()
    }
}

/// eframe's own persistence slot (localStorage on web, the app-state file natively).
impl<'a> KeyValueStore for dyn eframe::Storage + 'a {
    fn get(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.set_string(key, value);
        Ok(())
    }
}
