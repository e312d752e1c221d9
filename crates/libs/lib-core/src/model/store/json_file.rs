//! # JSON File Settings Store
//!
//! Persists the resolved configuration as pretty-printed JSON:
//!
//! ```json
//! {
//!   "updated_at": "2024-01-01T00:00:00Z",
//!   "settings": {
//!     "slippage": "0.5",
//!     "priority_fee_in_sol": "0",
//!     "use_versioned_transaction": true,
//!     "token_list_mode": "strict"
//!   }
//! }
//! ```
//!
//! Writes go to a sibling `.tmp` file that is renamed over the target, so a reader
//! never observes a half-written configuration.

use super::SettingsStore;
use crate::error::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::dto::ResolvedConfiguration;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// On-disk record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSettings {
    updated_at: DateTime<Utc>,
    settings: ResolvedConfiguration,
}

/// Settings store backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at [`Config::settings_path`](crate::config::Config::settings_path).
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.settings_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last save, if the file exists.
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.read_record()?.map(|record| record.updated_at))
    }

    fn read_record(&self) -> Result<Option<StoredSettings>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: StoredSettings = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn snapshot(&self) -> Result<Option<ResolvedConfiguration>> {
        let record = self.read_record()?;
        if record.is_none() {
            tracing::debug!("No settings file at {:?}", self.path);
        }
        Ok(record.map(|record| record.settings))
    }

    fn save(&self, config: &ResolvedConfiguration) -> Result<()> {
        let _guard = self.write_lock.lock();

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let record = StoredSettings {
            updated_at: Utc::now(),
            settings: config.clone(),
        };
        let content = serde_json::to_string_pretty(&record)
            .map_err(|e| crate::error::AppError::Encoding(e.to_string()))?;

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("Saved swap settings to {:?}", self.path);
        Ok(())
    }
}
