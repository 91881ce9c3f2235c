// ABOUTME: Config store for the single JSON file that persists the API key
// ABOUTME: Missing file reads as empty config; writes go through a temp file and an atomic rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 hevy-cli contributors

//! The config file lives at `~/.hevy/config.json` and holds at most one
//! meaningful field, `apiKey`. Other fields found in the file are carried
//! through `set_key` untouched. There is no locking: two processes writing
//! at once may race, the last rename wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hevy_core::constants::config_file;
use hevy_core::{HevyError, HevyResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Persisted configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Persisted credential
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Fields this version does not know about, preserved on write
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads and writes the config file at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<home>/.hevy/config.json`
    ///
    /// # Errors
    ///
    /// Returns `HomeDirUnavailable` if the home directory cannot be determined
    pub fn default_location() -> HevyResult<Self> {
        let home = dirs::home_dir().ok_or(HevyError::HomeDirUnavailable)?;
        Ok(Self::new(
            home.join(config_file::DIR_NAME).join(config_file::FILE_NAME),
        ))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted config; a missing file is an empty config
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn read(&self) -> HevyResult<Config> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "config file not found, using empty config");
                return Ok(Config::default());
            }
            Err(e) => return Err(HevyError::config_io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&contents).map_err(|source| HevyError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the config file with `config` as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn write(&self, config: &Config) -> HevyResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| HevyError::config_io(parent, e))?;
        }

        let mut body = serde_json::to_string_pretty(config)?;
        body.push('\n');

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, body).map_err(|e| HevyError::config_io(&tmp_path, e))?;
        restrict_permissions(&tmp_path)?;
        fs::rename(&tmp_path, &self.path).map_err(|e| HevyError::config_io(&self.path, e))?;

        debug!(path = %self.path.display(), "config written");
        Ok(())
    }

    /// Persist `key`, keeping any other fields already in the file
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or the new one cannot be written
    pub fn set_key(&self, key: &str) -> HevyResult<Config> {
        let mut config = self.read()?;
        config.api_key = Some(key.to_owned());
        self.write(&config)?;
        Ok(config)
    }

    /// Replace the file with an empty config
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn clear(&self) -> HevyResult<()> {
        self.write(&Config::default())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> HevyResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| HevyError::config_io(path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> HevyResult<()> {
    Ok(())
}
