//! Configuration file management.
//!
//! Handles discovering, reading, and writing `.heysops.yaml` files, and the
//! registry of tracked plaintext/ciphertext pairs they hold.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::paths;
use crate::error::{ConfigError, Result};

/// Format hint handed to sops via `--input-type` / `--output-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    Json,
    Yaml,
    Dotenv,
    Binary,
}

impl SecretType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Dotenv => "dotenv",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked file pair. Paths are relative to the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    pub decrypted_path: String,
    pub encrypted_path: String,
    /// `None` lets sops infer the format from the file extension.
    #[serde(rename = "type", default)]
    pub kind: Option<SecretType>,
}

impl SecretEntry {
    pub fn new(
        decrypted_path: impl Into<String>,
        encrypted_path: impl Into<String>,
        kind: Option<SecretType>,
    ) -> Self {
        Self {
            decrypted_path: decrypted_path.into(),
            encrypted_path: encrypted_path.into(),
            kind,
        }
    }

    /// Whether `key` names either side of this pair.
    pub fn matches(&self, key: &str) -> bool {
        self.decrypted_path == key || self.encrypted_path == key
    }
}

/// The `project` section of the config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Cached ignore-file location, relative to the config file or absolute.
    #[serde(default)]
    pub gitignore_path: Option<String>,
}

/// Project configuration stored in `.heysops.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracked pairs, in insertion order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub secrets: Vec<SecretEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: ProjectSettings,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Locate the config file.
    ///
    /// An explicit path that exists is used as-is; otherwise `start` and its
    /// ancestors are searched for `.heysops.yaml` then `.heysops.yml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn locate(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if path.is_file() {
                return Ok(paths::make_absolute(path)?);
            }
            debug!(path = %path.display(), "explicit config missing, searching upward");
        }

        let found = paths::find_upward(start, constants::CONFIG_FILES).ok_or_else(|| {
            ConfigError::NotFound {
                start: start.to_path_buf(),
            }
        })?;
        Ok(paths::make_absolute(&found)?)
    }

    /// Locate and parse the config file, returning it with its absolute path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config exists, or
    /// `ConfigError::Parse` if the YAML is malformed.
    pub fn load(explicit: Option<&Path>, start: &Path) -> Result<(Self, PathBuf)> {
        let path = Self::locate(explicit, start)?;
        debug!(path = %path.display(), "loading config");

        let raw = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&raw)?;

        debug!(secrets = config.secrets.len(), "config loaded");
        Ok((config, path))
    }

    /// Deserialize a config document. An empty document is an empty config.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(raw).map_err(ConfigError::Parse)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value).map_err(ConfigError::Parse)?)
    }

    /// Write the whole document to `path`.
    ///
    /// The new contents go to a sibling temp file which is then renamed over
    /// the target, so an interrupted write leaves the old file intact.
    pub fn flush(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), secrets = self.secrets.len(), "saving config");

        let contents = serde_yaml::to_string(self).map_err(ConfigError::Serialize)?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, contents).map_err(ConfigError::WriteFile)?;
        fs::rename(&tmp, path).map_err(ConfigError::WriteFile)?;
        Ok(())
    }

    /// Find the entry whose decrypted or encrypted path equals `key`.
    pub fn find_entry(&self, key: &str) -> Option<&SecretEntry> {
        self.secrets.iter().find(|e| e.matches(key))
    }

    /// Insert `entry`, replacing in place any entry it collides with.
    ///
    /// An entry sharing `decrypted_path` is overwritten at its position. An
    /// entry sharing only `encrypted_path` is overwritten instead, so neither
    /// path is ever tracked twice; if both exist as separate entries the
    /// encrypted-path one is dropped. Otherwise the entry is appended.
    ///
    /// Returns the entry that was replaced, if any.
    pub fn upsert_entry(&mut self, entry: SecretEntry) -> Option<SecretEntry> {
        let by_decrypted = self
            .secrets
            .iter()
            .position(|e| e.decrypted_path == entry.decrypted_path);
        let by_encrypted = self
            .secrets
            .iter()
            .position(|e| e.encrypted_path == entry.encrypted_path);

        match (by_decrypted, by_encrypted) {
            (Some(d), Some(e)) if d != e => {
                let previous = std::mem::replace(&mut self.secrets[d], entry);
                self.secrets.remove(e);
                Some(previous)
            }
            (Some(idx), _) | (None, Some(idx)) => {
                Some(std::mem::replace(&mut self.secrets[idx], entry))
            }
            (None, None) => {
                self.secrets.push(entry);
                None
            }
        }
    }

    /// Remove the first entry matching `key` on either path. Absent is a no-op.
    pub fn remove_entry(&mut self, key: &str) -> Option<SecretEntry> {
        let idx = self.secrets.iter().position(|e| e.matches(key))?;
        Some(self.secrets.remove(idx))
    }

    /// Decrypted paths of every tracked entry, in order.
    pub fn decrypted_paths(&self) -> Vec<String> {
        self.secrets
            .iter()
            .map(|e| e.decrypted_path.clone())
            .collect()
    }

    /// Encrypted paths of every tracked entry, in order.
    pub fn encrypted_paths(&self) -> Vec<String> {
        self.secrets
            .iter()
            .map(|e| e.encrypted_path.clone())
            .collect()
    }
}
