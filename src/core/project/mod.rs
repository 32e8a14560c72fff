//! The primary interface for heysops operations.
//!
//! A [`Project`] owns the loaded config, the path it came from, and the
//! encryption tool for the duration of one command. Actions mutate the
//! in-memory config and it is written back once, when the action finishes.

mod clean;
mod decrypt;
mod encrypt;
mod forget;
mod init;

pub use clean::CleanReport;
pub use decrypt::DecryptOptions;
pub use encrypt::EncryptOptions;
pub use init::{init, init_in};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::gitignore;
use crate::core::paths;
use crate::core::tool::{Sops, Tool};
use crate::error::{ActionError, Result};

/// A loaded heysops project.
#[derive(Debug)]
pub struct Project<T> {
    config: Config,
    config_path: PathBuf,
    start_dir: PathBuf,
    tool: T,
    dirty: bool,
}

impl Project<Sops> {
    /// Open the project containing the current directory.
    ///
    /// Loads the config (explicit path or upward search), then resolves sops.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config is found, or
    /// `ToolError::NotFound` if sops cannot be run. The tool is only resolved
    /// once the config is known to exist.
    pub fn open(config: Option<&Path>, sops: Option<&Path>) -> Result<Self> {
        let start = std::env::current_dir()?;
        let (config, config_path) = Config::load(config, &start)?;
        let tool = Sops::resolve(sops)?;
        Ok(Self::new(config, config_path, start, tool))
    }
}

impl<T: Tool> Project<T> {
    /// Load the project visible from `start` using an already-built tool.
    pub fn open_in(start: &Path, config: Option<&Path>, tool: T) -> Result<Self> {
        let (config, config_path) = Config::load(config, start)?;
        Ok(Self::new(config, config_path, start.to_path_buf(), tool))
    }

    /// Assemble a project from parts. `config_path` should be absolute.
    pub fn new(config: Config, config_path: PathBuf, start_dir: PathBuf, tool: T) -> Self {
        Self {
            config,
            config_path,
            start_dir,
            tool,
            dirty: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Resolve a config-relative path.
    pub fn absolute(&self, relative: impl AsRef<Path>) -> PathBuf {
        paths::absolute(relative, &self.config_path)
    }

    /// Write the config if anything changed since the last write.
    pub fn save(&mut self) -> Result<()> {
        if self.dirty {
            self.config.flush(&self.config_path)?;
            self.dirty = false;
        }
        Ok(())
    }

    /// Persist whatever completed, then hand back the action's outcome.
    ///
    /// On failure the entries finished before the error are still written,
    /// so the config never lags behind ciphertext already on disk.
    fn finish<R>(&mut self, outcome: Result<R>) -> Result<R> {
        match outcome {
            Ok(value) => {
                self.save()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(save_err) = self.save() {
                    warn!("failed to save partial progress: {}", save_err);
                }
                Err(e)
            }
        }
    }

    /// Location of the ignore-file, discovering and caching it on first use.
    ///
    /// Without a cached path, the nearest `.gitignore` above the start
    /// directory is used, or one next to the config file if none exists.
    /// The choice is written to the config immediately.
    fn gitignore_path(&mut self) -> Result<PathBuf> {
        if let Some(cached) = &self.config.project.gitignore_path {
            return Ok(self.absolute(cached));
        }

        let config_dir = paths::config_dir(&self.config_path);
        let path = match gitignore::discover(&self.start_dir) {
            Some(found) => {
                let found = paths::make_absolute(&found)?;
                if found.parent() != Some(config_dir) {
                    warn!(
                        "using {}, but tracked paths are relative to {}; entries may not match",
                        found.display(),
                        config_dir.display()
                    );
                }
                found
            }
            None => {
                let created = config_dir.join(constants::GITIGNORE_FILE);
                warn!(
                    ".gitignore not found, creating {} alongside {}",
                    created.display(),
                    self.config_path.display()
                );
                created
            }
        };

        let recorded = paths::relative_to_config(&path, &self.config_path);
        debug!(path = %recorded.display(), "caching gitignore location");
        self.config.project.gitignore_path = Some(recorded.to_string_lossy().into_owned());
        self.dirty = true;
        self.save()?;

        Ok(path)
    }

    /// Make sure `decrypted` is ignored, dropping the line for `prior`.
    fn sync_gitignore(&mut self, decrypted: &str, prior: Option<&str>) -> Result<()> {
        let path = self.gitignore_path()?;
        gitignore::sync(&path, decrypted, prior)?;
        Ok(())
    }
}

/// Whether a file argument list means "every tracked file".
pub fn is_all(files: &[String]) -> bool {
    files.is_empty() || (files.len() == 1 && files[0] == constants::ALL_FILES)
}

/// Ciphertext name derived from a plaintext name.
pub fn encrypted_name(decrypted: &str) -> String {
    format!("{}{}", decrypted, constants::ENCRYPTED_SUFFIX)
}

/// Plaintext name derived from a ciphertext name, if it carries the suffix.
pub fn decrypted_name(encrypted: &str) -> Option<String> {
    encrypted
        .strip_suffix(constants::ENCRYPTED_SUFFIX)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Write an encrypt/decrypt result, creating missing parent directories.
fn write_output(dest: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| ActionError::WriteFile {
        path: dest.to_path_buf(),
        source,
    };
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(dest, contents).map_err(write_err)?;
    Ok(())
}

/// Reject an output override unless exactly one explicit file is given.
fn check_single_output(files: &[String], output: Option<&str>) -> Result<()> {
    if output.is_some() && (is_all(files) || files.len() != 1) {
        return Err(ActionError::Usage(
            "--output can only be used with a single file".to_string(),
        )
        .into());
    }
    Ok(())
}
