//! Clean operation.
//!
//! Re-encrypts every tracked file, then deletes the plaintext. Nothing is
//! deleted unless the whole encrypt pass succeeded and was saved.

use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info};

use super::{EncryptOptions, Project};
use crate::core::config::SecretEntry;
use crate::core::tool::Tool;
use crate::error::Result;

/// What [`Project::clean`] did.
#[derive(Debug, Default)]
pub struct CleanReport {
    pub encrypted: Vec<SecretEntry>,
    /// Decrypted paths that were deleted.
    pub removed: Vec<String>,
}

impl<T: Tool> Project<T> {
    /// Encrypt all tracked files, then remove their plaintext.
    ///
    /// # Errors
    ///
    /// Returns the encrypt error before any file is deleted, or the first
    /// deletion failure.
    pub fn clean(&mut self) -> Result<CleanReport> {
        let encrypted = self.encrypt(&EncryptOptions::default())?;

        let mut removed = Vec::new();
        for decrypted in self.config.decrypted_paths() {
            let path = self.absolute(&decrypted);
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("removed {}", decrypted);
                    removed.push(decrypted);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "already gone");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(CleanReport { encrypted, removed })
    }
}
