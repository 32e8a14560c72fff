//! Forget operation.
//!
//! Stops tracking files without touching them on disk.

use tracing::{info, warn};

use super::Project;
use crate::core::config::SecretEntry;
use crate::core::tool::Tool;
use crate::error::Result;

impl<T: Tool> Project<T> {
    /// Remove entries from the config by either of their paths.
    ///
    /// Unknown files are logged and skipped.
    ///
    /// # Returns
    ///
    /// The removed entries.
    pub fn forget(&mut self, files: &[String]) -> Result<Vec<SecretEntry>> {
        let mut forgotten = Vec::new();

        for file in files {
            let Some(entry) = self.config.find_entry(file).cloned() else {
                warn!("{} not found in configuration, no action taken", file);
                continue;
            };

            self.config.remove_entry(&entry.encrypted_path);
            self.dirty = true;
            info!("{} removed from the configuration", entry.encrypted_path);
            forgotten.push(entry);
        }

        self.save()?;
        Ok(forgotten)
    }
}
