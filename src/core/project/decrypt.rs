//! Decrypt operations.
//!
//! Writes plaintext back next to the ciphertext. The config is read but
//! never modified.

use tracing::info;

use super::{check_single_output, decrypted_name, is_all, write_output, Project};
use crate::core::config::{SecretEntry, SecretType};
use crate::core::tool::Tool;
use crate::error::{ActionError, Result};

/// Options for [`Project::decrypt`].
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    /// Files to decrypt, by either path. Empty or `-` means every tracked file.
    pub files: Vec<String>,
    /// Format hint, overriding the one recorded in the config.
    pub kind: Option<SecretType>,
    /// Plaintext path. Only valid with a single file.
    pub output: Option<String>,
    /// Overwrite existing plaintext files.
    pub force: bool,
}

impl DecryptOptions {
    /// Reject option combinations that make no sense.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Usage` if `output` is set without exactly one file.
    pub fn validate(&self) -> Result<()> {
        check_single_output(&self.files, self.output.as_deref())
    }
}

impl<T: Tool> Project<T> {
    /// Decrypt files to their plaintext paths.
    ///
    /// # Returns
    ///
    /// The pairs that were decrypted, in order.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::OutputExists` if a plaintext file is already
    /// present and `force` is not set, or the sops error for the first file
    /// that fails.
    pub fn decrypt(&self, opts: &DecryptOptions) -> Result<Vec<SecretEntry>> {
        let targets = if is_all(&opts.files) {
            self.config.encrypted_paths()
        } else {
            opts.files.clone()
        };

        targets
            .iter()
            .map(|target| self.decrypt_file(target, opts))
            .collect()
    }

    /// Decrypt one file.
    ///
    /// Output path: `opts.output` if given, else the tracked decrypted path,
    /// else the target with `.sops` stripped.
    fn decrypt_file(&self, target: &str, opts: &DecryptOptions) -> Result<SecretEntry> {
        let existing = self.config.find_entry(target);

        let encrypted = existing
            .map(|e| e.encrypted_path.clone())
            .unwrap_or_else(|| target.to_string());

        let decrypted = match (&opts.output, existing) {
            (Some(output), _) => output.clone(),
            (None, Some(entry)) => entry.decrypted_path.clone(),
            (None, None) => decrypted_name(&encrypted)
                .ok_or_else(|| ActionError::NoDecryptedName(encrypted.clone()))?,
        };
        let kind = opts.kind.or_else(|| existing.and_then(|e| e.kind));

        let dest = self.absolute(&decrypted);
        if !opts.force && dest.exists() {
            return Err(ActionError::OutputExists(dest).into());
        }

        let plaintext = self.tool.decrypt(&self.absolute(&encrypted), kind)?;
        write_output(&dest, &plaintext)?;

        info!(
            "decrypted {} to {} as {}",
            encrypted,
            decrypted,
            kind.map(|k| k.as_str()).unwrap_or("auto")
        );

        Ok(SecretEntry::new(decrypted, encrypted, kind))
    }
}
