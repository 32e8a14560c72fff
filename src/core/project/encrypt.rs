//! Encrypt operations.
//!
//! Encrypts plaintext files with sops, records each pair in the config, and
//! keeps the plaintext path listed in `.gitignore`.

use tracing::{info, warn};

use super::{check_single_output, encrypted_name, is_all, write_output, Project};
use crate::core::config::{SecretEntry, SecretType};
use crate::core::tool::Tool;
use crate::error::Result;

/// Options for [`Project::encrypt`].
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    /// Files to encrypt. Empty or `-` means every tracked file.
    pub files: Vec<String>,
    /// Format hint, overriding the one recorded in the config.
    pub kind: Option<SecretType>,
    /// Ciphertext path. Only valid with a single file.
    pub output: Option<String>,
}

impl EncryptOptions {
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
    /// Encrypt files and track them.
    ///
    /// Tracked files whose plaintext has disappeared are dropped from the
    /// config and skipped.
    ///
    /// # Returns
    ///
    /// The entries that were encrypted, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first sops failure. Entries completed before it are still
    /// saved.
    pub fn encrypt(&mut self, opts: &EncryptOptions) -> Result<Vec<SecretEntry>> {
        let targets = if is_all(&opts.files) {
            self.config.decrypted_paths()
        } else {
            opts.files.clone()
        };

        let mut encrypted = Vec::with_capacity(targets.len());
        let outcome = self.encrypt_targets(&targets, opts, &mut encrypted);
        self.finish(outcome)?;
        Ok(encrypted)
    }

    fn encrypt_targets(
        &mut self,
        targets: &[String],
        opts: &EncryptOptions,
        encrypted: &mut Vec<SecretEntry>,
    ) -> Result<()> {
        for target in targets {
            if let Some(entry) = self.encrypt_file(target, opts.kind, opts.output.as_deref())? {
                encrypted.push(entry);
            }
        }
        Ok(())
    }

    /// Encrypt one file and record it.
    ///
    /// Output path: `output` if given, else the tracked encrypted path, else
    /// `<target>.sops`. Type: `kind` if given, else the tracked type.
    fn encrypt_file(
        &mut self,
        target: &str,
        kind: Option<SecretType>,
        output: Option<&str>,
    ) -> Result<Option<SecretEntry>> {
        let existing = self.config.find_entry(target).cloned();

        // Passing the ciphertext name still means "encrypt its plaintext".
        let decrypted = existing
            .as_ref()
            .map(|e| e.decrypted_path.clone())
            .unwrap_or_else(|| target.to_string());

        let encrypted = output
            .map(str::to_string)
            .or_else(|| existing.as_ref().map(|e| e.encrypted_path.clone()))
            .unwrap_or_else(|| encrypted_name(&decrypted));
        let kind = kind.or_else(|| existing.as_ref().and_then(|e| e.kind));

        let source = self.absolute(&decrypted);
        if !source.exists() {
            warn!("{} no longer present, removing from configuration", decrypted);
            if self.config.remove_entry(&decrypted).is_some() {
                self.dirty = true;
            }
            return Ok(None);
        }

        let ciphertext = self.tool.encrypt(&source, kind)?;

        write_output(&self.absolute(&encrypted), &ciphertext)?;

        info!(
            "encrypted {} to {} as {}",
            decrypted,
            encrypted,
            kind.map(|k| k.as_str()).unwrap_or("auto")
        );

        let entry = SecretEntry::new(decrypted, encrypted, kind);

        // Another entry may own the requested output path; that is a rename.
        let prior = existing.or_else(|| self.config.find_entry(&entry.encrypted_path).cloned());
        self.config.upsert_entry(entry.clone());
        self.dirty = true;

        let prior_decrypted = prior
            .map(|p| p.decrypted_path)
            .filter(|p| *p != entry.decrypted_path);
        self.sync_gitignore(&entry.decrypted_path, prior_decrypted.as_deref())?;

        Ok(Some(entry))
    }
}
