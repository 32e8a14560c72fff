//! Encrypt command.

use crate::cli::{output, Globals};
use crate::core::project::EncryptOptions;
use crate::error::Result;

/// Encrypt files (or every tracked file) and record them.
pub fn execute(globals: &Globals, opts: EncryptOptions) -> Result<()> {
    opts.validate()?;

    let mut project = globals.open()?;
    let encrypted = project.encrypt(&opts)?;

    if encrypted.is_empty() {
        output::dimmed("nothing to encrypt");
    }
    for entry in &encrypted {
        output::success(&format!(
            "encrypted {}",
            output::pair(&entry.decrypted_path, &entry.encrypted_path)
        ));
    }
    Ok(())
}
