//! Clean command.

use crate::cli::{output, Globals};
use crate::error::Result;

/// Encrypt every tracked file, then delete the plaintext copies.
pub fn execute(globals: &Globals) -> Result<()> {
    let mut project = globals.open()?;
    let report = project.clean()?;

    for entry in &report.encrypted {
        output::success(&format!(
            "encrypted {}",
            output::pair(&entry.decrypted_path, &entry.encrypted_path)
        ));
    }
    for decrypted in &report.removed {
        output::success(&format!("removed {}", output::path(decrypted)));
    }
    if report.encrypted.is_empty() {
        output::dimmed("no tracked files");
    }
    Ok(())
}
