//! Decrypt command.

use crate::cli::{output, Globals};
use crate::core::project::DecryptOptions;
use crate::error::Result;

/// Decrypt files (or every tracked file) to their plaintext paths.
pub fn execute(globals: &Globals, opts: DecryptOptions) -> Result<()> {
    opts.validate()?;

    let project = globals.open()?;
    let decrypted = project.decrypt(&opts)?;

    if decrypted.is_empty() {
        output::dimmed("nothing to decrypt");
    }
    for entry in &decrypted {
        output::success(&format!(
            "decrypted {}",
            output::pair(&entry.encrypted_path, &entry.decrypted_path)
        ));
    }
    Ok(())
}
