//! Forget command.

use crate::cli::{output, Globals};
use crate::error::Result;

/// Remove files from the config, leaving them on disk.
pub fn execute(globals: &Globals, files: &[String]) -> Result<()> {
    let mut project = globals.open()?;
    let forgotten = project.forget(files)?;

    for entry in &forgotten {
        output::success(&format!(
            "forgot {}",
            output::pair(&entry.decrypted_path, &entry.encrypted_path)
        ));
    }
    let missed = files.len().saturating_sub(forgotten.len());
    if missed > 0 {
        output::warn(&format!("{} file(s) were not tracked", missed));
    }
    Ok(())
}
