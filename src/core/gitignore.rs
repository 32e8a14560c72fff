//! `.gitignore` synchronization.
//!
//! Keeps exactly one line per tracked decrypted path in the project
//! ignore-file. Every other line is written back untouched and in order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::paths;
use crate::error::Result;

/// Search `start` and its ancestors for a `.gitignore`.
pub fn discover(start: &Path) -> Option<PathBuf> {
    paths::find_upward(start, &[constants::GITIGNORE_FILE])
}

/// Compute the new ignore-file contents.
///
/// Drops any line equal to `prior` (when it differs from `decrypted`), then
/// appends `decrypted` unless a line already equals it. Lines are compared
/// with surrounding whitespace trimmed and written back verbatim.
pub fn sync_contents(existing: &str, decrypted: &str, prior: Option<&str>) -> String {
    let prior = prior.filter(|p| *p != decrypted);

    let mut lines: Vec<&str> = existing
        .lines()
        .filter(|line| Some(line.trim()) != prior)
        .collect();

    if !lines.iter().any(|line| line.trim() == decrypted) {
        lines.push(decrypted);
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push_str(constants::LINE_ENDING);
    }
    out
}

/// Bring the ignore-file at `path` in line with `decrypted`.
///
/// A missing file is treated as empty and created by the write. Returns
/// whether the file changed.
pub fn sync(path: &Path, decrypted: &str, prior: Option<&str>) -> Result<bool> {
    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let updated = sync_contents(&existing, decrypted, prior);
    if updated == existing {
        debug!(path = %path.display(), decrypted, "gitignore already up to date");
        return Ok(false);
    }

    fs::write(path, updated)?;
    debug!(path = %path.display(), decrypted, ?prior, "gitignore updated");
    Ok(true)
}
