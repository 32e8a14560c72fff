//! Path discovery and resolution.
//!
//! Config and ignore-file discovery share the same upward search, and every
//! path recorded in the config is resolved against the config file's own
//! directory rather than the process working directory.

use std::path::{Path, PathBuf};
use tracing::trace;

/// Search `start` and each of its ancestors for a file named one of `names`.
///
/// Within a directory, earlier names win. Stops after checking the
/// filesystem root.
pub fn find_upward(start: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut dir = start;

    loop {
        for name in names {
            let candidate = dir.join(name);
            trace!(path = %candidate.display(), "checking");
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return None,
        }
    }
}

/// Resolve `relative` against the directory containing `config_path`.
///
/// Absolute inputs are returned unchanged.
pub fn absolute(relative: impl AsRef<Path>, config_path: &Path) -> PathBuf {
    config_dir(config_path).join(relative)
}

/// Directory holding the config file.
pub fn config_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or_else(|| Path::new("."))
}

/// Make `path` absolute by joining it onto the current directory if needed.
pub fn make_absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Express `path` relative to the config directory when it lies beneath it.
pub fn relative_to_config(path: &Path, config_path: &Path) -> PathBuf {
    path.strip_prefix(config_dir(config_path))
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
