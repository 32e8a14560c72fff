//! Init operation.
//!
//! Runs before any config exists, so it works on paths alone.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Create a config file from the template, relative to the current directory.
///
/// See [`init_in`].
pub fn init(target: Option<&Path>, force: bool) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    init_in(&cwd, target, force)
}

/// Create a config file from the template.
///
/// `target` may name a config file (`.heysops.yaml` / `.heysops.yml`) or an
/// existing directory to place `.heysops.yaml` in. Relative targets are taken
/// from `cwd`, which is also the default location.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` for any other target, or
/// `ConfigError::AlreadyExists` if the file exists and `force` is false.
pub fn init_in(cwd: &Path, target: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = config_path_for(cwd, target)?;

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    debug!(path = %path.display(), "creating configuration file");
    fs::write(&path, constants::CONFIG_TEMPLATE).map_err(ConfigError::WriteFile)?;
    info!("created {}", path.display());

    Ok(path)
}

fn config_path_for(cwd: &Path, target: Option<&Path>) -> Result<PathBuf> {
    let Some(target) = target else {
        return Ok(cwd.join(constants::CONFIG_FILE));
    };
    let target = cwd.join(target);

    let named_config = target
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| constants::CONFIG_FILES.contains(&n));

    if named_config {
        Ok(target)
    } else if target.is_dir() {
        Ok(target.join(constants::CONFIG_FILE))
    } else {
        Err(ConfigError::InvalidPath(target).into())
    }
}
