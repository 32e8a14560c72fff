//! Init command - create .heysops.yaml.

use std::path::PathBuf;
use tracing::info;

use crate::cli::output;
use crate::core::project;
use crate::error::Result;

/// Create a config file at `target` (a config path or a folder) or in the
/// current directory.
pub fn execute(target: Option<PathBuf>, force: bool) -> Result<()> {
    let path = project::init(target.as_deref(), force)?;
    info!("initialized {}", path.display());

    output::success(&format!("created {}", output::path(&path.display().to_string())));
    output::dimmed("next: heysops encrypt FILE");
    Ok(())
}
