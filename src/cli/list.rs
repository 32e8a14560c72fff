//! List command.

use crate::cli::{output, Globals};
use crate::core::config::Config;
use crate::error::Result;

/// Show tracked pairs. Does not need sops.
pub fn execute(globals: &Globals, json: bool) -> Result<()> {
    let start = std::env::current_dir()?;
    let (config, _) = Config::load(globals.config.as_deref(), &start)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.secrets)?);
        return Ok(());
    }

    if config.secrets.is_empty() {
        output::dimmed("no tracked files");
        return Ok(());
    }

    for entry in &config.secrets {
        let kind = entry.kind.map(|k| k.as_str()).unwrap_or("auto");
        println!(
            "  {}  ({})",
            output::pair(&entry.decrypted_path, &entry.encrypted_path),
            kind
        );
    }
    Ok(())
}
