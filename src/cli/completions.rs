//! Completions command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Print the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut std::io::stdout())
}

fn write_script(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
    out.flush()?;
    Ok(())
}
