//! Command-line interface.

pub mod clean;
pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod forget;
pub mod init;
pub mod list;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::SecretType;
use crate::core::project::{DecryptOptions, EncryptOptions, Project};
use crate::core::tool::Sops;
use crate::error::Result;

/// heysops - keep plaintext secrets and their sops-encrypted twins in sync.
#[derive(Parser)]
#[command(
    name = "heysops",
    about = "Track files that live both decrypted and sops-encrypted, and keep them git-safe",
    version,
    after_help = "FILE arguments are relative to the directory holding .heysops.yaml.\n\
                  Omit them, or pass a single '-', to act on every tracked file."
)]
pub struct Cli {
    /// Path to .heysops.yaml (default: search upward from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the sops executable (default: sops on PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub sops: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create .heysops.yaml in the current directory (or --folder / --config)
    Init {
        /// Folder to place .heysops.yaml in (overridden by --config)
        #[arg(long, value_name = "DIR")]
        folder: Option<PathBuf>,
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Encrypt files with sops and track them
    Encrypt {
        /// Format passed to sops as --input-type (default: recorded type, else by extension)
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<SecretType>,
        /// Encrypted file to write (single FILE only)
        #[arg(short, long)]
        output: Option<String>,
        /// Files to encrypt; '-' or none means all tracked files
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },

    /// Decrypt tracked files back to their plaintext paths
    Decrypt {
        /// Overwrite existing decrypted files
        #[arg(short, long)]
        force: bool,
        /// Format passed to sops as --output-type (default: recorded type)
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<SecretType>,
        /// Decrypted file to write (single FILE only)
        #[arg(short, long)]
        output: Option<String>,
        /// Encrypted or decrypted file names; '-' or none means all tracked files
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },

    /// Stop tracking files (leaves them on disk)
    Forget {
        /// Encrypted or decrypted file names to forget
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },

    /// Encrypt every tracked file, then delete the decrypted copies
    Clean,

    /// List tracked files
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every command that opens a project.
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub config: Option<PathBuf>,
    pub sops: Option<PathBuf>,
}

impl Globals {
    /// Load the project and resolve sops.
    pub fn open(&self) -> Result<Project<Sops>> {
        Project::open(self.config.as_deref(), self.sops.as_deref())
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let globals = Globals {
        config: cli.config,
        sops: cli.sops,
    };

    match cli.command {
        Init { folder, force } => init::execute(globals.config.or(folder), force),
        Encrypt {
            kind,
            output,
            files,
        } => encrypt::execute(&globals, EncryptOptions { files, kind, output }),
        Decrypt {
            force,
            kind,
            output,
            files,
        } => decrypt::execute(
            &globals,
            DecryptOptions {
                files,
                kind,
                output,
                force,
            },
        ),
        Forget { files } => forget::execute(&globals, &files),
        Clean => clean::execute(&globals),
        List { json } => list::execute(&globals, json),
        Completions { shell } => completions::execute(shell),
    }
}
