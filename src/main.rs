//! heysops - keep plaintext secrets and their sops-encrypted twins in sync.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use heysops::cli::output;
use heysops::cli::{execute, Cli};
use heysops::error::{ConfigError, Error, ToolError};

fn main() {
    let cli = Cli::parse();

    // HEYSOPS_LOG wins over --verbose
    let filter = EnvFilter::try_from_env("HEYSOPS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("heysops=debug")
        } else {
            EnvFilter::new("heysops=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound { .. }) => Some("run: heysops init"),
            Error::Tool(ToolError::NotFound { .. }) => {
                Some("install sops (https://github.com/getsops/sops) or pass --sops PATH")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
