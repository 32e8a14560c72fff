//! External encryption tool adapter.
//!
//! heysops never touches key material. Encryption and decryption are
//! delegated to `sops`, invoked as a child process with an explicit argument
//! vector:
//!
//! ```text
//! sops [--input-type <type>]  -e <absolute-path>
//! sops [--output-type <type>] -d <absolute-path>
//! ```
//!
//! The payload comes back on stdout. A non-zero exit is a failure and its
//! stderr is surfaced in the error.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::core::config::SecretType;
use crate::core::constants;
use crate::error::{Result, ToolError};

/// Encryption backend used by the orchestration actions.
pub trait Tool {
    /// Encrypt the file at `input`, returning the ciphertext.
    fn encrypt(&self, input: &Path, kind: Option<SecretType>) -> Result<Vec<u8>>;

    /// Decrypt the file at `input`, returning the plaintext.
    fn decrypt(&self, input: &Path, kind: Option<SecretType>) -> Result<Vec<u8>>;
}

/// Which way a sops invocation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    fn flag(self) -> &'static str {
        match self {
            Self::Encrypt => "-e",
            Self::Decrypt => "-d",
        }
    }

    fn type_flag(self) -> &'static str {
        match self {
            Self::Encrypt => "--input-type",
            Self::Decrypt => "--output-type",
        }
    }
}

/// The `sops` CLI.
#[derive(Debug, Clone)]
pub struct Sops {
    executable: PathBuf,
}

impl Sops {
    /// Locate and validate the sops executable.
    ///
    /// A `hint` that exists on disk is used verbatim; otherwise `sops` is
    /// looked up on `PATH`. Either way `<exe> --version` must succeed.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` if no executable is found or the
    /// version check fails.
    pub fn resolve(hint: Option<&Path>) -> Result<Self> {
        let executable = match hint {
            Some(path) if path.exists() => path.to_path_buf(),
            _ => {
                if let Some(path) = hint {
                    debug!(hint = %path.display(), "sops hint does not exist, falling back to PATH");
                }
                which::which(constants::TOOL_NAME).map_err(|e| ToolError::NotFound {
                    executable: constants::TOOL_NAME.to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        let not_found = |reason: String| ToolError::NotFound {
            executable: executable.display().to_string(),
            reason,
        };

        let status = Command::new(&executable)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| not_found(e.to_string()))?;

        if !status.success() {
            return Err(not_found(format!("version check exited with {}", status)).into());
        }

        debug!(executable = %executable.display(), "using sops");
        Ok(Self { executable })
    }

    /// Use `executable` without validating it.
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Arguments for one invocation, excluding the executable.
    pub fn args(mode: Mode, input: &Path, kind: Option<SecretType>) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4);
        if let Some(kind) = kind {
            args.push(OsString::from(mode.type_flag()));
            args.push(OsString::from(kind.as_str()));
        }
        args.push(OsString::from(mode.flag()));
        args.push(input.as_os_str().to_owned());
        args
    }

    fn run(&self, mode: Mode, input: &Path, kind: Option<SecretType>) -> Result<Vec<u8>> {
        let args = Self::args(mode, input, kind);
        let command = self.describe(&args);
        debug!(%command, "running sops");

        let output = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ToolError::Execution { command, stderr }.into());
        }

        if !output.stderr.is_empty() {
            debug!(stderr = %String::from_utf8_lossy(&output.stderr).trim(), "sops stderr");
        }

        trace!(bytes = output.stdout.len(), "sops output");
        Ok(output.stdout)
    }

    fn describe(&self, args: &[OsString]) -> String {
        let mut parts = vec![self.executable.display().to_string()];
        parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

impl Tool for Sops {
    fn encrypt(&self, input: &Path, kind: Option<SecretType>) -> Result<Vec<u8>> {
        self.run(Mode::Encrypt, input, kind)
    }

    fn decrypt(&self, input: &Path, kind: Option<SecretType>) -> Result<Vec<u8>> {
        self.run(Mode::Decrypt, input, kind)
    }
}
