//! Error types.
//!
//! A top-level [`Error`] wraps one enum per concern so callers can match on
//! the failure class (config, tool, action) without string inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for all heysops operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Config file discovery, parsing and persistence errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no .heysops.yaml or .heysops.yml found in {} or any parent directory", start.display())]
    NotFound { start: PathBuf },

    #[error("config file {} already exists (use -f to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("config path {} must be a directory or end with .heysops.yaml or .heysops.yml", .0.display())]
    InvalidPath(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] std::io::Error),
}

/// Errors from locating or running the external encryption tool.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("sops executable {executable} not usable: {reason}")]
    NotFound { executable: String, reason: String },

    #[error("failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {stderr}")]
    Execution { command: String, stderr: String },
}

/// Errors raised by the orchestration actions themselves.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("output file {} exists and will not be overwritten (use -f to overwrite)", .0.display())]
    OutputExists(PathBuf),

    #[error("cannot derive a decrypted file name for {0}: it does not end with .sops (use -o)")]
    NoDecryptedName(String),

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
