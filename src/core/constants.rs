//! Constants used throughout heysops.
//!
//! Centralizes magic strings and configuration values.

/// Primary configuration file name, used when creating a config.
pub const CONFIG_FILE: &str = ".heysops.yaml";

/// Alternate configuration file name, accepted during discovery.
pub const CONFIG_FILE_ALT: &str = ".heysops.yml";

/// Recognized configuration file names, in discovery preference order.
pub const CONFIG_FILES: &[&str] = &[CONFIG_FILE, CONFIG_FILE_ALT];

/// Ignore-file name kept in sync with tracked plaintext paths.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Suffix appended to a plaintext path to derive its encrypted twin.
pub const ENCRYPTED_SUFFIX: &str = ".sops";

/// Bare executable name looked up on PATH when no hint is given.
pub const TOOL_NAME: &str = "sops";

/// Sentinel file argument meaning "every tracked file".
pub const ALL_FILES: &str = "-";

/// Platform line ending used when rewriting the ignore-file.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Contents of a freshly initialized config file.
pub const CONFIG_TEMPLATE: &str = "\
# heysops configuration. Entries are managed by `heysops encrypt` and `heysops forget`.
# Paths are relative to this file. Commit this file and the encrypted files;
# the decrypted files are added to .gitignore automatically.
secrets: []
project:
  gitignore_path: null
";
