//! heysops - keep plaintext secrets and their sops-encrypted twins in sync.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create .heysops.yaml
//! │   ├── encrypt       # Encrypt and track files
//! │   ├── decrypt       # Restore plaintext
//! │   ├── forget        # Stop tracking files
//! │   ├── clean         # Encrypt everything, delete plaintext
//! │   ├── list          # Show tracked files
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .heysops.yaml registry
//!     ├── paths         # Upward discovery, config-relative paths
//!     ├── gitignore     # .gitignore synchronization
//!     ├── tool          # sops subprocess adapter
//!     └── project/      # Actions over a loaded project
//! ```
//!
//! Keys never pass through heysops; sops does the cryptography.

pub mod cli;
pub mod core;
pub mod error;
