//! Core library components.
//!
//! Config registry, path resolution, `.gitignore` upkeep, the sops adapter,
//! and the actions built on top of them.

pub mod config;
pub mod constants;
pub mod gitignore;
pub mod paths;
pub mod project;
pub mod tool;
