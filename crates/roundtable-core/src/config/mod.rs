//! Configuration module for Roundtable
//!
//! Handles loading and parsing of `.roundtable.toml` configuration files
//! with support for environment variable expansion.

mod loader;
mod types;

pub use loader::{load_config, load_from_file, require_api_key, sample_config, ConfigError};
pub use types::{BackupConfig, LlmConfig, ProviderKind, RoundtableConfig, ServerConfig};
