//! Configuration loader with environment variable expansion
//!
//! Loads configuration from `.roundtable.toml` in project root or user config directory.

use super::types::{LlmConfig, ProviderKind, RoundtableConfig};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Missing credentials: set {0} or llm.api_key")]
    MissingCredentials(String),
}

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.roundtable.toml`
/// 2. User-level `~/.config/roundtable/config.toml`
/// 3. Default configuration
///
/// Environment overrides are applied on top of whichever source was used.
pub fn load_config(project_dir: &Path) -> Result<RoundtableConfig, ConfigError> {
    let project_config = project_dir.join(".roundtable.toml");
    if project_config.exists() {
        return load_from_file(&project_config);
    }

    if let Some(user_config) = get_user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    apply_env_overrides(RoundtableConfig::default(), &process_env)
}

/// Get user config directory path
fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("roundtable").join("config.toml"))
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<RoundtableConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)?;
    let mut config: RoundtableConfig = toml::from_str(&content)?;

    expand_env_vars(&mut config, &process_env);

    apply_env_overrides(config, &process_env)
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

/// Expand ${VAR} patterns in string values
fn expand_env_vars(config: &mut RoundtableConfig, env: &dyn Fn(&str) -> Option<String>) {
    let llm = &mut config.llm;
    for value in [&mut llm.api_key, &mut llm.base_url, &mut llm.model] {
        if let Some(expanded) = value.as_deref().map(|s| expand_string(s, env)) {
            *value = Some(expanded);
        }
    }
}

/// Expand environment variables in a single string
///
/// Unknown variables are left in place so a missing key stays recognisable.
fn expand_string(s: &str, env: &dyn Fn(&str) -> Option<String>) -> String {
    env_var_pattern()
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Apply environment variable overrides for common settings
///
/// Supports direct environment variables:
/// - ROUNDTABLE_PROVIDER -> llm.provider
/// - ANTHROPIC_API_KEY / OPENAI_API_KEY -> llm.api_key (for the selected provider)
/// - ROUNDTABLE_MODEL -> llm.model
/// - HOST / PORT -> server.host / server.port
///
/// Switching provider drops the file's key, model and base URL, which
/// belong to the previous provider.
fn apply_env_overrides(
    mut config: RoundtableConfig,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<RoundtableConfig, ConfigError> {
    let non_empty = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(provider) = non_empty("ROUNDTABLE_PROVIDER") {
        let provider: ProviderKind =
            provider.parse().map_err(|message| ConfigError::InvalidValue {
                key: "ROUNDTABLE_PROVIDER".to_string(),
                message,
            })?;
        if provider != config.llm.provider {
            tracing::debug!(
                from = config.llm.provider.as_str(),
                to = provider.as_str(),
                "provider overridden, dropping file credentials"
            );
            config.llm.provider = provider;
            config.llm.api_key = None;
            config.llm.model = None;
            config.llm.base_url = None;
        }
    }

    if let Some(key) = non_empty(config.llm.provider.api_key_env()) {
        config.llm.api_key = Some(key);
    }

    if let Some(model) = non_empty("ROUNDTABLE_MODEL") {
        config.llm.model = Some(model);
    }

    if let Some(host) = non_empty("HOST") {
        config.server.host = host;
    }

    if let Some(port) = non_empty("PORT") {
        config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: format!("'{}' is not a port number", port),
        })?;
    }

    Ok(config)
}

/// Return the configured API key, or fail if none is usable
///
/// A key that still contains an unexpanded `${VAR}` counts as missing.
pub fn require_api_key(llm: &LlmConfig) -> Result<&str, ConfigError> {
    match llm.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() && !env_var_pattern().is_match(key) => Ok(key),
        _ => Err(ConfigError::MissingCredentials(
            llm.provider.api_key_env().to_string(),
        )),
    }
}

/// Create a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Roundtable Configuration
# Place this file in your project root as .roundtable.toml
# or in ~/.config/roundtable/config.toml for global settings

[llm]
# Completion provider: anthropic, openai
provider = "anthropic"
api_key = "${ANTHROPIC_API_KEY}"
model = "claude-sonnet-4-20250514"

# Transport timeout in seconds
timeout = 120

# Sampling parameters for every agent turn
max_tokens = 400
temperature = 0.8

[server]
host = "0.0.0.0"
port = 8000
static_dir = "static"

[backup]
project_dir = "."
backup_root = "./backups"
exclude = ["venv", "backups", "__pycache__", ".git", "target", "*.pyc"]
"#
}
