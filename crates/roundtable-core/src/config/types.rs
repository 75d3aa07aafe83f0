//! Configuration types for Roundtable
//!
//! Defines the structure of `.roundtable.toml` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundtableConfig {
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Backup utility configuration
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Completion service backing the discussion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic Messages API
    #[default]
    Anthropic,
    /// OpenAI (or compatible) chat completions API
    OpenAI,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAI => "openai",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::OpenAI => "OPENAI_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "claude-sonnet-4-20250514",
            ProviderKind::OpenAI => "gpt-4o",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "openai" => Ok(ProviderKind::OpenAI),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// LLM configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider to use (anthropic, openai)
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model override (provider default when unset)
    #[serde(default)]
    pub model: Option<String>,

    /// API key (supports ${ENV_VAR} syntax)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the API
    #[serde(default)]
    pub base_url: Option<String>,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Token budget per agent turn
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature per agent turn
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_timeout() -> u64 {
    120
}

fn default_max_tokens() -> u32 {
    400
}

fn default_temperature() -> f64 {
    0.8
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            api_key: None,
            base_url: None,
            timeout: default_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl LlmConfig {
    /// Model to request, falling back to the provider default
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.provider.default_model())
    }
}

/// HTTP server configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static` and for `/`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Backup utility configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory whose top-level entries are backed up
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Directory receiving `backup_<timestamp>` folders
    #[serde(default = "default_backup_root")]
    pub backup_root: PathBuf,

    /// Name patterns to skip (`*suffix` matches by suffix, anything else by substring)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_backup_root() -> PathBuf {
    PathBuf::from("./backups")
}

fn default_exclude() -> Vec<String> {
    ["venv", "backups", "__pycache__", ".git", "target", "*.pyc"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            backup_root: default_backup_root(),
            exclude: default_exclude(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RoundtableConfig = toml::from_str(
            r#"
[llm]
provider = "openai"

[server]
port = 9000
"#,
        )
        .unwrap();

        assert_eq!(config.llm.provider, ProviderKind::OpenAI);
        assert_eq!(config.llm.model(), "gpt-4o");
        assert_eq!(config.llm.max_tokens, 400);
        assert!((config.llm.temperature - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.backup.exclude.contains(&"venv".to_string()));
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Claude".parse::<ProviderKind>(), Ok(ProviderKind::Anthropic));
        assert_eq!("openai".parse::<ProviderKind>(), Ok(ProviderKind::OpenAI));
        assert!("bard".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_empty_model_falls_back() {
        let config = LlmConfig {
            model: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.model(), "claude-sonnet-4-20250514");
    }
}
