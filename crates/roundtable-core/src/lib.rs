//! Roundtable Core - Backend library for Roundtable
//!
//! This crate provides the UI-agnostic backend functionality:
//! - Discussion orchestrator (roles, prompts, history, sequencing, rendering)
//! - Completion clients (Anthropic, OpenAI)
//! - Configuration loading
//! - Project backups
//!
//! Any front end (CLI, HTTP) drives a discussion through [`Discussion`].
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐   question    ┌──────────────────┐  prompt   ┌────────────┐
//! │   Front end       │ ─────────────→│   Discussion     │ ─────────→│ Completion │
//! │ (CLI, HTTP)       │               │   (6 steps)      │           │  service   │
//! │                   │ ←─────────────│                  │ ←─────────│            │
//! └───────────────────┘   transcript  └──────────────────┘   text    └────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use roundtable_core::{build_client, load_config, Discussion, RoleRegistry, SamplingParams};
//!
//! let config = load_config(&std::env::current_dir()?)?;
//! let client = build_client(&config.llm)?;
//! let roles = RoleRegistry::standard();
//!
//! let transcript = Discussion::new(client.as_ref(), &roles)
//!     .with_sampling(SamplingParams::from(&config.llm))
//!     .run("How do I build a recommendation system?");
//! println!("{}", transcript.render(&roles));
//! ```

pub mod backup;
pub mod config;
pub mod discussion;
pub mod error;
pub mod llm;

pub use error::{Result, RoundtableError};

// Re-export config types
pub use config::{
    load_config, BackupConfig, LlmConfig, ProviderKind, RoundtableConfig, ServerConfig,
};

// Re-export LLM types
pub use llm::{build_client, CompletionClient, CompletionRequest, LlmError, SharedClient};

// Re-export discussion types
pub use discussion::{
    Discussion, Role, RoleId, RoleRegistry, SamplingParams, Stage, Step, Transcript, Turn,
};

// Re-export backup types
pub use backup::{make_backup, BackupReport};
