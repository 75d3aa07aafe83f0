//! Multi-agent discussion
//!
//! A Project Manager, an AI Architect and a Domain Expert talk through a
//! question in a fixed order:
//! - PM opens and splits the question
//! - Architect and Expert give their initial takes
//! - Architect answers the Expert, Expert answers the Architect
//! - PM synthesizes
//!
//! # Example
//!
//! ```no_run
//! use roundtable_core::discussion::{Discussion, RoleRegistry};
//! use roundtable_core::llm::AnthropicClient;
//!
//! let client = AnthropicClient::new("sk-ant-...", "claude-sonnet-4-20250514");
//! let roles = RoleRegistry::standard();
//!
//! let text = Discussion::new(&client, &roles)
//!     .run_rendered("How do I build a recommendation system?");
//! println!("{}", text);
//! ```

mod history;
mod prompts;
mod render;
mod roles;
mod sequencer;
mod types;

pub use history::{format_history, History, HISTORY_WINDOW};
pub use prompts::{build_prompt, directive, system_prompt};
pub use render::{render_transcript, turn_header, RULE_WIDTH};
pub use roles::{Role, RoleId, RoleRegistry};
pub use sequencer::{Discussion, SamplingParams};
pub use types::{Stage, Step, Transcript, Turn};
