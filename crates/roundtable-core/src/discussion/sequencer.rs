//! Run sequencer
//!
//! Walks the step script once per question. Each step waits for its
//! completion before the next prompt is built, since that prompt embeds the
//! answer.

use super::history::History;
use super::prompts::{build_prompt, system_prompt};
use super::roles::RoleRegistry;
use super::types::{Step, Transcript, Turn};
use crate::config::LlmConfig;
use crate::llm::{completion_text, CompletionClient, CompletionRequest};

/// Sampling parameters shared by every turn of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_tokens: 400,
            temperature: 0.8,
        }
    }
}

impl From<&LlmConfig> for SamplingParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// One discussion over a fixed team and completion client
pub struct Discussion<'a> {
    client: &'a dyn CompletionClient,
    roles: &'a RoleRegistry,
    sampling: SamplingParams,
}

impl<'a> Discussion<'a> {
    pub fn new(client: &'a dyn CompletionClient, roles: &'a RoleRegistry) -> Self {
        Self {
            client,
            roles,
            sampling: SamplingParams::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// Run a single step against the history accumulated so far
    pub fn step(&self, step: Step, question: &str, history: &History) -> Turn {
        let role = self.roles.get(step.role());
        let request = CompletionRequest {
            system: system_prompt(role),
            prompt: build_prompt(step, question, history),
            max_tokens: self.sampling.max_tokens,
            temperature: self.sampling.temperature,
        };

        tracing::debug!(?step, prompt_len = request.prompt.len(), "requesting completion");
        let content = completion_text(self.client, &request);
        tracing::info!(
            role = %step.role(),
            stage = %step.stage(),
            chars = content.len(),
            "turn complete"
        );

        Turn::new(step.role(), step.stage(), content)
    }

    /// Run the whole script
    ///
    /// Always yields one turn per step; failed calls show up as
    /// `Error: ...` content instead of aborting the run.
    pub fn run(&self, question: &str) -> Transcript {
        let run_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("discussion", %run_id);
        let _enter = span.enter();
        tracing::info!(
            provider = self.client.id(),
            model = self.client.model(),
            "discussion started"
        );

        let mut history = History::new();
        let mut turns = Vec::with_capacity(Step::COUNT);

        for step in Step::sequence() {
            let turn = self.step(step, question, &history);
            history.record(&turn);
            turns.push(turn);
        }

        tracing::info!(turns = turns.len(), "discussion finished");
        Transcript::new(turns)
    }

    /// Run the script and render the transcript text
    pub fn run_rendered(&self, question: &str) -> String {
        self.run(question).render(self.roles)
    }
}
