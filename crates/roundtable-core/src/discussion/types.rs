//! Discussion types
//!
//! Stages, the fixed step script, and the turns a run produces.

use super::render::render_transcript;
use super::roles::{RoleId, RoleRegistry};
use serde::{Deserialize, Serialize};

/// Discussion phase label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Opening,
    Initial,
    Response,
    Synthesis,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Opening => "OPENING",
            Stage::Initial => "INITIAL",
            Stage::Response => "RESPONSE",
            Stage::Synthesis => "SYNTHESIS",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One state of the discussion script
///
/// The script is linear: `PmOpen → ArchitectInitial → ExpertInitial →
/// ArchitectResponse → ExpertResponse → PmSynthesis`, then done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PmOpen,
    ArchitectInitial,
    ExpertInitial,
    ArchitectResponse,
    ExpertResponse,
    PmSynthesis,
}

impl Step {
    pub const FIRST: Step = Step::PmOpen;

    /// Number of turns a complete run produces
    pub const COUNT: usize = 6;

    pub fn role(&self) -> RoleId {
        match self {
            Step::PmOpen | Step::PmSynthesis => RoleId::Pm,
            Step::ArchitectInitial | Step::ArchitectResponse => RoleId::Architect,
            Step::ExpertInitial | Step::ExpertResponse => RoleId::Expert,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Step::PmOpen => Stage::Opening,
            Step::ArchitectInitial | Step::ExpertInitial => Stage::Initial,
            Step::ArchitectResponse | Step::ExpertResponse => Stage::Response,
            Step::PmSynthesis => Stage::Synthesis,
        }
    }

    /// The following step, or `None` once the synthesis is done
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::PmOpen => Some(Step::ArchitectInitial),
            Step::ArchitectInitial => Some(Step::ExpertInitial),
            Step::ExpertInitial => Some(Step::ArchitectResponse),
            Step::ArchitectResponse => Some(Step::ExpertResponse),
            Step::ExpertResponse => Some(Step::PmSynthesis),
            Step::PmSynthesis => None,
        }
    }

    /// All steps in script order
    pub fn sequence() -> impl Iterator<Item = Step> {
        std::iter::successors(Some(Step::FIRST), Step::next)
    }
}

/// One role's contribution at one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: RoleId,
    stage: Stage,
    content: String,
}

impl Turn {
    pub fn new(role: RoleId, stage: Stage, content: impl Into<String>) -> Self {
        Self {
            role,
            stage,
            content: content.into(),
        }
    }

    pub fn role(&self) -> RoleId {
        self.role
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Model answer, or an `Error: ...` line if the call failed
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered turns of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub(crate) fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the transcript in the rule-separated text layout
    pub fn render(&self, roles: &RoleRegistry) -> String {
        render_transcript(&self.turns, roles)
    }
}
