//! Prompt templates
//!
//! One hand-written template per step. Sentence counts are guidance for the
//! model only; answers are never checked against them.

use super::history::History;
use super::roles::Role;
use super::types::Step;

const TEAM_GUIDANCE: &str = "You are part of a multi-agent discussion. \
    Build on previous points and reference other agents when responding.

Keep responses focused and concise (3-5 sentences). Be direct and actionable.";

const PM_OPEN_DIRECTIVE: &str = "As Project Manager, open this discussion by:
1. Breaking down the question into key aspects
2. Identifying what Architect should address (technical/architecture)
3. Identifying what Expert should address (business/practical)

Keep it concise (3-4 sentences).";

const ARCHITECT_INITIAL_DIRECTIVE: &str = "Provide your technical perspective. \
    Be specific about architecture, technologies, and implementation approach. (3-4 sentences)";

const EXPERT_INITIAL_DIRECTIVE: &str = "Provide your business/practical perspective. \
    Focus on real-world constraints, ROI, and implementation challenges. (3-4 sentences)";

const ARCHITECT_RESPONSE_DIRECTIVE: &str = "The Domain Expert raised important practical concerns. \
    Address these concerns from a technical standpoint. \
    If you agree, explain how to implement it. \
    If you disagree, provide technical reasoning. \
    Reference the Expert's points. (3-4 sentences)

Start with \"@Expert:\" to show you're responding.";

const EXPERT_RESPONSE_DIRECTIVE: &str = "The Architect proposed a technical approach. \
    Evaluate it from a business/practical perspective. \
    Does it address real-world constraints? \
    Is there a simpler path? \
    Reference the Architect's points. (3-4 sentences)

Start with \"@Architect:\" to show you're responding.";

const PM_SYNTHESIS_DIRECTIVE: &str = "As Project Manager, synthesize this discussion into:
1. Key consensus points between Architect and Expert
2. Any remaining trade-offs or decisions needed
3. Recommended action plan combining both perspectives

Be decisive and actionable. (4-5 sentences)";

/// System instruction for a role
pub fn system_prompt(role: &Role) -> String {
    format!("{}\n\n{}", role.persona, TEAM_GUIDANCE)
}

/// Stage-specific instruction for a step
pub fn directive(step: Step) -> &'static str {
    match step {
        Step::PmOpen => PM_OPEN_DIRECTIVE,
        Step::ArchitectInitial => ARCHITECT_INITIAL_DIRECTIVE,
        Step::ExpertInitial => EXPERT_INITIAL_DIRECTIVE,
        Step::ArchitectResponse => ARCHITECT_RESPONSE_DIRECTIVE,
        Step::ExpertResponse => EXPERT_RESPONSE_DIRECTIVE,
        Step::PmSynthesis => PM_SYNTHESIS_DIRECTIVE,
    }
}

/// Build the user prompt for a step
///
/// The opening step sees only the question; every later step also gets the
/// history block.
pub fn build_prompt(step: Step, question: &str, history: &History) -> String {
    match step {
        Step::PmOpen => format!("Question: {}\n\n{}", question, directive(step)),
        _ => format!(
            "Question: {}\n\n{}\n\n{}",
            question,
            history.format(),
            directive(step)
        ),
    }
}
