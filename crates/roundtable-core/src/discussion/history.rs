//! Discussion history
//!
//! Every finished turn leaves a `"<Label>: <content>"` summary. Prompts only
//! see the newest [`HISTORY_WINDOW`] of them.

use super::types::Turn;

/// Number of summaries embedded into a prompt
pub const HISTORY_WINDOW: usize = 3;

/// Ordered summaries of the turns completed so far in one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the summary line for a finished turn
    pub fn record(&mut self, turn: &Turn) {
        self.entries
            .push(format!("{}: {}", turn.role().label(), turn.content()));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest summaries that still reach the prompt
    pub fn window(&self) -> &[String] {
        let start = self.entries.len().saturating_sub(HISTORY_WINDOW);
        &self.entries[start..]
    }

    /// Render the prompt block for the current window
    pub fn format(&self) -> String {
        format_history(&self.entries)
    }
}

/// Format summaries as a `Discussion so far:` block
///
/// Returns an empty string when there is nothing to show; older entries
/// beyond the window are dropped.
pub fn format_history(entries: &[String]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let start = entries.len().saturating_sub(HISTORY_WINDOW);
    let lines: Vec<String> = entries[start..]
        .iter()
        .map(|entry| format!("- {}", entry))
        .collect();

    format!("Discussion so far:\n{}", lines.join("\n"))
}
