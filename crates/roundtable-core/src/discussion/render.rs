//! Transcript rendering
//!
//! Layout per turn: `=` separator (except before the first turn), header,
//! `-` rule, content, blank line. Clients split on the rules, so both are
//! exactly [`RULE_WIDTH`] characters wide.

use super::roles::RoleRegistry;
use super::types::Turn;

/// Width of the `=` separator and the `-` rule
pub const RULE_WIDTH: usize = 60;

/// Header line: icon, then display name and stage in uppercase
pub fn turn_header(turn: &Turn, roles: &RoleRegistry) -> String {
    let role = roles.get(turn.role());
    let display_name = format!("{} - {}", role.name, turn.stage().label());
    format!("{} {}", role.icon, display_name.to_uppercase())
}

/// Render turns into a single text block
pub fn render_transcript(turns: &[Turn], roles: &RoleRegistry) -> String {
    let separator = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::with_capacity(turns.len() * 5);

    for (i, turn) in turns.iter().enumerate() {
        if i > 0 {
            lines.push(separator.clone());
        }
        lines.push(turn_header(turn, roles));
        lines.push(rule.clone());
        lines.push(turn.content().to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discussion::{RoleId, Stage};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header() {
        let roles = RoleRegistry::standard();
        let turn = Turn::new(RoleId::Architect, Stage::Response, "x");
        assert_eq!(turn_header(&turn, &roles), "🏗️ AI ARCHITECT - RESPONSE");
    }

    #[test]
    fn test_two_turn_layout() {
        let roles = RoleRegistry::standard();
        let turns = vec![
            Turn::new(RoleId::Pm, Stage::Opening, "Let's start."),
            Turn::new(RoleId::Expert, Stage::Initial, "Mind the budget."),
        ];

        let expected = format!(
            concat!(
                "🎯 PROJECT MANAGER - OPENING\n{dash}\nLet's start.\n\n",
                "{eq}\n",
                "💼 DOMAIN EXPERT - INITIAL\n{dash}\nMind the budget.\n",
            ),
            dash = "-".repeat(60),
            eq = "=".repeat(60),
        );
        assert_eq!(render_transcript(&turns, &roles), expected);
    }

    #[test]
    fn test_content_is_verbatim() {
        let roles = RoleRegistry::standard();
        let content = "line one\n\n  indented ====\n";
        let turns = vec![Turn::new(RoleId::Pm, Stage::Synthesis, content)];
        let rendered = render_transcript(&turns, &roles);
        assert!(rendered.contains(content));
        assert!(!rendered.contains(&"=".repeat(60)));
    }

    #[test]
    fn test_no_turns() {
        assert_eq!(render_transcript(&[], &RoleRegistry::standard()), "");
    }
}
