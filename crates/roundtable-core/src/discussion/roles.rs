//! Role registry
//!
//! The three fixed discussion personas. Built once at startup and shared
//! read-only by every run.

use crate::{Result, RoundtableError};
use serde::{Deserialize, Serialize};

/// Identifier of a discussion role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleId {
    /// Project Manager - opens and synthesizes
    Pm,
    /// AI Architect - technical perspective
    Architect,
    /// Domain Expert - business perspective
    Expert,
}

impl RoleId {
    pub const ALL: [RoleId; 3] = [RoleId::Pm, RoleId::Architect, RoleId::Expert];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleId::Pm => "pm",
            RoleId::Architect => "architect",
            RoleId::Expert => "expert",
        }
    }

    /// Short label used in discussion history lines
    pub fn label(&self) -> &'static str {
        match self {
            RoleId::Pm => "PM",
            RoleId::Architect => "Architect",
            RoleId::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleId {
    type Err = RoundtableError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pm" => Ok(RoleId::Pm),
            "architect" => Ok(RoleId::Architect),
            "expert" => Ok(RoleId::Expert),
            _ => Err(RoundtableError::config(format!("Unknown role: {}", s))),
        }
    }
}

/// A persona taking part in the discussion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub icon: String,
    /// Persona instruction placed at the top of the system prompt
    pub persona: String,
}

impl Role {
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        icon: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            persona: persona.into(),
        }
    }
}

/// Immutable lookup table over the three roles
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    pm: Role,
    architect: Role,
    expert: Role,
}

impl RoleRegistry {
    /// The standard Project Manager / Architect / Expert team
    pub fn standard() -> Self {
        Self {
            pm: Role::new(
                RoleId::Pm,
                "Project Manager",
                "🎯",
                "You are a Project Manager who coordinates AI projects and synthesizes \
                 team discussions.",
            ),
            architect: Role::new(
                RoleId::Architect,
                "AI Architect",
                "🏗️",
                "You are an AI Architect specializing in system design and technical \
                 implementation.",
            ),
            expert: Role::new(
                RoleId::Expert,
                "Domain Expert",
                "💼",
                "You are a Domain Expert focused on business value and practical constraints.",
            ),
        }
    }

    pub fn get(&self, id: RoleId) -> &Role {
        match id {
            RoleId::Pm => &self.pm,
            RoleId::Architect => &self.architect,
            RoleId::Expert => &self.expert,
        }
    }

    /// Look up a role by its textual identifier
    pub fn lookup(&self, id: &str) -> Result<&Role> {
        Ok(self.get(id.parse()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        RoleId::ALL.into_iter().map(move |id| self.get(id))
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roles() {
        let roles = RoleRegistry::standard();
        let architect = roles.get(RoleId::Architect);
        assert_eq!(architect.name, "AI Architect");
        assert_eq!(architect.icon, "🏗️");
        assert_eq!(roles.get(RoleId::Pm).icon, "🎯");
        assert_eq!(roles.get(RoleId::Expert).name, "Domain Expert");
        assert_eq!(roles.iter().count(), 3);
    }

    #[test]
    fn test_lookup_by_identifier() {
        let roles = RoleRegistry::standard();
        assert_eq!(roles.lookup("expert").unwrap().id, RoleId::Expert);
        assert_eq!(roles.lookup("PM").unwrap().id, RoleId::Pm);
    }

    #[test]
    fn test_unknown_role_is_config_error() {
        let roles = RoleRegistry::standard();
        let err = roles.lookup("designer").unwrap_err();
        assert!(matches!(err, RoundtableError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: Unknown role: designer");
    }
}
