//! Entity types for the knowledge base

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A framework, policy or control record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Entity {
    /// Create a new entity without aliases
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    /// Create a new entity with aliases
    pub fn with_aliases(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        aliases: Vec<String>,
    ) -> Self {
        Self {
            aliases,
            ..Self::new(id, name, description)
        }
    }

    /// Values compared against a search query: name, id, then each alias
    pub fn searchable_values(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.id.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }
}

/// The three disjoint kinds of entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Framework,
    Policy,
    Control,
}

impl EntityKind {
    /// All kinds in result order
    pub const ALL: [EntityKind; 3] = [Self::Framework, Self::Policy, Self::Control];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::Policy => "policy",
            Self::Control => "control",
        }
    }

    /// The two kinds this kind can relate to
    pub fn others(&self) -> [EntityKind; 2] {
        match self {
            Self::Framework => [Self::Policy, Self::Control],
            Self::Policy => [Self::Framework, Self::Control],
            Self::Control => [Self::Policy, Self::Framework],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    /// Accepts singular or plural names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "framework" | "frameworks" => Ok(Self::Framework),
            "policy" | "policies" => Ok(Self::Policy),
            "control" | "controls" => Ok(Self::Control),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
