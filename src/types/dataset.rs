//! Knowledge base document

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, Mappings};

/// The full dataset: three entity lists plus the mapping tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub frameworks: Vec<Entity>,
    #[serde(default)]
    pub policies: Vec<Entity>,
    #[serde(default)]
    pub controls: Vec<Entity>,
    #[serde(default)]
    pub mappings: Mappings,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset from its JSON document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Entities of one kind, in document order
    pub fn entities(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Framework => &self.frameworks,
            EntityKind::Policy => &self.policies,
            EntityKind::Control => &self.controls,
        }
    }

    /// Total number of entities across all kinds
    pub fn entity_count(&self) -> usize {
        self.frameworks.len() + self.policies.len() + self.controls.len()
    }

    /// Total number of relation pairs, duplicates included
    pub fn relation_count(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0 && self.mappings.is_empty()
    }
}
