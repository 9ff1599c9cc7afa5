//! Mapping tables linking entities of different kinds

use serde::{Deserialize, Serialize};

use super::EntityKind;

/// framework ↔ policy link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkPolicyLink {
    pub framework_id: String,
    pub policy_id: String,
}

/// policy ↔ control link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyControlLink {
    pub policy_id: String,
    pub control_id: String,
}

/// framework ↔ control link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkControlLink {
    pub framework_id: String,
    pub control_id: String,
}

/// The three named relation sets of the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mappings {
    #[serde(default)]
    pub framework_policy_map: Vec<FrameworkPolicyLink>,
    #[serde(default)]
    pub policy_control_map: Vec<PolicyControlLink>,
    #[serde(default)]
    pub framework_control_map: Vec<FrameworkControlLink>,
}

impl Mappings {
    /// Total number of relation pairs, duplicates included
    pub fn len(&self) -> usize {
        self.framework_policy_map.len()
            + self.policy_control_map.len()
            + self.framework_control_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every relation as `(set, source_id, target_id)`
    pub fn pairs(&self) -> impl Iterator<Item = (RelationSet, &str, &str)> {
        let fp = self
            .framework_policy_map
            .iter()
            .map(|l| (RelationSet::FrameworkPolicy, l.framework_id.as_str(), l.policy_id.as_str()));
        let pc = self
            .policy_control_map
            .iter()
            .map(|l| (RelationSet::PolicyControl, l.policy_id.as_str(), l.control_id.as_str()));
        let fc = self
            .framework_control_map
            .iter()
            .map(|l| (RelationSet::FrameworkControl, l.framework_id.as_str(), l.control_id.as_str()));
        fp.chain(pc).chain(fc)
    }
}

/// Identifies one of the three relation sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationSet {
    FrameworkPolicy,
    PolicyControl,
    FrameworkControl,
}

impl RelationSet {
    pub const ALL: [RelationSet; 3] = [
        Self::FrameworkPolicy,
        Self::PolicyControl,
        Self::FrameworkControl,
    ];

    /// `(source kind, target kind)` as stored in the mapping table
    pub fn kinds(&self) -> (EntityKind, EntityKind) {
        match self {
            Self::FrameworkPolicy => (EntityKind::Framework, EntityKind::Policy),
            Self::PolicyControl => (EntityKind::Policy, EntityKind::Control),
            Self::FrameworkControl => (EntityKind::Framework, EntityKind::Control),
        }
    }

    /// The relation set linking two distinct kinds, in either order
    pub fn between(a: EntityKind, b: EntityKind) -> Option<RelationSet> {
        Self::ALL.into_iter().find(|set| {
            let (source, target) = set.kinds();
            (source == a && target == b) || (source == b && target == a)
        })
    }
}
