//! Search result types handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// Related entities of the other two kinds
///
/// The list for the matched entity's own kind is always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedEntities {
    pub frameworks: Vec<Entity>,
    pub policies: Vec<Entity>,
    pub controls: Vec<Entity>,
}

impl RelatedEntities {
    pub fn of_kind(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Framework => &self.frameworks,
            EntityKind::Policy => &self.policies,
            EntityKind::Control => &self.controls,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty() && self.policies.is_empty() && self.controls.is_empty()
    }
}

/// A matched entity tagged with its kind and resolved relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub kind: EntityKind,
    pub entity: Entity,
    pub related: RelatedEntities,
}

/// Outcome of a search
///
/// `EmptyQuery` and `NoMatches` are distinct: the first asks the user for a
/// term, the second reports that the term found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "matches", rename_all = "snake_case")]
pub enum SearchOutcome {
    EmptyQuery,
    NoMatches,
    Matches(Vec<SearchMatch>),
}

impl SearchOutcome {
    /// Matches in result order; empty for the other two states
    pub fn matches(&self) -> &[SearchMatch] {
        match self {
            Self::Matches(matches) => matches,
            Self::EmptyQuery | Self::NoMatches => &[],
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches().len()
    }
}
