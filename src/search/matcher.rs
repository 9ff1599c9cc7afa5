//! Query normalization and substring matching

use rayon::prelude::*;

use crate::types::Entity;

/// Threshold for using parallel matching (entities count)
const PARALLEL_MATCH_THRESHOLD: usize = 1000;

/// A trimmed, case-folded, non-empty query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalize a raw query; None for empty or whitespace-only input
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the name, id or any alias contains the query, case-insensitively
    pub fn matches(&self, entity: &Entity) -> bool {
        entity
            .searchable_values()
            .any(|value| value.to_lowercase().contains(self.0.as_str()))
    }
}

/// Trim surrounding whitespace and lowercase
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Entities matching `query`, in input order
pub fn filter_matches<'a>(entities: &'a [Entity], query: &NormalizedQuery) -> Vec<&'a Entity> {
    if entities.len() > PARALLEL_MATCH_THRESHOLD {
        // Indexed parallel collect keeps input order
        entities.par_iter().filter(|e| query.matches(e)).collect()
    } else {
        entities.iter().filter(|e| query.matches(e)).collect()
    }
}
