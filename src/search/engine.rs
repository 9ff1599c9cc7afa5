//! Search over the dataset with relationship resolution

use crate::index::RelationshipIndex;
use crate::types::{Dataset, Entity, EntityKind, SearchMatch, SearchOutcome};

use super::matcher::{filter_matches, NormalizedQuery};

/// Search all entity kinds for `query`
///
/// Matches are ordered frameworks, policies, then controls, each in list
/// order. An empty or whitespace-only query yields [`SearchOutcome::EmptyQuery`].
pub fn search(dataset: &Dataset, index: &RelationshipIndex, query: &str) -> SearchOutcome {
    let Some(query) = NormalizedQuery::parse(query) else {
        return SearchOutcome::EmptyQuery;
    };

    let matches: Vec<SearchMatch> = EntityKind::ALL
        .into_iter()
        .flat_map(|kind| {
            filter_matches(dataset.entities(kind), &query)
                .into_iter()
                .map(move |entity| resolve_match(index, kind, entity))
        })
        .collect();

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

/// Attach related entities of the other two kinds to a matched entity
pub fn resolve_match(index: &RelationshipIndex, kind: EntityKind, entity: &Entity) -> SearchMatch {
    SearchMatch {
        kind,
        related: index.related_all(kind, &entity.id),
        entity: entity.clone(),
    }
}
