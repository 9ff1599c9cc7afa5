//! A loaded dataset together with its relationship index

use crate::index::{DanglingReference, IndexStats, RelationshipIndex};
use crate::search;
use crate::types::{Dataset, Entity, EntityKind, SearchMatch, SearchOutcome};

/// Immutable dataset plus the index derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dataset: Dataset,
    index: RelationshipIndex,
}

impl Catalog {
    /// Take ownership of a dataset and build its index
    pub fn new(dataset: Dataset) -> Self {
        let index = RelationshipIndex::build(&dataset);
        Self { dataset, index }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        search::search(&self.dataset, &self.index, query)
    }

    /// An entity with its related entities, or None for an unknown id
    pub fn entity(&self, kind: EntityKind, id: &str) -> Option<SearchMatch> {
        self.index
            .get(kind, id)
            .map(|entity| search::resolve_match(&self.index, kind, entity))
    }

    /// All entities of a kind, in document order
    pub fn entities(&self, kind: EntityKind) -> &[Entity] {
        self.dataset.entities(kind)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        self.index.dangling_references()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FrameworkControlLink, Mappings};

    #[test]
    fn test_entity_detail() {
        let catalog = Catalog::new(Dataset {
            frameworks: vec![Entity::new("F1", "SOC 2", "")],
            policies: vec![],
            controls: vec![Entity::new("C1", "Encryption at rest", "")],
            mappings: Mappings {
                framework_control_map: vec![FrameworkControlLink {
                    framework_id: "F1".to_string(),
                    control_id: "C1".to_string(),
                }],
                ..Mappings::default()
            },
        });

        let detail = catalog.entity(EntityKind::Control, "C1").unwrap();
        assert_eq!(detail.entity.name, "Encryption at rest");
        assert_eq!(detail.related.frameworks[0].id, "F1");
        assert!(detail.related.policies.is_empty());

        assert!(catalog.entity(EntityKind::Control, "C2").is_none());
        assert!(catalog.entity(EntityKind::Framework, "C1").is_none());
    }
}
