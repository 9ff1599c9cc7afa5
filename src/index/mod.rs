//! Relationship index over the mapping tables
//!
//! Builds, in one pass over each relation list:
//! - an id → entity lookup per entity kind
//! - two adjacency maps per relation set, one for each direction
//!
//! Lookups of ids that are absent from the dataset yield "not found" or an
//! empty adjacency, never an error.

mod adjacency;
mod lookup;

use serde::Serialize;
use tracing::debug;

use crate::types::{Dataset, Entity, EntityKind, RelatedEntities, RelationSet};

pub use adjacency::AdjacencyMap;
pub use lookup::EntityLookup;

/// Bidirectional index derived from a [`Dataset`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelationshipIndex {
    frameworks: EntityLookup,
    policies: EntityLookup,
    controls: EntityLookup,

    policies_by_framework: AdjacencyMap,
    frameworks_by_policy: AdjacencyMap,
    controls_by_policy: AdjacencyMap,
    policies_by_control: AdjacencyMap,
    controls_by_framework: AdjacencyMap,
    frameworks_by_control: AdjacencyMap,
}

impl RelationshipIndex {
    /// Build the index from a dataset
    pub fn build(dataset: &Dataset) -> Self {
        let mut index = Self {
            frameworks: EntityLookup::from_entities(&dataset.frameworks),
            policies: EntityLookup::from_entities(&dataset.policies),
            controls: EntityLookup::from_entities(&dataset.controls),
            ..Self::default()
        };

        for link in &dataset.mappings.framework_policy_map {
            index
                .policies_by_framework
                .insert(&link.framework_id, &link.policy_id);
            index
                .frameworks_by_policy
                .insert(&link.policy_id, &link.framework_id);
        }

        for link in &dataset.mappings.policy_control_map {
            index
                .controls_by_policy
                .insert(&link.policy_id, &link.control_id);
            index
                .policies_by_control
                .insert(&link.control_id, &link.policy_id);
        }

        for link in &dataset.mappings.framework_control_map {
            index
                .controls_by_framework
                .insert(&link.framework_id, &link.control_id);
            index
                .frameworks_by_control
                .insert(&link.control_id, &link.framework_id);
        }

        debug!(
            entities = dataset.entity_count(),
            relations = dataset.relation_count(),
            "relationship index built"
        );

        index
    }

    /// Lookup table for one kind
    pub fn lookup(&self, kind: EntityKind) -> &EntityLookup {
        match kind {
            EntityKind::Framework => &self.frameworks,
            EntityKind::Policy => &self.policies,
            EntityKind::Control => &self.controls,
        }
    }

    /// Entity of `kind` by id
    pub fn get(&self, kind: EntityKind, id: &str) -> Option<&Entity> {
        self.lookup(kind).get(id)
    }

    /// Adjacency from `from` ids to `to` ids; None when both kinds are equal
    pub fn adjacency(&self, from: EntityKind, to: EntityKind) -> Option<&AdjacencyMap> {
        use EntityKind::*;

        match (from, to) {
            (Framework, Policy) => Some(&self.policies_by_framework),
            (Policy, Framework) => Some(&self.frameworks_by_policy),
            (Policy, Control) => Some(&self.controls_by_policy),
            (Control, Policy) => Some(&self.policies_by_control),
            (Framework, Control) => Some(&self.controls_by_framework),
            (Control, Framework) => Some(&self.frameworks_by_control),
            (Framework, Framework) | (Policy, Policy) | (Control, Control) => None,
        }
    }

    /// Ids of `to` entities related to `id`, in `to` list order
    ///
    /// Ids unknown to the `to` lookup sort after the known ones, by id.
    pub fn related_ids(&self, from: EntityKind, id: &str, to: EntityKind) -> Vec<&str> {
        let Some(adjacency) = self.adjacency(from, to) else {
            return Vec::new();
        };

        let targets = self.lookup(to);
        let mut ids: Vec<&str> = adjacency.neighbors(id).collect();
        ids.sort_by(|a, b| {
            let pa = targets.position(a).unwrap_or(usize::MAX);
            let pb = targets.position(b).unwrap_or(usize::MAX);
            pa.cmp(&pb).then_with(|| a.cmp(b))
        });
        ids
    }

    /// Entities of `to` related to `id`, in `to` list order
    ///
    /// Related ids without a record resolve to not found and are left out.
    pub fn related(&self, from: EntityKind, id: &str, to: EntityKind) -> Vec<Entity> {
        let targets = self.lookup(to);
        self.related_ids(from, id, to)
            .into_iter()
            .filter_map(|related_id| targets.get(related_id).cloned())
            .collect()
    }

    /// Related entities of both other kinds; the own-kind list stays empty
    pub fn related_all(&self, kind: EntityKind, id: &str) -> RelatedEntities {
        use EntityKind::*;

        match kind {
            Framework => RelatedEntities {
                frameworks: Vec::new(),
                policies: self.related(Framework, id, Policy),
                controls: self.related(Framework, id, Control),
            },
            Policy => RelatedEntities {
                frameworks: self.related(Policy, id, Framework),
                policies: Vec::new(),
                controls: self.related(Policy, id, Control),
            },
            Control => RelatedEntities {
                frameworks: self.related(Control, id, Framework),
                policies: self.related(Control, id, Policy),
                controls: Vec::new(),
            },
        }
    }

    /// Relation endpoints that name an id missing from its entity list
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for set in RelationSet::ALL {
            let (source, target) = set.kinds();
            // Walk both directions so each missing endpoint is reported once per set
            for (kind, adjacency) in [
                (source, self.adjacency(source, target)),
                (target, self.adjacency(target, source)),
            ] {
                let Some(adjacency) = adjacency else { continue };
                let lookup = self.lookup(kind);
                for id in adjacency.keys() {
                    if !lookup.contains(id) {
                        dangling.push(DanglingReference {
                            relation_set: set,
                            kind,
                            id: id.to_string(),
                        });
                    }
                }
            }
        }

        dangling.sort_by(|a, b| {
            (a.kind, a.id.as_str(), a.relation_set as u8).cmp(&(
                b.kind,
                b.id.as_str(),
                b.relation_set as u8,
            ))
        });
        dangling
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            frameworks: self.frameworks.len(),
            policies: self.policies.len(),
            controls: self.controls.len(),
            framework_policy_pairs: self.policies_by_framework.pair_count(),
            policy_control_pairs: self.controls_by_policy.pair_count(),
            framework_control_pairs: self.controls_by_framework.pair_count(),
        }
    }
}

/// A relation endpoint whose id has no entity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub relation_set: RelationSet,
    pub kind: EntityKind,
    pub id: String,
}

/// Index statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub frameworks: usize,
    pub policies: usize,
    pub controls: usize,
    /// Distinct pairs per relation set
    pub framework_policy_pairs: usize,
    pub policy_control_pairs: usize,
    pub framework_control_pairs: usize,
}
