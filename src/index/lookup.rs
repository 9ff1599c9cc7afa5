//! id → entity lookup for one entity kind

use std::collections::HashMap;

use crate::types::Entity;

/// Entities of one kind in document order, addressable by id
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntityLookup {
    entities: Vec<Entity>,
    /// id → position in `entities`; a repeated id resolves to its last record
    positions: HashMap<String, usize>,
}

impl EntityLookup {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let positions = entities
            .iter()
            .enumerate()
            .map(|(pos, entity)| (entity.id.clone(), pos))
            .collect();

        Self {
            entities: entities.to_vec(),
            positions,
        }
    }

    /// Entity by id, or None when the id is unknown
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.positions.get(id).map(|&pos| &self.entities[pos])
    }

    /// Position of an id in document order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Entities in document order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
