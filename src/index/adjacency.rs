//! One direction of a relation set

use std::collections::{HashMap, HashSet};

/// id → set of related ids
///
/// Membership is a set, so a pair inserted twice is stored once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    edges: HashMap<String, HashSet<String>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `from` to `to`, creating the set on first insertion
    ///
    /// Returns false when the pair was already present.
    pub fn insert(&mut self, from: &str, to: &str) -> bool {
        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string())
    }

    /// Related ids of `id`, if it has any
    pub fn get(&self, id: &str) -> Option<&HashSet<String>> {
        self.edges.get(id)
    }

    /// Related ids of `id`; empty for unknown ids
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.edges.get(from).is_some_and(|set| set.contains(to))
    }

    pub fn degree(&self, id: &str) -> usize {
        self.edges.get(id).map_or(0, HashSet::len)
    }

    /// Ids with at least one relation
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Number of distinct pairs
    pub fn pair_count(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }

    /// Number of ids with at least one relation
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
