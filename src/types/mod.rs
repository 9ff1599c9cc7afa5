//! Data types for the control map
//!
//! Entities, mapping tables, the dataset document and search results.

mod dataset;
mod entity;
mod mapping;
mod outcome;

pub use dataset::Dataset;
pub use entity::{Entity, EntityKind, UnknownKind};
pub use mapping::{FrameworkControlLink, FrameworkPolicyLink, Mappings, PolicyControlLink, RelationSet};
pub use outcome::{RelatedEntities, SearchMatch, SearchOutcome};
