//! Search engine
//!
//! Substring search over entity names, ids and aliases. Each match carries
//! its related entities, resolved through the [`RelationshipIndex`].
//!
//! [`RelationshipIndex`]: crate::index::RelationshipIndex

mod engine;
mod matcher;

pub use engine::{resolve_match, search};
pub use matcher::{filter_matches, normalize, NormalizedQuery};
