//! Control Map
//!
//! Search and cross-reference over a static knowledge base of frameworks,
//! policies and controls linked by many-to-many mapping tables.
//!
//! # Modules
//!
//! - `types`: Entities, mapping tables, the dataset document and search results
//! - `index`: Bidirectional relationship index built from the mapping tables
//! - `search`: Substring search with relationship resolution
//! - `session`: Owner of the loaded dataset and its load lifecycle
//! - `api`: HTTP endpoints over a session
//! - `config`: Environment configuration
//! - `error`: Error types
//!
//! # Example
//!
//! ```
//! use control_map::{Catalog, Dataset, Entity, SearchOutcome};
//!
//! let dataset = Dataset {
//!     frameworks: vec![Entity::new("F1", "NIST CSF", "Cybersecurity framework")],
//!     ..Dataset::default()
//! };
//! let catalog = Catalog::new(dataset);
//!
//! assert_eq!(catalog.search("   "), SearchOutcome::EmptyQuery);
//! assert_eq!(catalog.search("csf").match_count(), 1);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod search;
pub mod session;
pub mod types;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{AppResult, ConfigError, LoadError, SessionError};
pub use index::RelationshipIndex;
pub use session::{Catalog, SearchTicket, Session};
pub use types::{
    Dataset, Entity, EntityKind, Mappings, RelatedEntities, SearchMatch, SearchOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
