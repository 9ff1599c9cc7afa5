//! Session - owner of the loaded dataset
//!
//! The dataset is loaded once, asynchronously. Until the load resolves every
//! search is rejected with [`SessionError::NotLoaded`]; a failed load is
//! permanent for the session. Once ready, the [`Catalog`] is immutable and
//! shared with readers through an `Arc`.

mod catalog;
mod state;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{LoadError, SessionError};
use crate::types::{Dataset, SearchOutcome};

pub use catalog::Catalog;
pub use state::{LoadState, SessionStatus};

/// A search result stamped with its query sequence id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTicket {
    pub sequence_id: u64,
    pub outcome: SearchOutcome,
}

/// Session state shared between the loader and the presentation layer
pub struct Session {
    state: RwLock<LoadState>,
    /// Sequence id of the most recent search
    query_sequence: AtomicU64,
}

impl Session {
    /// Create a session waiting for its dataset
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoadState::Loading),
            query_sequence: AtomicU64::new(0),
        }
    }

    /// Create a session that is already ready with `dataset`
    pub fn with_dataset(dataset: Dataset) -> Self {
        let session = Self::new();
        // A fresh session is always loading, so this cannot be rejected
        let _ = session.load_dataset(dataset);
        session
    }

    /// Read and parse the dataset document at `path`, then settle the session
    pub async fn load_from_path(&self, path: impl AsRef<Path>) -> Result<Arc<Catalog>, SessionError> {
        let path = path.as_ref();
        self.ensure_loading()?;

        info!(path = %path.display(), "loading dataset");
        match read_dataset(path).await {
            Ok(dataset) => self.load_dataset(dataset),
            Err(e) => Err(self.fail(e.to_string())),
        }
    }

    /// Settle the session as ready with `dataset`
    pub fn load_dataset(&self, dataset: Dataset) -> Result<Arc<Catalog>, SessionError> {
        let catalog = Arc::new(Catalog::new(dataset));

        let mut state = self.state.write();
        if state.is_settled() {
            warn!(state = state.name(), "ignoring dataset for settled session");
            return Err(SessionError::AlreadySettled(state.name()));
        }

        let stats = catalog.stats();
        info!(
            frameworks = stats.frameworks,
            policies = stats.policies,
            controls = stats.controls,
            relations = catalog.dataset().relation_count(),
            "dataset ready"
        );
        for dangling in catalog.dangling_references() {
            warn!(
                kind = %dangling.kind,
                id = %dangling.id,
                relation_set = ?dangling.relation_set,
                "relation references unknown entity"
            );
        }

        *state = LoadState::Ready {
            catalog: Arc::clone(&catalog),
            loaded_at: Utc::now(),
        };
        Ok(catalog)
    }

    /// Settle the session as failed
    ///
    /// Returns the error searches will see from now on. A session that has
    /// already settled keeps its state.
    pub fn fail(&self, reason: impl Into<String>) -> SessionError {
        let reason = reason.into();

        let mut state = self.state.write();
        if state.is_settled() {
            warn!(state = state.name(), %reason, "ignoring failure for settled session");
            return SessionError::AlreadySettled(state.name());
        }

        warn!(%reason, "dataset load failed");
        *state = LoadState::Failed {
            reason: reason.clone(),
            failed_at: Utc::now(),
        };
        SessionError::LoadFailed(reason)
    }

    /// The ready catalog, or why there is none
    pub fn catalog(&self) -> Result<Arc<Catalog>, SessionError> {
        match &*self.state.read() {
            LoadState::Loading => Err(SessionError::NotLoaded),
            LoadState::Ready { catalog, .. } => Ok(Arc::clone(catalog)),
            LoadState::Failed { reason, .. } => Err(SessionError::LoadFailed(reason.clone())),
        }
    }

    /// Run a search and stamp it with a new sequence id
    ///
    /// A newer search supersedes older ones; see [`Session::is_latest`].
    pub fn search(&self, query: &str) -> Result<SearchTicket, SessionError> {
        let catalog = self.catalog()?;
        let sequence_id = self.query_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = catalog.search(query);

        Ok(SearchTicket {
            sequence_id,
            outcome,
        })
    }

    /// True if no search started after the one stamped `sequence_id`
    pub fn is_latest(&self, sequence_id: u64) -> bool {
        self.query_sequence.load(Ordering::SeqCst) == sequence_id
    }

    /// Sequence id of the most recent search, 0 before the first
    pub fn current_sequence_id(&self) -> u64 {
        self.query_sequence.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus::from(&*self.state.read())
    }

    fn ensure_loading(&self) -> Result<(), SessionError> {
        let state = self.state.read();
        if state.is_settled() {
            return Err(SessionError::AlreadySettled(state.name()));
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the dataset document from disk
async fn read_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Dataset::from_json_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entity;

    fn make_dataset() -> Dataset {
        Dataset {
            frameworks: vec![Entity::new("F1", "NIST CSF", "")],
            ..Dataset::default()
        }
    }

    #[test]
    fn test_search_before_load_is_rejected() {
        let session = Session::new();
        assert_eq!(session.search("nist"), Err(SessionError::NotLoaded));
        assert_eq!(session.status().state, "loading");
        assert_eq!(session.current_sequence_id(), 0);
    }

    #[test]
    fn test_failed_load_is_permanent() {
        let session = Session::new();
        assert_eq!(
            session.fail("boom"),
            SessionError::LoadFailed("boom".to_string())
        );

        assert_eq!(
            session.load_dataset(make_dataset()).unwrap_err(),
            SessionError::AlreadySettled("failed")
        );
        assert_eq!(
            session.search("nist"),
            Err(SessionError::LoadFailed("boom".to_string()))
        );

        let status = session.status();
        assert_eq!(status.state, "failed");
        assert_eq!(status.reason.as_deref(), Some("boom"));
    }

    #[test]
    fn test_ready_session_ignores_late_failure() {
        let session = Session::with_dataset(make_dataset());
        assert_eq!(session.fail("late"), SessionError::AlreadySettled("ready"));
        assert!(session.search("nist").is_ok());
    }

    #[test]
    fn test_newer_search_supersedes_older() {
        let session = Session::with_dataset(make_dataset());

        let first = session.search("nist").unwrap();
        assert!(session.is_latest(first.sequence_id));

        let second = session.search("csf").unwrap();
        assert!(second.sequence_id > first.sequence_id);
        assert!(!session.is_latest(first.sequence_id));
        assert!(session.is_latest(second.sequence_id));
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let session = Session::new();
        let err = session
            .load_from_path("definitely/not/here/knowledge_base.json")
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::LoadFailed(_)));
        assert_eq!(session.status().state, "failed");
    }
}
