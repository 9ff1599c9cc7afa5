//! Session load state

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::index::IndexStats;

use super::Catalog;

/// Lifecycle of the session's dataset
///
/// Starts in `Loading` and moves exactly once to `Ready` or `Failed`.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready {
        catalog: Arc<Catalog>,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        reason: String,
        failed_at: DateTime<Utc>,
    },
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready { .. } => "ready",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Snapshot of the session for status reporting
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub state: &'static str,
    /// Unix timestamp of the transition out of `loading`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<IndexStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangling_references: Option<usize>,
}

impl From<&LoadState> for SessionStatus {
    fn from(state: &LoadState) -> Self {
        let mut status = SessionStatus {
            state: state.name(),
            settled_at: None,
            reason: None,
            stats: None,
            relations: None,
            dangling_references: None,
        };

        match state {
            LoadState::Loading => {}
            LoadState::Ready { catalog, loaded_at } => {
                status.settled_at = Some(loaded_at.timestamp());
                status.stats = Some(catalog.stats());
                status.relations = Some(catalog.dataset().relation_count());
                status.dangling_references = Some(catalog.dangling_references().len());
            }
            LoadState::Failed { reason, failed_at } => {
                status.settled_at = Some(failed_at.timestamp());
                status.reason = Some(reason.clone());
            }
        }

        status
    }
}
