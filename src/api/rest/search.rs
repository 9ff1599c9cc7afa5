//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{unavailable, ApiResponse};
use crate::api::state::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string; missing is the same as empty
    #[serde(default)]
    pub q: String,
}

/// GET /api/search - Search frameworks, policies and controls
///
/// An empty query is not an error: it returns the `empty_query` outcome so
/// the client can prompt for a term.
pub async fn search_entities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match state.session.search(&params.q) {
        Ok(ticket) => {
            let total = ticket.outcome.match_count();
            (
                StatusCode::OK,
                Json(ApiResponse::with_total(ticket.outcome, ticket.sequence_id, total)),
            )
                .into_response()
        }
        Err(e) => unavailable(e),
    }
}
