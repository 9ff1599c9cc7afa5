//! Status endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::ApiResponse;
use crate::api::state::AppState;

/// GET /api/status - Load state and dataset statistics
///
/// Always 200: clients poll this to tell `loading` from `failed`.
pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = state.session.status();
    Json(ApiResponse::new(status, state.session.current_sequence_id()))
}
