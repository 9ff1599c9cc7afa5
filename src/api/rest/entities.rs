//! Entity endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{unavailable, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::EntityKind;

fn parse_kind(kind: &str) -> Result<EntityKind, Response> {
    kind.parse::<EntityKind>().map_err(|e| {
        let error = ApiError::bad_request(e.to_string());
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    })
}

/// GET /api/entities/:kind - List entities of one kind in document order
pub async fn list_entities(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let catalog = match state.session.catalog() {
        Ok(catalog) => catalog,
        Err(e) => return unavailable(e),
    };

    let entities = catalog.entities(kind).to_vec();
    let total = entities.len();
    let sequence_id = state.session.current_sequence_id();
    Json(ApiResponse::with_total(entities, sequence_id, total)).into_response()
}

/// GET /api/entities/:kind/:id - Get single entity with its related entities
pub async fn get_entity(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let catalog = match state.session.catalog() {
        Ok(catalog) => catalog,
        Err(e) => return unavailable(e),
    };

    match catalog.entity(kind, &id) {
        Some(detail) => {
            let sequence_id = state.session.current_sequence_id();
            (StatusCode::OK, Json(ApiResponse::new(detail, sequence_id))).into_response()
        }
        None => {
            let error = ApiError::not_found(format!("{} '{}' not found", kind, id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}
