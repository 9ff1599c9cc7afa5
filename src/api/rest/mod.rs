//! REST API module for HTTP endpoints
//!
//! - `GET /api/status` - Session load state and dataset statistics
//! - `GET /api/search?q=` - Search entities and resolve their relations
//! - `GET /api/entities/:kind` - List entities of one kind
//! - `GET /api/entities/:kind/:id` - Single entity with its relations

pub mod entities;
pub mod search;
pub mod status;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::SessionError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Latest query sequence id; a client drops responses older than its last search
    pub sequence_id: u64,
    /// Total count (for list and search responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self {
            data,
            sequence_id,
            total: None,
        }
    }

    pub fn with_total(data: T, sequence_id: u64, total: usize) -> Self {
        Self {
            data,
            sequence_id,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn not_loaded() -> Self {
        Self {
            error: "Data has not finished loading".to_string(),
            code: "DATA_NOT_LOADED".to_string(),
        }
    }

    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self {
            error: format!("Failed to load data: {}", reason.into()),
            code: "DATA_LOAD_FAILED".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Map a session that cannot serve requests to a 503 response
pub fn unavailable(err: SessionError) -> Response {
    let error = match &err {
        SessionError::NotLoaded => ApiError::not_loaded(),
        SessionError::LoadFailed(reason) => ApiError::load_failed(reason.clone()),
        SessionError::AlreadySettled(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::internal(err.to_string())))
                .into_response()
        }
    };
    (StatusCode::SERVICE_UNAVAILABLE, Json(error)).into_response()
}
