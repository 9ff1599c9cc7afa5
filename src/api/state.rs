//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::session::Session;

/// State handed to every handler
pub struct AppState {
    pub session: Arc<Session>,
}

impl AppState {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}
