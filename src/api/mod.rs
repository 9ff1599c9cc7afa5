//! HTTP API over the session
//!
//! The presentation layer: it turns search outcomes and entity lookups into
//! JSON responses and leaves rendering to the client.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
