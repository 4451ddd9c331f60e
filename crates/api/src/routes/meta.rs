//! Route definitions for the service root and meta endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::{meta, method_not_supported};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::root).fallback(method_not_supported))
        .route("/api", get(meta::info).fallback(method_not_supported))
}
