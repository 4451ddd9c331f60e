//! Route definitions for operational endpoints.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{admin, method_not_supported};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/tracks_count",
            get(admin::tracks_count).fallback(method_not_supported),
        )
        .route(
            "/admin/tracks",
            delete(admin::delete_tracks).fallback(method_not_supported),
        )
}
