//! Route definitions for webhook registrations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{method_not_supported, webhook};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/webhook/new_track/",
            post(webhook::register).fallback(method_not_supported),
        )
        .route(
            "/webhook/new_track/{id}",
            get(webhook::get_by_id)
                .delete(webhook::remove)
                .fallback(method_not_supported),
        )
}
