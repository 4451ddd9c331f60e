//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_supported, track};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/track",
            get(track::list)
                .post(track::create)
                .fallback(method_not_supported),
        )
        .route(
            "/track/{id}",
            get(track::get_by_id).fallback(method_not_supported),
        )
        .route(
            "/track/{id}/{field}",
            get(track::get_field).fallback(method_not_supported),
        )
}
