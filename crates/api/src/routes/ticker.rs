//! Route definitions for the ticker.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_supported, ticker};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/ticker/latest",
            get(ticker::latest).fallback(method_not_supported),
        )
        .route(
            "/ticker/",
            get(ticker::from_start).fallback(method_not_supported),
        )
        .route(
            "/ticker/{timestamp}",
            get(ticker::from_cursor).fallback(method_not_supported),
        )
}
