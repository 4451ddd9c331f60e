//! HTTP handlers, one module per route group.

pub mod admin;
pub mod meta;
pub mod ticker;
pub mod track;
pub mod webhook;

use crate::error::AppError;

/// Fallback for method routers: any HTTP method a path does not implement
/// gets a 501 instead of axum's default 405.
pub async fn method_not_supported() -> AppError {
    AppError::MethodNotSupported
}
