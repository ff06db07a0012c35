//! Request body extractors that report failures through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection is an [`AppError`], so a body with a missing
/// or mistyped field gets `{ "error", "code": "BAD_REQUEST" }`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
