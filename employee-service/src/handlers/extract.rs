use axum::extract::FromRequest;
use service_core::error::AppError;

/// `axum::Json` whose rejections render as a 400 `{"message": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
