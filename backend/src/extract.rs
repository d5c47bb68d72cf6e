//! Request extractors

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body whose rejections render as the standard error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
