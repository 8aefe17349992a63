//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Error bodies are `{"detail": "..."}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("validation failed: {0}")]
  Validation(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<signup_core::Error> for ApiError {
  fn from(e: signup_core::Error) -> Self {
    use signup_core::Error as E;
    match e {
      E::ActivityNotFound(_) => ApiError::NotFound("Activity not found".into()),
      E::AlreadyEnrolled { .. } => ApiError::BadRequest(
        "Student is already signed up for this activity".into(),
      ),
      E::NotEnrolled { .. } => ApiError::BadRequest(
        "Student is not signed up for this activity".into(),
      ),
      E::EmptyEmail | E::EmptyActivityName => ApiError::Validation(e.to_string()),
      other => ApiError::Store(Box::new(other)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, detail) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
      }
    };
    (status, Json(json!({ "detail": detail }))).into_response()
  }
}
