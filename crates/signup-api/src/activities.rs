//! Handlers for `/activities` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/activities` | Map of activity name to record |
//! | `POST`   | `/activities/{name}/signup` | `?email` required |
//! | `DELETE` | `/activities/{name}/unregister` | `?email` required |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use signup_core::{
  activity::{Activity, ActivityName, Email},
  store::ActivityStore,
};

use crate::error::ApiError;

/// Body returned by the roster mutation endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
  pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailParams {
  /// Participant email. Absent or blank values are rejected with 422.
  pub email: Option<String>,
}

impl EmailParams {
  fn into_email(self) -> Result<Email, ApiError> {
    let raw = self
      .email
      .ok_or_else(|| ApiError::Validation("email query parameter is required".into()))?;
    Ok(Email::parse(raw)?)
  }
}

fn store_err<E: Into<signup_core::Error>>(e: E) -> ApiError { ApiError::from(e.into()) }

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /activities`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<BTreeMap<String, Activity>>, ApiError>
where
  S: ActivityStore,
{
  let activities = store.list().await.map_err(store_err)?;
  Ok(Json(activities))
}

// ─── Signup ───────────────────────────────────────────────────────────────────

/// `POST /activities/{name}/signup?email=<email>`
pub async fn signup<S>(
  State(store): State<Arc<S>>,
  Path(name): Path<String>,
  Query(params): Query<EmailParams>,
) -> Result<Json<MessageBody>, ApiError>
where
  S: ActivityStore,
{
  let name = ActivityName::parse(name)?;
  let email = params.into_email()?;

  let enrollment = store.enroll(name, email).await.map_err(|e| {
    let e = store_err(e);
    tracing::debug!(error = %e, "signup rejected");
    e
  })?;

  tracing::info!(
    activity = %enrollment.activity,
    email = %enrollment.email,
    "participant signed up",
  );
  Ok(Json(MessageBody {
    message: enrollment.message(),
  }))
}

// ─── Unregister ───────────────────────────────────────────────────────────────

/// `DELETE /activities/{name}/unregister?email=<email>`
pub async fn unregister<S>(
  State(store): State<Arc<S>>,
  Path(name): Path<String>,
  Query(params): Query<EmailParams>,
) -> Result<Json<MessageBody>, ApiError>
where
  S: ActivityStore,
{
  let name = ActivityName::parse(name)?;
  let email = params.into_email()?;

  let withdrawal = store.withdraw(name, email).await.map_err(|e| {
    let e = store_err(e);
    tracing::debug!(error = %e, "unregister rejected");
    e
  })?;

  tracing::info!(
    activity = %withdrawal.activity,
    email = %withdrawal.email,
    "participant unregistered",
  );
  Ok(Json(MessageBody {
    message: withdrawal.message(),
  }))
}
