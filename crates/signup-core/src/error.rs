//! Error types for `signup-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("activity not found: {0}")]
  ActivityNotFound(String),

  #[error("{email} is already signed up for {activity}")]
  AlreadyEnrolled { activity: String, email: String },

  #[error("{email} is not signed up for {activity}")]
  NotEnrolled { activity: String, email: String },

  #[error("email must not be empty")]
  EmptyEmail,

  #[error("activity name must not be empty")]
  EmptyActivityName,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
