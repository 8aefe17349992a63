//! Error type for `signup-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] signup_core::Error),

  #[error("activity not found: {0}")]
  ActivityNotFound(String),

  #[error("{email} is already signed up for {activity}")]
  AlreadyEnrolled { activity: String, email: String },

  #[error("{email} is not signed up for {activity}")]
  NotEnrolled { activity: String, email: String },
}

impl From<Error> for signup_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(e) => e,
      Error::ActivityNotFound(name) => signup_core::Error::ActivityNotFound(name),
      Error::AlreadyEnrolled { activity, email } => {
        signup_core::Error::AlreadyEnrolled { activity, email }
      }
      Error::NotEnrolled { activity, email } => {
        signup_core::Error::NotEnrolled { activity, email }
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
