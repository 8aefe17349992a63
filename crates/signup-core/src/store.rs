//! The `ActivityStore` trait.
//!
//! Implemented by storage backends (e.g. `signup-store-memory`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::{collections::BTreeMap, future::Future};

use crate::activity::{Activity, ActivityName, Email, Enrollment, Withdrawal};

/// Abstraction over an activity directory.
///
/// The set of activities is fixed once the store is initialised; only rosters
/// change. Implementations must apply each `enroll`/`withdraw` as a single
/// check-then-mutate step so the one-email-per-roster invariant holds under
/// concurrent callers.
///
/// Backend errors must convert into [`crate::Error`] so callers can tell a
/// missing activity from a roster conflict without knowing the backend.
pub trait ActivityStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  /// Snapshot of every activity keyed by name.
  fn list(
    &self,
  ) -> impl Future<Output = Result<BTreeMap<String, Activity>, Self::Error>>
  + Send
  + '_;

  /// Retrieve a single activity. Returns `None` if the name is unknown.
  fn get<'a>(
    &'a self,
    name: &'a ActivityName,
  ) -> impl Future<Output = Result<Option<Activity>, Self::Error>> + Send + 'a;

  /// Add `email` to the roster of `name`.
  ///
  /// Fails if the activity does not exist or the email is already enrolled.
  /// Capacity is not checked.
  fn enroll(
    &self,
    name: ActivityName,
    email: Email,
  ) -> impl Future<Output = Result<Enrollment, Self::Error>> + Send + '_;

  /// Remove `email` from the roster of `name`.
  ///
  /// Fails if the activity does not exist or the email is not enrolled.
  fn withdraw(
    &self,
    name: ActivityName,
    email: Email,
  ) -> impl Future<Output = Result<Withdrawal, Self::Error>> + Send + '_;
}
