//! [`MemoryStore`] — the in-memory implementation of [`ActivityStore`].

use std::{collections::BTreeMap, sync::Arc};

use signup_core::{
  activity::{Activity, ActivityName, Email, Enrollment, Withdrawal},
  seed,
  store::ActivityStore,
};
use tokio::sync::RwLock;

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An activity directory held entirely in process memory.
///
/// Cloning is cheap; clones share the same directory. Reads take the shared
/// lock, roster mutations take the exclusive lock for their whole
/// check-then-mutate step.
#[derive(Clone, Debug)]
pub struct MemoryStore {
  activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl MemoryStore {
  /// Build a store over an explicit activity table.
  pub fn new(activities: BTreeMap<String, Activity>) -> Self {
    Self {
      activities: Arc::new(RwLock::new(activities)),
    }
  }

  /// Build a store initialised from the built-in seed table.
  pub fn seeded() -> Result<Self> {
    Ok(Self::new(seed::activities()?))
  }
}

// ─── ActivityStore impl ──────────────────────────────────────────────────────

impl ActivityStore for MemoryStore {
  type Error = Error;

  async fn list(&self) -> Result<BTreeMap<String, Activity>> {
    Ok(self.activities.read().await.clone())
  }

  async fn get(&self, name: &ActivityName) -> Result<Option<Activity>> {
    Ok(self.activities.read().await.get(name.as_str()).cloned())
  }

  async fn enroll(&self, name: ActivityName, email: Email) -> Result<Enrollment> {
    let mut activities = self.activities.write().await;
    let activity = activities
      .get_mut(name.as_str())
      .ok_or_else(|| Error::ActivityNotFound(name.to_string()))?;

    if !activity.enroll(email.clone()) {
      return Err(Error::AlreadyEnrolled {
        activity: name.to_string(),
        email:    email.to_string(),
      });
    }

    if activity.is_over_capacity() {
      tracing::debug!(
        activity = %name,
        enrolled = activity.participants.len(),
        max = activity.max_participants,
        "roster exceeds stated capacity",
      );
    }

    Ok(Enrollment {
      activity: name,
      email,
    })
  }

  async fn withdraw(&self, name: ActivityName, email: Email) -> Result<Withdrawal> {
    let mut activities = self.activities.write().await;
    let activity = activities
      .get_mut(name.as_str())
      .ok_or_else(|| Error::ActivityNotFound(name.to_string()))?;

    if !activity.withdraw(&email) {
      return Err(Error::NotEnrolled {
        activity: name.to_string(),
        email:    email.to_string(),
      });
    }

    Ok(Withdrawal {
      activity: name,
      email,
    })
  }
}
