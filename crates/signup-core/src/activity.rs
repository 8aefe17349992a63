//! Activity records and the validated values used to address them.
//!
//! An [`Activity`] is keyed by its [`ActivityName`] in the directory; the name
//! is not repeated inside the record. Rosters are plain ordered lists of
//! [`Email`]s with set semantics enforced on insert.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─── Boundary values ─────────────────────────────────────────────────────────

/// A participant email address.
///
/// Only presence is checked: surrounding whitespace is trimmed and the
/// remainder must be non-empty. No format validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
  pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
    let trimmed = raw.as_ref().trim();
    if trimmed.is_empty() {
      return Err(Error::EmptyEmail);
    }
    Ok(Self(trimmed.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for Email {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::parse(value) }
}

impl From<Email> for String {
  fn from(value: Email) -> Self { value.0 }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// The name of an activity, exactly as it appears in the directory.
///
/// Names are matched verbatim; no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityName(String);

impl ActivityName {
  pub fn parse(raw: impl Into<String>) -> Result<Self> {
    let raw = raw.into();
    if raw.is_empty() {
      return Err(Error::EmptyActivityName);
    }
    Ok(Self(raw))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ActivityName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Activity ────────────────────────────────────────────────────────────────

/// One extracurricular offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub description:      String,
  pub schedule:         String,
  /// Stated capacity. Informational only; enrollment does not check it.
  pub max_participants: u32,
  /// Enrolled emails in signup order. Each email appears at most once.
  pub participants:     Vec<Email>,
}

impl Activity {
  pub fn is_enrolled(&self, email: &Email) -> bool {
    self.participants.contains(email)
  }

  /// Append `email` to the roster. Returns `false` if it was already there.
  pub fn enroll(&mut self, email: Email) -> bool {
    if self.is_enrolled(&email) {
      return false;
    }
    self.participants.push(email);
    true
  }

  /// Remove `email` from the roster, keeping the order of everyone else.
  /// Returns `false` if it was not there.
  pub fn withdraw(&mut self, email: &Email) -> bool {
    match self.participants.iter().position(|p| p == email) {
      Some(idx) => {
        self.participants.remove(idx);
        true
      }
      None => false,
    }
  }

  pub fn is_over_capacity(&self) -> bool {
    self.participants.len() > self.max_participants as usize
  }
}

// ─── Receipts ────────────────────────────────────────────────────────────────

/// Returned by a successful [`ActivityStore::enroll`](crate::store::ActivityStore::enroll).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
  pub activity: ActivityName,
  pub email:    Email,
}

impl Enrollment {
  pub fn message(&self) -> String {
    format!("Signed up {} for {}", self.email, self.activity)
  }
}

/// Returned by a successful [`ActivityStore::withdraw`](crate::store::ActivityStore::withdraw).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
  pub activity: ActivityName,
  pub email:    Email,
}

impl Withdrawal {
  pub fn message(&self) -> String {
    format!("Unregistered {} from {}", self.email, self.activity)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn chess() -> Activity {
    Activity {
      description:      "Learn strategies".into(),
      schedule:         "Fridays".into(),
      max_participants: 2,
      participants:     vec![
        Email::parse("michael@mergington.edu").unwrap(),
        Email::parse("daniel@mergington.edu").unwrap(),
      ],
    }
  }

  #[test]
  fn email_rejects_blank_input() {
    assert!(matches!(Email::parse(""), Err(Error::EmptyEmail)));
    assert!(matches!(Email::parse("   "), Err(Error::EmptyEmail)));
  }

  #[test]
  fn email_trims_but_does_not_validate_format() {
    let email = Email::parse("  not-an-address ").unwrap();
    assert_eq!(email.as_str(), "not-an-address");
  }

  #[test]
  fn activity_name_is_verbatim() {
    let name = ActivityName::parse(" Chess Club").unwrap();
    assert_eq!(name.as_str(), " Chess Club");
    assert!(matches!(
      ActivityName::parse(""),
      Err(Error::EmptyActivityName)
    ));
  }

  #[test]
  fn enroll_appends_and_rejects_duplicates() {
    let mut a = chess();
    let new = Email::parse("new@mergington.edu").unwrap();
    assert!(a.enroll(new.clone()));
    assert_eq!(a.participants.last(), Some(&new));
    assert!(!a.enroll(new.clone()));
    assert_eq!(a.participants.iter().filter(|p| **p == new).count(), 1);
  }

  #[test]
  fn enroll_ignores_capacity() {
    let mut a = chess();
    assert!(a.enroll(Email::parse("third@mergington.edu").unwrap()));
    assert!(a.is_over_capacity());
  }

  #[test]
  fn withdraw_preserves_order_of_others() {
    let mut a = chess();
    a.enroll(Email::parse("x@mergington.edu").unwrap());
    assert!(a.withdraw(&Email::parse("michael@mergington.edu").unwrap()));
    let left: Vec<&str> = a.participants.iter().map(Email::as_str).collect();
    assert_eq!(left, ["daniel@mergington.edu", "x@mergington.edu"]);
    assert!(!a.withdraw(&Email::parse("michael@mergington.edu").unwrap()));
  }

  #[test]
  fn record_json_shape() {
    let json = serde_json::to_value(chess()).unwrap();
    assert_eq!(json["max_participants"], 2);
    assert_eq!(json["participants"][0], "michael@mergington.edu");
    assert!(json.get("description").is_some());
    assert!(json.get("schedule").is_some());
  }
}
