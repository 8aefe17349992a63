//! The built-in activity table every directory starts from.

use std::collections::BTreeMap;

use crate::{
  Result,
  activity::{Activity, Email},
};

const DOMAIN: &str = "mergington.edu";

// (name, description, schedule, max_participants, [participant local parts])
const TABLE: &[(&str, &str, &str, u32, [&str; 2])] = &[
  (
    "Soccer Team",
    "Join the varsity soccer team and compete in regional tournaments",
    "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
    25,
    ["alex", "ryan"],
  ),
  (
    "Swimming Club",
    "Competitive and recreational swimming training",
    "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
    20,
    ["jessica", "kevin"],
  ),
  (
    "Drama Club",
    "Participate in theater productions and improve acting skills",
    "Wednesdays and Fridays, 3:30 PM - 5:30 PM",
    25,
    ["sarah", "matthew"],
  ),
  (
    "Art Studio",
    "Explore various art mediums including painting, drawing, and sculpture",
    "Thursdays, 3:30 PM - 5:30 PM",
    15,
    ["emily", "david"],
  ),
  (
    "Science Club",
    "Conduct experiments and participate in science fairs",
    "Tuesdays, 3:30 PM - 5:00 PM",
    18,
    ["rachel", "andrew"],
  ),
  (
    "Debate Team",
    "Develop critical thinking and public speaking skills through competitive debates",
    "Mondays and Thursdays, 3:30 PM - 5:00 PM",
    16,
    ["jennifer", "christopher"],
  ),
  (
    "Chess Club",
    "Learn strategies and compete in chess tournaments",
    "Fridays, 3:30 PM - 5:00 PM",
    12,
    ["michael", "daniel"],
  ),
  (
    "Programming Class",
    "Learn programming fundamentals and build software projects",
    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
    20,
    ["emma", "sophia"],
  ),
  (
    "Gym Class",
    "Physical education and sports activities",
    "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
    30,
    ["john", "olivia"],
  ),
];

/// Build a fresh copy of the seed table.
pub fn activities() -> Result<BTreeMap<String, Activity>> {
  TABLE
    .iter()
    .map(|(name, description, schedule, max, people)| {
      let participants = people
        .iter()
        .map(|local| Email::parse(format!("{local}@{DOMAIN}")))
        .collect::<Result<Vec<_>>>()?;
      Ok(((*name).to_owned(), Activity {
        description: (*description).to_owned(),
        schedule: (*schedule).to_owned(),
        max_participants: *max,
        participants,
      }))
    })
    .collect()
}

/// The seed table rendered as pretty JSON, in the same shape `GET /activities`
/// returns.
pub fn to_json_pretty() -> Result<String> {
  Ok(serde_json::to_string_pretty(&activities()?)?)
}
