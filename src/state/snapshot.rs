//! Activities Snapshot
//!
//! The point-in-time view of every activity returned by `GET /activities`.
//! The service sends a JSON object keyed by activity name; key order is the
//! display order, so the snapshot keeps entries in the order they arrived.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Details of a single activity as served by the API
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    /// Remaining capacity. Negative only if the server overfilled the activity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Ordered mapping from activity name to its details
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    entries: Vec<(String, ActivityDetails)>,
}

impl ActivitySnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in server order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityDetails)> {
        self.entries.iter().map(|(name, details)| (name.as_str(), details))
    }

    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, details)| details)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityDetails> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| entry == name)
            .map(|(_, details)| details)
    }

    /// Insert or replace an activity. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, details: ActivityDetails) {
        let name = name.into();
        match self.entries.iter_mut().find(|(entry, _)| *entry == name) {
            Some((_, existing)) => *existing = details,
            None => self.entries.push((name, details)),
        }
    }
}

impl FromIterator<(String, ActivityDetails)> for ActivitySnapshot {
    fn from_iter<I: IntoIterator<Item = (String, ActivityDetails)>>(iter: I) -> Self {
        let mut snapshot = ActivitySnapshot::default();
        for (name, details) in iter {
            snapshot.insert(name, details);
        }
        snapshot
    }
}

impl Serialize for ActivitySnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, details) in &self.entries {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivitySnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ActivitySnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity names to activity details")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut snapshot = ActivitySnapshot::default();
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    snapshot.insert(name, details);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}
