// goal.rs — Goal: one user-tracked objective.
//
// A Goal is either active or completed. The two lifecycle methods below are
// the only way the pair `completed` / `completed_at` changes, which keeps
// `completed == completed_at.is_some()` true for every goal built in-process.
// Goals read back from storage are checked with `is_consistent()`.
//
// The JSON shape is camelCase with `completedAt: null` for active goals, so
// collections written by earlier versions of the app load unchanged.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single goal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Creation time in milliseconds since the Unix epoch. Doubles as the key.
    pub id: i64,

    /// Human-readable title (e.g., "Learn Rust").
    pub title: String,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    pub completed: bool,

    /// Set exactly when `completed` is true.
    #[serde(with = "timestamp::option", default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Create an active goal.
    pub fn new(id: i64, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: created_at.trunc_subsecs(3),
            completed: false,
            completed_at: None,
        }
    }

    /// Mark the goal completed at `at`. Completing twice moves the timestamp.
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at.trunc_subsecs(3));
    }

    /// Return the goal to the active list.
    pub fn restore(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    pub fn is_consistent(&self) -> bool {
        self.completed == self.completed_at.is_some()
    }
}

/// Current time truncated to the precision stored on disk.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(d)?
                .map(|raw| super::parse(&raw))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}
