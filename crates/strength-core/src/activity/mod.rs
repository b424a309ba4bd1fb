pub mod kind;
pub mod types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use kind::ActivityKind;
pub use types::{ActivityType, Difficulty, ImportSource, UnknownActivityType};

/// One immutable record of a user action relevant to engagement scoring.
///
/// Fields are private so a record cannot change after creation; read them
/// through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(from = "ActivityRecord")]
#[ts(export)]
pub struct Activity {
    /// UUID v4 identifier.
    id: String,
    /// Activity type together with the metadata that type may carry.
    kind: ActivityKind,
    /// When the action happened.
    timestamp: DateTime<Utc>,
    /// Producer-supplied magnitude, always >= 0.
    value: f64,
}

impl Activity {
    /// Create a new activity with a fresh id. Negative or NaN values become 0.
    pub fn new(kind: ActivityKind, timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            timestamp,
            value: sanitize_value(value),
        }
    }

    /// Create an activity with a caller-chosen id (replayed or imported records).
    pub fn with_id(
        id: impl Into<String>,
        kind: ActivityKind,
        timestamp: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            timestamp,
            value: sanitize_value(value),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    pub fn activity_type(&self) -> ActivityType {
        self.kind.activity_type()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Wire shape of [`Activity`]. Decoded records pass through the same value
/// sanitizing as [`Activity::with_id`].
#[derive(Deserialize)]
struct ActivityRecord {
    id: String,
    kind: ActivityKind,
    timestamp: DateTime<Utc>,
    value: f64,
}

impl From<ActivityRecord> for Activity {
    fn from(record: ActivityRecord) -> Self {
        Self::with_id(record.id, record.kind, record.timestamp, record.value)
    }
}

fn sanitize_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
