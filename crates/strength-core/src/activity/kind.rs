use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::types::{ActivityType, Difficulty, ImportSource};

/// Activity type plus the metadata that type is allowed to carry.
/// Serialized as an internally tagged enum keyed on `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    MemoryAdded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memory_id: Option<String>,
    },
    MemoryImported {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memory_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        import_source: Option<ImportSource>,
    },
    GameCompleted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        game_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        difficulty: Option<Difficulty>,
    },
    MemoryReviewed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memory_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        difficulty: Option<Difficulty>,
    },
    DailyLogin {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        streak_days: Option<u32>,
    },
    GamePerfectScore {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        game_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        difficulty: Option<Difficulty>,
    },
    MemoryShared {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memory_id: Option<String>,
    },
    StreakMaintained {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        streak_days: Option<u32>,
    },
}

impl ActivityKind {
    /// Metadata-free kind for the given type.
    pub fn bare(activity_type: ActivityType) -> Self {
        match activity_type {
            ActivityType::MemoryAdded => Self::MemoryAdded { memory_id: None },
            ActivityType::MemoryImported => Self::MemoryImported {
                memory_id: None,
                import_source: None,
            },
            ActivityType::GameCompleted => Self::GameCompleted {
                game_type: None,
                difficulty: None,
            },
            ActivityType::MemoryReviewed => Self::MemoryReviewed {
                memory_id: None,
                difficulty: None,
            },
            ActivityType::DailyLogin => Self::DailyLogin { streak_days: None },
            ActivityType::GamePerfectScore => Self::GamePerfectScore {
                game_type: None,
                difficulty: None,
            },
            ActivityType::MemoryShared => Self::MemoryShared { memory_id: None },
            ActivityType::StreakMaintained => Self::StreakMaintained { streak_days: None },
        }
    }

    pub fn activity_type(&self) -> ActivityType {
        match self {
            Self::MemoryAdded { .. } => ActivityType::MemoryAdded,
            Self::MemoryImported { .. } => ActivityType::MemoryImported,
            Self::GameCompleted { .. } => ActivityType::GameCompleted,
            Self::MemoryReviewed { .. } => ActivityType::MemoryReviewed,
            Self::DailyLogin { .. } => ActivityType::DailyLogin,
            Self::GamePerfectScore { .. } => ActivityType::GamePerfectScore,
            Self::MemoryShared { .. } => ActivityType::MemoryShared,
            Self::StreakMaintained { .. } => ActivityType::StreakMaintained,
        }
    }

    /// Difficulty, only reachable on games and reviews.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            Self::GameCompleted { difficulty, .. }
            | Self::GamePerfectScore { difficulty, .. }
            | Self::MemoryReviewed { difficulty, .. } => *difficulty,
            _ => None,
        }
    }

    /// Streak length, only reachable on logins and streak events.
    pub fn streak_days(&self) -> Option<u32> {
        match self {
            Self::DailyLogin { streak_days } | Self::StreakMaintained { streak_days } => {
                *streak_days
            }
            _ => None,
        }
    }

    /// Import source, only reachable on imports.
    pub fn import_source(&self) -> Option<ImportSource> {
        match self {
            Self::MemoryImported { import_source, .. } => *import_source,
            _ => None,
        }
    }

    /// Game identifier, only reachable on game events.
    pub fn game_type(&self) -> Option<&str> {
        match self {
            Self::GameCompleted { game_type, .. } | Self::GamePerfectScore { game_type, .. } => {
                game_type.as_deref()
            }
            _ => None,
        }
    }

    /// Memory the activity refers to, if any.
    pub fn memory_id(&self) -> Option<&str> {
        match self {
            Self::MemoryAdded { memory_id }
            | Self::MemoryImported { memory_id, .. }
            | Self::MemoryReviewed { memory_id, .. }
            | Self::MemoryShared { memory_id } => memory_id.as_deref(),
            _ => None,
        }
    }
}

impl From<ActivityType> for ActivityKind {
    fn from(activity_type: ActivityType) -> Self {
        Self::bare(activity_type)
    }
}
