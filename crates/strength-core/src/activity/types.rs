use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The 8 activity type variants. Closed set: adding a variant changes the
/// diversity factor's denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    MemoryAdded,
    MemoryImported,
    GameCompleted,
    MemoryReviewed,
    DailyLogin,
    GamePerfectScore,
    MemoryShared,
    StreakMaintained,
}

impl ActivityType {
    /// Total number of activity types.
    pub const COUNT: usize = crate::constants::ACTIVITY_TYPE_COUNT;

    /// All variants for iteration.
    pub const ALL: [ActivityType; 8] = [
        Self::MemoryAdded,
        Self::MemoryImported,
        Self::GameCompleted,
        Self::MemoryReviewed,
        Self::DailyLogin,
        Self::GamePerfectScore,
        Self::MemoryShared,
        Self::StreakMaintained,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MemoryAdded => "memory_added",
            Self::MemoryImported => "memory_imported",
            Self::GameCompleted => "game_completed",
            Self::MemoryReviewed => "memory_reviewed",
            Self::DailyLogin => "daily_login",
            Self::GamePerfectScore => "game_perfect_score",
            Self::MemoryShared => "memory_shared",
            Self::StreakMaintained => "streak_maintained",
        }
    }

    /// Whether this type is emitted by a game.
    pub fn is_game(self) -> bool {
        matches!(self, Self::GameCompleted | Self::GamePerfectScore)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not one of the 8 activity types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

/// Difficulty reported by games and reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Where imported content came from. Only `Collaboration` counts toward
/// social engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ImportSource {
    File,
    Url,
    Clipboard,
    Collaboration,
    Other,
}
