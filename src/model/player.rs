use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a player within the current match.
///
/// Unrelated to any player directory id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rostered player with cumulative match stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub goals: u32,
    pub assists: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            goals: 0,
            assists: 0,
        }
    }

    /// Whether the player contributed a goal or an assist.
    pub fn has_stats(&self) -> bool {
        self.goals > 0 || self.assists > 0
    }
}
