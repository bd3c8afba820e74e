mod builtin;
mod http;

pub use builtin::{builtin_players, StaticPlayerDirectory, BUILTIN_PLAYER_NAMES};
pub use http::HttpPlayerDirectory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::warn;

use crate::error::ServiceError;
use crate::model::{MatchView, Team};

/// A player known to the directory, offered in the "add player" picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPlayer {
    pub id: u32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Source of the ordered list of known players.
#[allow(async_fn_in_trait)]
pub trait PlayerDirectory {
    async fn players(&self) -> Result<Vec<DirectoryPlayer>, ServiceError>;
}

/// Fetch the directory, falling back to the built-in roster on any error so
/// setup is never blocked.
pub async fn load_players_or_fallback<D: PlayerDirectory>(directory: &D) -> Vec<DirectoryPlayer> {
    match directory.players().await {
        Ok(players) => players,
        Err(e) => {
            warn!(error = %e, "player directory unavailable, using built-in roster");
            builtin_players()
        }
    }
}

/// Directory players not yet on either roster, in directory order.
pub fn unpicked<'a>(players: &'a [DirectoryPlayer], view: &MatchView) -> Vec<&'a DirectoryPlayer> {
    players
        .iter()
        .filter(|candidate| {
            !Team::iter().any(|team| view.roster(team).iter().any(|p| p.name == candidate.name))
        })
        .collect()
}
