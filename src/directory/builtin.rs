use chrono::{DateTime, Utc};

use super::{DirectoryPlayer, PlayerDirectory};
use crate::error::ServiceError;

/// Roster offered when no remote directory is reachable.
pub const BUILTIN_PLAYER_NAMES: [&str; 34] = [
    "Adam S.",
    "Adam T.",
    "Marcin P.",
    "Bartek G.",
    "Damian K.",
    "Dawid M.",
    "Filip W.",
    "Grzegorz N.",
    "Hubert L.",
    "Igor Z.",
    "Jakub R.",
    "Jan B.",
    "Kamil D.",
    "Karol F.",
    "Krzysiek J.",
    "Łukasz C.",
    "Maciek H.",
    "Mateusz O.",
    "Michał A.",
    "Mikołaj E.",
    "Norbert U.",
    "Olek P.",
    "Patryk S.",
    "Paweł T.",
    "Piotr W.",
    "Radek K.",
    "Rafał M.",
    "Sebastian B.",
    "Szymon G.",
    "Tomek Z.",
    "Wiktor R.",
    "Wojtek L.",
    "Zbyszek N.",
    "Żaneta K.",
];

/// The built-in roster as directory entries, ids starting at 1.
pub fn builtin_players() -> Vec<DirectoryPlayer> {
    named_players(BUILTIN_PLAYER_NAMES.iter().map(|name| name.to_string()))
}

fn named_players(names: impl IntoIterator<Item = String>) -> Vec<DirectoryPlayer> {
    names
        .into_iter()
        .zip(1..)
        .map(|(name, id)| DirectoryPlayer {
            id,
            name,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
        .collect()
}

/// In-memory directory serving a fixed list of names.
#[derive(Debug, Clone)]
pub struct StaticPlayerDirectory {
    players: Vec<DirectoryPlayer>,
}

impl StaticPlayerDirectory {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            players: named_players(names),
        }
    }
}

impl Default for StaticPlayerDirectory {
    fn default() -> Self {
        Self {
            players: builtin_players(),
        }
    }
}

impl PlayerDirectory for StaticPlayerDirectory {
    async fn players(&self) -> Result<Vec<DirectoryPlayer>, ServiceError> {
        Ok(self.players.clone())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_builtin_roster_has_unique_names_and_ids() {
        let players = builtin_players();
        assert_eq!(players.len(), 34);
        assert!(players.iter().map(|p| &p.name).all_unique());
        assert_eq!(players.first().map(|p| p.id), Some(1));
        assert_eq!(players.last().map(|p| p.id), Some(34));
    }
}
