use serde::{Deserialize, Serialize};

use super::{GameAction, MatchPhase, Player, Scoreboard, Team};

/// Snapshot of the whole match state, as handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub phase: MatchPhase,
    pub locked: bool,
    pub scoreboard: Scoreboard,
    pub yellow: Vec<Player>,
    pub blue: Vec<Player>,
    pub actions: Vec<GameAction>,
}

impl MatchView {
    pub fn roster(&self, team: Team) -> &[Player] {
        match team {
            Team::Yellow => &self.yellow,
            Team::Blue => &self.blue,
        }
    }
}
