use serde::{Deserialize, Serialize};

use super::Team;

/// Scorer recorded for own goals, which have no scoring player.
pub const OWN_GOAL_SCORER: &str = "Samobój";

/// Creation-ordered identifier of a logged action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ActionId(pub u64);

/// Kind of score event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Goal,
    OwnGoal,
}

/// One entry of the append-only action log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    pub id: ActionId,
    /// Local wall-clock time of recording, `HH:MM`.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Team whose score the action increments.
    pub team: Team,
    pub scorer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant: Option<String>,
}

impl GameAction {
    pub fn is_own_goal(&self) -> bool {
        self.kind == ActionKind::OwnGoal
    }
}

/// Score per team, derived from the action log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub yellow: u32,
    pub blue: u32,
}

impl Scoreboard {
    /// Count every logged action towards the team it names.
    pub fn from_actions(actions: &[GameAction]) -> Self {
        actions.iter().fold(Self::default(), |mut board, action| {
            match action.team {
                Team::Yellow => board.yellow += 1,
                Team::Blue => board.blue += 1,
            }
            board
        })
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Yellow => self.yellow,
            Team::Blue => self.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u64, kind: ActionKind, team: Team) -> GameAction {
        GameAction {
            id: ActionId(id),
            timestamp: "18:00".to_string(),
            kind,
            team,
            scorer: OWN_GOAL_SCORER.to_string(),
            assistant: None,
        }
    }

    #[test]
    fn test_scoreboard_counts_goals_and_own_goals_per_team() {
        let actions = vec![
            action(1, ActionKind::Goal, Team::Yellow),
            action(2, ActionKind::OwnGoal, Team::Yellow),
            action(3, ActionKind::Goal, Team::Blue),
        ];
        let board = Scoreboard::from_actions(&actions);
        assert_eq!(board, Scoreboard { yellow: 2, blue: 1 });
        assert_eq!(board.get(Team::Blue), 1);
    }

    #[test]
    fn test_action_serializes_kind_as_type() {
        let json = serde_json::to_value(action(7, ActionKind::OwnGoal, Team::Blue)).unwrap();
        assert_eq!(json["type"], "own_goal");
        assert_eq!(json["team"], "blue");
        assert!(json.get("assistant").is_none());
    }
}
