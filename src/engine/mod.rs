mod shared;

pub use shared::SharedEngine;

use std::fmt;

use chrono::{Local, NaiveTime};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{MatchError, Result};
use crate::export;
use crate::model::{
    ActionId, ActionKind, GameAction, MatchPhase, MatchView, Player, PlayerId, Scoreboard, Team,
    OWN_GOAL_SCORER,
};

/// Fewest players a team may start a match with.
pub const MIN_ROSTER_SIZE: usize = 5;
/// Most players a roster may hold.
pub const MAX_ROSTER_SIZE: usize = 8;

const TIMESTAMP_FORMAT: &str = "%H:%M";

type Clock = Box<dyn Fn() -> NaiveTime + Send + Sync>;

/// In-memory state of one pickup match.
///
/// Owns both rosters, the action log and the phase. The scoreboard is never
/// stored: it is recomputed from the log, so it always equals the number of
/// logged actions per team.
///
/// # Examples
///
/// ```
/// use matchday::{MatchEngine, Team};
///
/// let mut engine = MatchEngine::new();
/// for i in 1..=5 {
///     engine.add_player(Team::Yellow, &format!("Yellow {i}")).unwrap();
///     engine.add_player(Team::Blue, &format!("Blue {i}")).unwrap();
/// }
/// engine.start_match().unwrap();
/// engine.record_goal(Team::Yellow, "Yellow 1", Some("Yellow 2")).unwrap();
/// assert_eq!(engine.scoreboard().yellow, 1);
/// ```
pub struct MatchEngine {
    yellow: Vec<Player>,
    blue: Vec<Player>,
    actions: Vec<GameAction>,
    phase: MatchPhase,
    locked: bool,
    next_player_id: u32,
    next_action_id: u64,
    clock: Clock,
}

impl MatchEngine {
    /// Create an empty match in setup, timestamping actions with local time.
    pub fn new() -> Self {
        Self::with_clock(|| Local::now().time())
    }

    /// Create an empty match that reads action times from `clock`.
    pub fn with_clock(clock: impl Fn() -> NaiveTime + Send + Sync + 'static) -> Self {
        Self {
            yellow: Vec::new(),
            blue: Vec::new(),
            actions: Vec::new(),
            phase: MatchPhase::Setup,
            locked: false,
            next_player_id: 1,
            next_action_id: 1,
            clock: Box::new(clock),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Whether goal recording is paused in an active match.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn roster(&self, team: Team) -> &[Player] {
        match team {
            Team::Yellow => &self.yellow,
            Team::Blue => &self.blue,
        }
    }

    fn roster_mut(&mut self, team: Team) -> &mut Vec<Player> {
        match team {
            Team::Yellow => &mut self.yellow,
            Team::Blue => &mut self.blue,
        }
    }

    pub fn player(&self, team: Team, id: PlayerId) -> Option<&Player> {
        self.roster(team).iter().find(|p| p.id == id)
    }

    /// Logged actions, oldest first.
    pub fn actions(&self) -> &[GameAction] {
        &self.actions
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::from_actions(&self.actions)
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            phase: self.phase,
            locked: self.locked,
            scoreboard: self.scoreboard(),
            yellow: self.yellow.clone(),
            blue: self.blue.clone(),
            actions: self.actions.clone(),
        }
    }

    /// Register a player on `team`'s roster during setup.
    ///
    /// The name is trimmed before it is stored and compared.
    pub fn add_player(&mut self, team: Team, name: &str) -> Result<Player> {
        if self.phase != MatchPhase::Setup {
            return Err(MatchError::RosterLocked);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(MatchError::EmptyName);
        }

        let roster = self.roster(team);
        if roster.len() >= MAX_ROSTER_SIZE {
            return Err(MatchError::RosterFull { team });
        }
        if roster.iter().any(|p| p.name == name) {
            return Err(MatchError::DuplicateName {
                team,
                name: name.to_string(),
            });
        }

        let player = Player::new(PlayerId(self.next_player_id), name);
        self.next_player_id += 1;
        self.roster_mut(team).push(player.clone());
        debug!(%team, id = %player.id, name, "player added");
        Ok(player)
    }

    /// Take a player off `team`'s roster. Only allowed during setup.
    pub fn remove_player(&mut self, team: Team, id: PlayerId) -> Result<Player> {
        if self.phase != MatchPhase::Setup {
            return Err(MatchError::RosterLocked);
        }
        let roster = self.roster_mut(team);
        let index = roster
            .iter()
            .position(|p| p.id == id)
            .ok_or(MatchError::NotFound { team, id })?;
        let player = roster.remove(index);
        debug!(%team, %id, name = %player.name, "player removed");
        Ok(player)
    }

    pub fn can_start(&self) -> bool {
        let ready = |len: usize| (MIN_ROSTER_SIZE..=MAX_ROSTER_SIZE).contains(&len);
        ready(self.yellow.len()) && ready(self.blue.len())
    }

    pub fn start_match(&mut self) -> Result<()> {
        if self.phase != MatchPhase::Setup || !self.can_start() {
            return Err(MatchError::NotReady);
        }
        self.phase = MatchPhase::Active;
        self.locked = false;
        debug!(
            yellow = self.yellow.len(),
            blue = self.blue.len(),
            "match started"
        );
        Ok(())
    }

    /// Lock an active match so goals are rejected until [`resume`](Self::resume).
    pub fn pause(&mut self) -> Result<()> {
        if self.phase != MatchPhase::Active {
            return Err(MatchError::InactiveMatch);
        }
        self.locked = true;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        if self.phase != MatchPhase::Active {
            return Err(MatchError::InactiveMatch);
        }
        self.locked = false;
        Ok(())
    }

    fn ensure_recording(&self) -> Result<()> {
        if self.phase == MatchPhase::Active && !self.locked {
            Ok(())
        } else {
            Err(MatchError::InactiveMatch)
        }
    }

    /// Credit a goal to `scorer` on `team`, optionally assisted by a teammate.
    ///
    /// A blank `assistant` counts as no assistant.
    pub fn record_goal(
        &mut self,
        team: Team,
        scorer: &str,
        assistant: Option<&str>,
    ) -> Result<GameAction> {
        self.ensure_recording()?;

        let scorer = scorer.trim();
        let assistant = assistant.map(str::trim).filter(|a| !a.is_empty());
        let roster = self.roster(team);

        let scorer_index = roster
            .iter()
            .position(|p| p.name == scorer)
            .ok_or_else(|| MatchError::UnknownScorer {
                team,
                name: scorer.to_string(),
            })?;
        let assistant_index = assistant
            .map(|name| {
                roster
                    .iter()
                    .position(|p| p.name == name)
                    .filter(|&i| i != scorer_index)
                    .ok_or_else(|| MatchError::InvalidAssistant {
                        team,
                        name: name.to_string(),
                    })
            })
            .transpose()?;

        let action = self.push_action(
            ActionKind::Goal,
            team,
            scorer.to_string(),
            assistant.map(str::to_string),
        );

        let roster = self.roster_mut(team);
        roster[scorer_index].goals += 1;
        if let Some(i) = assistant_index {
            roster[i].assists += 1;
        }

        debug!(
            %team,
            id = action.id.0,
            scorer,
            assistant = assistant.unwrap_or_default(),
            "goal recorded"
        );
        Ok(action)
    }

    /// Log an own goal. The score of `team` itself is incremented.
    pub fn record_own_goal(&mut self, team: Team) -> Result<GameAction> {
        self.ensure_recording()?;
        let action = self.push_action(ActionKind::OwnGoal, team, OWN_GOAL_SCORER.to_string(), None);
        debug!(%team, id = action.id.0, "own goal recorded");
        Ok(action)
    }

    fn push_action(
        &mut self,
        kind: ActionKind,
        team: Team,
        scorer: String,
        assistant: Option<String>,
    ) -> GameAction {
        let action = GameAction {
            id: ActionId(self.next_action_id),
            timestamp: (self.clock)().format(TIMESTAMP_FORMAT).to_string(),
            kind,
            team,
            scorer,
            assistant,
        };
        self.next_action_id += 1;
        self.actions.push(action.clone());
        action
    }

    /// Remove the most recent action and revert the stats it added.
    pub fn undo_last(&mut self) -> Result<GameAction> {
        let action = self.actions.pop().ok_or(MatchError::EmptyLog)?;

        if action.kind == ActionKind::Goal {
            let roster = self.roster_mut(action.team);
            if let Some(scorer) = roster.iter_mut().find(|p| p.name == action.scorer) {
                scorer.goals = scorer.goals.saturating_sub(1);
            }
            if let Some(name) = &action.assistant {
                if let Some(assistant) = roster.iter_mut().find(|p| &p.name == name) {
                    assistant.assists = assistant.assists.saturating_sub(1);
                }
            }
        }

        debug!(team = %action.team, id = action.id.0, kind = %action.kind, "action undone");
        Ok(action)
    }

    /// Clear the log and every counter, keeping roster membership, and go
    /// back to setup.
    pub fn reset_match(&mut self) {
        self.actions.clear();
        self.phase = MatchPhase::Setup;
        self.locked = false;
        for team in Team::iter() {
            for player in self.roster_mut(team) {
                player.goals = 0;
                player.assists = 0;
            }
        }
        debug!("match reset");
    }

    /// Human-readable match log; see [`export::build_export_summary`].
    pub fn build_export_summary(&self, date_label: &str) -> String {
        export::build_export_summary(&self.view(), date_label)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEngine")
            .field("phase", &self.phase)
            .field("locked", &self.locked)
            .field("yellow", &self.yellow)
            .field("blue", &self.blue)
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}
