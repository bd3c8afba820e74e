use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::{Cue, CuePlayer, SoundId};
use crate::error::ServiceError;
use crate::model::{ActionKind, GameAction, Team};
use crate::settings::SettingsStore;

pub const DEFAULT_VOLUME: f32 = 0.7;

const SOUND_ENABLED_KEY: &str = "soundEnabled";
const VOLUME_KEY: &str = "volume";
const PLAYER_SOUNDS_KEY: &str = "playerSounds";
const TEAM_SOUNDS_KEY: &str = "teamSounds";
const CUSTOM_SOUNDS_KEY: &str = "customSounds";

/// Metadata of an uploaded sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSound {
    pub id: SoundId,
    pub name: String,
    pub file_name: String,
}

/// Sound preferences, loaded from and saved to a [`SettingsStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub enabled: bool,
    #[serde(deserialize_with = "deserialize_volume")]
    volume: f32,
    /// Celebration sound per player name.
    pub player_sounds: BTreeMap<String, SoundId>,
    /// Default sound per team, used when the scorer has none.
    pub team_sounds: BTreeMap<Team, SoundId>,
    pub custom_sounds: Vec<CustomSound>,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: DEFAULT_VOLUME,
            player_sounds: BTreeMap::new(),
            team_sounds: BTreeMap::new(),
            custom_sounds: Vec::new(),
        }
    }
}

impl SoundSettings {
    /// Read every key from `store`. Missing or malformed values keep their
    /// defaults.
    pub fn load(store: &impl SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            enabled: read_key(store, SOUND_ENABLED_KEY).unwrap_or(defaults.enabled),
            volume: read_key::<f32>(store, VOLUME_KEY)
                .map(clamp_volume)
                .unwrap_or(defaults.volume),
            player_sounds: read_key(store, PLAYER_SOUNDS_KEY).unwrap_or(defaults.player_sounds),
            team_sounds: read_key(store, TEAM_SOUNDS_KEY).unwrap_or(defaults.team_sounds),
            custom_sounds: read_key(store, CUSTOM_SOUNDS_KEY).unwrap_or(defaults.custom_sounds),
        }
    }

    pub fn save(&self, store: &mut impl SettingsStore) -> Result<(), ServiceError> {
        store.set(SOUND_ENABLED_KEY, serde_json::to_string(&self.enabled)?)?;
        store.set(VOLUME_KEY, serde_json::to_string(&self.volume)?)?;
        store.set(PLAYER_SOUNDS_KEY, serde_json::to_string(&self.player_sounds)?)?;
        store.set(TEAM_SOUNDS_KEY, serde_json::to_string(&self.team_sounds)?)?;
        store.set(CUSTOM_SOUNDS_KEY, serde_json::to_string(&self.custom_sounds)?)?;
        Ok(())
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the volume, clamped to `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    /// Add or replace an uploaded sound.
    pub fn add_custom_sound(&mut self, sound: CustomSound) {
        self.custom_sounds.retain(|s| s.id != sound.id);
        self.custom_sounds.push(sound);
    }

    /// Delete an uploaded sound and every assignment that points at it.
    pub fn remove_custom_sound(&mut self, id: &SoundId) -> Option<CustomSound> {
        let index = self.custom_sounds.iter().position(|s| &s.id == id)?;
        self.player_sounds.retain(|_, sound| sound != id);
        self.team_sounds.retain(|_, sound| sound != id);
        Some(self.custom_sounds.remove(index))
    }

    /// Cue for a goal: the scorer's own sound, else the team default, else
    /// the stock team cue. `None` while sound is disabled.
    pub fn goal_cue(&self, team: Team, scorer: &str) -> Option<Cue> {
        if !self.enabled {
            return None;
        }
        let cue = self
            .player_sounds
            .get(scorer)
            .or_else(|| self.team_sounds.get(&team))
            .map_or(Cue::Team(team), |sound| Cue::Sound(sound.clone()));
        Some(cue)
    }

    pub fn own_goal_cue(&self, team: Team) -> Option<Cue> {
        if !self.enabled {
            return None;
        }
        let cue = self
            .team_sounds
            .get(&team)
            .map_or(Cue::Team(team), |sound| Cue::Sound(sound.clone()));
        Some(cue)
    }

    pub fn cue_for(&self, action: &GameAction) -> Option<Cue> {
        match action.kind {
            ActionKind::Goal => self.goal_cue(action.team, &action.scorer),
            ActionKind::OwnGoal => self.own_goal_cue(action.team),
        }
    }

    /// Play the cue for a freshly recorded action, if sound is enabled.
    pub fn announce(&self, player: &impl CuePlayer, action: &GameAction) {
        if let Some(cue) = self.cue_for(action) {
            player.play(&cue, self.volume);
        }
    }
}

fn read_key<T: DeserializeOwned>(store: &impl SettingsStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed setting");
            None
        }
    }
}

fn deserialize_volume<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    f32::deserialize(deserializer).map(clamp_volume)
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        DEFAULT_VOLUME
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::{ActionId, OWN_GOAL_SCORER};
    use crate::settings::MemorySettingsStore;

    #[derive(Default)]
    struct RecordingPlayer {
        played: RefCell<Vec<(Cue, f32)>>,
    }

    impl CuePlayer for RecordingPlayer {
        fn play(&self, cue: &Cue, volume: f32) {
            self.played.borrow_mut().push((cue.clone(), volume));
        }
    }

    fn goal(team: Team, scorer: &str) -> GameAction {
        GameAction {
            id: ActionId(1),
            timestamp: "20:15".to_string(),
            kind: ActionKind::Goal,
            team,
            scorer: scorer.to_string(),
            assistant: None,
        }
    }

    fn custom(id: &str) -> CustomSound {
        CustomSound {
            id: SoundId::new(id),
            name: id.to_string(),
            file_name: format!("{id}.mp3"),
        }
    }

    #[test]
    fn test_goal_cue_prefers_player_then_team_sound() {
        let mut settings = SoundSettings::default();
        assert_eq!(
            settings.goal_cue(Team::Yellow, "Adam S."),
            Some(Cue::Team(Team::Yellow))
        );

        settings
            .team_sounds
            .insert(Team::Yellow, SoundId::new("yellow-horn"));
        settings
            .player_sounds
            .insert("Adam S.".to_string(), SoundId::new("adam"));

        assert_eq!(
            settings.goal_cue(Team::Yellow, "Adam S."),
            Some(Cue::Sound(SoundId::new("adam")))
        );
        assert_eq!(
            settings.goal_cue(Team::Yellow, "Kamil R."),
            Some(Cue::Sound(SoundId::new("yellow-horn")))
        );
        assert_eq!(
            settings.goal_cue(Team::Blue, "Kamil R."),
            Some(Cue::Team(Team::Blue))
        );
    }

    #[test]
    fn test_disabled_sound_produces_no_cue() {
        let settings = SoundSettings {
            enabled: false,
            ..SoundSettings::default()
        };
        let player = RecordingPlayer::default();
        settings.announce(&player, &goal(Team::Blue, "Marcin P."));
        assert!(player.played.borrow().is_empty());
        assert_eq!(settings.own_goal_cue(Team::Blue), None);
    }

    #[test]
    fn test_announce_uses_volume_and_ignores_player_sound_for_own_goal() {
        let mut settings = SoundSettings::default();
        settings.set_volume(0.25);
        settings
            .player_sounds
            .insert(OWN_GOAL_SCORER.to_string(), SoundId::new("never"));
        let own_goal = GameAction {
            kind: ActionKind::OwnGoal,
            scorer: OWN_GOAL_SCORER.to_string(),
            ..goal(Team::Blue, "")
        };

        let player = RecordingPlayer::default();
        settings.announce(&player, &own_goal);
        assert_eq!(*player.played.borrow(), vec![(Cue::Team(Team::Blue), 0.25)]);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut settings = SoundSettings::default();
        settings.set_volume(3.0);
        assert_eq!(settings.volume(), 1.0);
        settings.set_volume(-1.0);
        assert_eq!(settings.volume(), 0.0);
        settings.set_volume(f32::NAN);
        assert_eq!(settings.volume(), DEFAULT_VOLUME);
    }

    #[test]
    fn test_deserialized_volume_is_clamped() {
        let json = r#"{
            "enabled": true,
            "volume": 5.0,
            "player_sounds": {},
            "team_sounds": {},
            "custom_sounds": []
        }"#;
        let settings: SoundSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.volume(), 1.0);

        let player = RecordingPlayer::default();
        settings.announce(&player, &goal(Team::Yellow, "Adam S."));
        assert_eq!(*player.played.borrow(), vec![(Cue::Team(Team::Yellow), 1.0)]);
    }

    #[test]
    fn test_removing_custom_sound_clears_assignments() {
        let mut settings = SoundSettings::default();
        settings.add_custom_sound(custom("trabka"));
        settings.add_custom_sound(custom("trabka"));
        assert_eq!(settings.custom_sounds.len(), 1);

        let id = SoundId::new("trabka");
        settings.player_sounds.insert("Jan B.".to_string(), id.clone());
        settings.team_sounds.insert(Team::Blue, id.clone());

        let removed = settings.remove_custom_sound(&id).unwrap();
        assert_eq!(removed.file_name, "trabka.mp3");
        assert!(settings.player_sounds.is_empty());
        assert!(settings.team_sounds.is_empty());
        assert_eq!(settings.remove_custom_sound(&id), None);
    }

    #[test]
    fn test_save_then_load_restores_settings() {
        let mut settings = SoundSettings::default();
        settings.enabled = false;
        settings.set_volume(0.4);
        settings.add_custom_sound(custom("gwizdek"));
        settings
            .team_sounds
            .insert(Team::Blue, SoundId::new("gwizdek"));
        settings
            .player_sounds
            .insert("Łukasz C.".to_string(), SoundId::new("gwizdek"));

        let mut store = MemorySettingsStore::new();
        settings.save(&mut store).unwrap();

        assert_eq!(store.get("teamSounds").as_deref(), Some(r#"{"blue":"gwizdek"}"#));
        assert_eq!(SoundSettings::load(&store), settings);
    }

    #[test]
    fn test_load_ignores_malformed_values() {
        let mut store = MemorySettingsStore::new();
        store.set("soundEnabled", "yes please".to_string()).unwrap();
        store.set("volume", "7".to_string()).unwrap();
        store.set("teamSounds", r#"{"green":"x"}"#.to_string()).unwrap();

        let settings = SoundSettings::load(&store);
        assert!(settings.enabled);
        assert_eq!(settings.volume(), 1.0);
        assert!(settings.team_sounds.is_empty());
    }
}
