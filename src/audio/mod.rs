mod resource;
mod sound_settings;

pub use resource::{LoadState, SoundResource, MAX_LOAD_ATTEMPTS};
pub use sound_settings::{CustomSound, SoundSettings, DEFAULT_VOLUME};

use serde::{Deserialize, Serialize};

use crate::model::Team;

/// Identifier of a playable sound (built-in or uploaded).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundId(pub String);

impl SoundId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// What to play after a score event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    /// The team's stock celebration.
    Team(Team),
    /// A specific sound.
    Sound(SoundId),
}

/// Plays cues. Fire-and-forget: failures stay inside the player.
pub trait CuePlayer {
    fn play(&self, cue: &Cue, volume: f32);
}

/// Cue player that plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: &Cue, _volume: f32) {}
}
