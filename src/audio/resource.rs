use tracing::{debug, warn};

use super::{Cue, SoundId};

/// Load attempts per sound before it is given up on.
pub const MAX_LOAD_ATTEMPTS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loading { attempt: u8 },
    Loaded,
    Failed,
}

/// Load progress of one sound, with bounded retries.
///
/// `Pending -> Loading { 1 } -> Loaded`, or after a failure `Loading { n + 1 }`
/// until [`MAX_LOAD_ATTEMPTS`] is reached, then `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundResource {
    id: SoundId,
    state: LoadState,
}

impl SoundResource {
    pub fn new(id: SoundId) -> Self {
        Self {
            id,
            state: LoadState::Pending,
        }
    }

    pub fn id(&self) -> &SoundId {
        &self.id
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Begin the first load attempt. Returns `false` if loading already began.
    pub fn start(&mut self) -> bool {
        if self.state != LoadState::Pending {
            return false;
        }
        self.state = LoadState::Loading { attempt: 1 };
        true
    }

    pub fn succeed(&mut self) {
        if let LoadState::Loading { attempt } = self.state {
            debug!(sound = %self.id.0, attempt, "sound loaded");
            self.state = LoadState::Loaded;
        }
    }

    /// Record a failed attempt. Returns `true` when another attempt is due.
    pub fn fail(&mut self) -> bool {
        match self.state {
            LoadState::Loading { attempt } if attempt < MAX_LOAD_ATTEMPTS => {
                self.state = LoadState::Loading {
                    attempt: attempt + 1,
                };
                true
            }
            LoadState::Loading { attempt } => {
                warn!(sound = %self.id.0, attempt, "giving up on sound");
                self.state = LoadState::Failed;
                false
            }
            _ => false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// This sound if it loaded, otherwise `fallback`.
    pub fn cue_or(&self, fallback: Cue) -> Cue {
        if self.is_loaded() {
            Cue::Sound(self.id.clone())
        } else {
            fallback
        }
    }
}
