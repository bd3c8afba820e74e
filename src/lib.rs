//! Scorekeeping for pickup football matches.
//!
//! [`MatchEngine`] holds the rosters, the action log and the match phase;
//! the remaining modules are the collaborators around it: the player
//! directory, the export sink, audio cues and the settings store.

pub use config::DirectoryConfig;
pub use engine::{MatchEngine, SharedEngine, MAX_ROSTER_SIZE, MIN_ROSTER_SIZE};
pub use error::{MatchError, Result, ServiceError};
pub use export::{build_export_summary, encode_with_bom, export_filename};
pub use model::*;

pub mod audio;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod settings;
