use serde::{Deserialize, Serialize};

/// Coarse lifecycle of the single match session.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchPhase {
    /// Rosters are being assembled; no goals can be recorded.
    #[default]
    Setup,
    /// The match is running; rosters are frozen.
    Active,
}
