use std::path::PathBuf;

use crate::model::{PlayerId, Team};

/// Rejections produced by [`MatchEngine`](crate::MatchEngine) commands.
///
/// Every variant is recoverable: a rejected command leaves the match state
/// exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Player name is empty after trimming.
    #[error("player name must not be empty")]
    EmptyName,

    /// The roster already holds a player with this name.
    #[error("{team} roster already has a player named {name:?}")]
    DuplicateName { team: Team, name: String },

    /// The roster has reached its maximum size.
    #[error("{team} roster is full")]
    RosterFull { team: Team },

    /// No player with this id in the roster.
    #[error("player {id} not found in {team} roster")]
    NotFound { team: Team, id: PlayerId },

    /// Rosters can only change before the match starts.
    #[error("rosters cannot change while the match is in progress")]
    RosterLocked,

    /// Both rosters need 5 to 8 players and the match must still be in setup.
    #[error("match cannot start: both teams need between 5 and 8 players")]
    NotReady,

    /// Goals can only be recorded in an active, unlocked match.
    #[error("match is not active")]
    InactiveMatch,

    /// Scorer is not on the credited team's roster.
    #[error("{name:?} is not on the {team} roster")]
    UnknownScorer { team: Team, name: String },

    /// Assistant is the scorer or not on the same roster.
    #[error("{name:?} cannot assist a {team} goal")]
    InvalidAssistant { team: Team, name: String },

    /// Nothing to undo.
    #[error("action log is empty")]
    EmptyLog,
}

pub type Result<T> = std::result::Result<T, MatchError>;

/// Failures of the I/O collaborators around the engine (player directory,
/// export sink, settings store).
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A JSON payload could not be encoded or decoded.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a local file failed.
    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
