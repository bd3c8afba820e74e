use tracing::{debug, instrument};

use super::{DirectoryPlayer, PlayerDirectory};
use crate::config::DirectoryConfig;
use crate::error::ServiceError;

/// Player directory served over HTTP as a JSON array at `<base_url>/players`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), matchday::ServiceError> {
/// use matchday::directory::{load_players_or_fallback, HttpPlayerDirectory};
/// use matchday::DirectoryConfig;
///
/// let directory = HttpPlayerDirectory::new(&DirectoryConfig::default())?;
/// let players = load_players_or_fallback(&directory).await;
/// println!("{} players to pick from", players.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpPlayerDirectory {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPlayerDirectory {
    /// Create a directory client from `config`.
    pub fn new(config: &DirectoryConfig) -> Result<Self, ServiceError> {
        Ok(Self::with_client(
            config.build_client()?,
            config.base_url.clone(),
        ))
    }

    /// Create a directory client using the provided [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
        }
    }

    fn players_url(&self) -> String {
        format!("{}/players", self.base_url.trim_end_matches('/'))
    }
}

impl PlayerDirectory for HttpPlayerDirectory {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn players(&self) -> Result<Vec<DirectoryPlayer>, ServiceError> {
        let url = self.players_url();
        debug!(url, "fetching player directory");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::ResponseBody {
                url: url.clone(),
                source: e,
            })?;

        let players = parse_players(&body)?;
        debug!(count = players.len(), "parsed player directory");
        Ok(players)
    }
}

fn parse_players(body: &str) -> Result<Vec<DirectoryPlayer>, ServiceError> {
    Ok(serde_json::from_str(body)?)
}
