use crate::domain::model::{PresentPlayer, ScoreSubmission, StatusResponse};
use crate::domain::ports::{
    ConfigProvider, PlayerDirectory, ScoreTransport, SeatingDirectory, SeatingRoster,
};
use crate::utils::error::{LeagueError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// reqwest-backed implementation of every backend port. One instance per
/// page; all calls are fire-and-forget with respect to ledger state, so no
/// retry logic lives here.
pub struct LeagueClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

/// Wire shape of `currenttables.json`.
#[derive(Debug, Deserialize)]
struct TablesResponse {
    status: String,
    #[serde(default)]
    tables: Vec<Vec<String>>,
    #[serde(default)]
    message: Option<String>,
}

impl<C: ConfigProvider> LeagueClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching from league backend");
        let response = self.client.get(&url).send().await?;
        tracing::debug!(status = %response.status(), "backend response");
        Ok(response.json().await?)
    }

    async fn post_status(&self, path: &str, form: &[(&str, String)]) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(%url, "posting to league backend");
        let response: StatusResponse = self.client.post(&url).form(form).send().await?.json().await?;
        if response.status != 0 {
            return Err(LeagueError::BackendRejected {
                status: response.status,
                message: response
                    .error
                    .unwrap_or_else(|| "request rejected".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<C: ConfigProvider> SeatingDirectory for LeagueClient<C> {
    async fn current_players(&self) -> Result<Vec<PresentPlayer>> {
        // The pool endpoint answers with [name, priority-flag] pairs.
        let raw: Vec<(String, i64)> = self.get_json("/seating/currentplayers.json").await?;
        Ok(raw
            .into_iter()
            .map(|(name, priority)| PresentPlayer {
                name,
                priority: priority != 0,
            })
            .collect())
    }

    async fn current_tables(&self) -> Result<Vec<Vec<String>>> {
        let response: TablesResponse = self.get_json("/seating/currenttables.json").await?;
        if response.status != "success" {
            return Err(LeagueError::BackendRejected {
                status: 1,
                message: response
                    .message
                    .unwrap_or_else(|| "no current tables".to_string()),
            });
        }
        Ok(response.tables)
    }
}

#[async_trait]
impl<C: ConfigProvider> SeatingRoster for LeagueClient<C> {
    async fn add_player(&self, name: &str) -> Result<()> {
        self.post_status("/seating/addcurrentplayer", &[("player", name.to_string())])
            .await
    }

    async fn remove_player(&self, name: &str) -> Result<()> {
        self.post_status("/seating/removeplayer", &[("player", name.to_string())])
            .await
    }

    async fn prioritize_player(&self, name: &str, priority: bool) -> Result<()> {
        self.post_status(
            "/seating/prioritizeplayer",
            &[
                ("player", name.to_string()),
                ("priority", if priority { "1" } else { "0" }.to_string()),
            ],
        )
        .await
    }

    async fn clear_players(&self) -> Result<()> {
        self.post_status("/seating/clearcurrentplayers", &[]).await
    }

    async fn regen_tables(&self) -> Result<()> {
        self.post_status("/seating/regentables", &[]).await
    }
}

#[async_trait]
impl<C: ConfigProvider> PlayerDirectory for LeagueClient<C> {
    async fn players(&self) -> Result<Vec<String>> {
        self.get_json("/seating/players.json").await
    }
}

#[async_trait]
impl<C: ConfigProvider> ScoreTransport for LeagueClient<C> {
    /// Posts the finished game. The backend expects a form body whose
    /// `scores` field holds the JSON-encoded entries array.
    async fn submit(&self, submission: &ScoreSubmission) -> Result<()> {
        let scores = serde_json::to_string(&submission.scores)?;
        tracing::info!(players = submission.scores.len(), "submitting game");
        self.post_status(self.config.submit_path(), &[("scores", scores)])
            .await
    }
}
