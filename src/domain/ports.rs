use crate::domain::model::{PresentPlayer, ScoreSubmission};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn submit_path(&self) -> &str;
}

/// Read-only view of the seating pool.
#[async_trait]
pub trait SeatingDirectory: Send + Sync {
    async fn current_players(&self) -> Result<Vec<PresentPlayer>>;
    async fn current_tables(&self) -> Result<Vec<Vec<String>>>;
}

/// Mutations of the seating pool. Every call maps a nonzero backend status
/// to `LeagueError::BackendRejected`.
#[async_trait]
pub trait SeatingRoster: Send + Sync {
    async fn add_player(&self, name: &str) -> Result<()>;
    async fn remove_player(&self, name: &str) -> Result<()>;
    async fn prioritize_player(&self, name: &str, priority: bool) -> Result<()>;
    async fn clear_players(&self) -> Result<()>;
    async fn regen_tables(&self) -> Result<()>;
}

/// The league roster feeding the player selects.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    async fn players(&self) -> Result<Vec<String>>;
}

#[async_trait]
pub trait ScoreTransport: Send + Sync {
    async fn submit(&self, submission: &ScoreSubmission) -> Result<()>;
}
