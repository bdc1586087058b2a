use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid number of players: {count}")]
    InvalidPlayerCount { count: usize },

    #[error("Backend rejected request (status {status}): {message}")]
    BackendRejected { status: i64, message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },
}

impl LeagueError {
    /// True for failures the user can recover from by changing their input,
    /// as opposed to transport or configuration problems.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LeagueError::InvalidPlayerCount { .. } | LeagueError::BackendRejected { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
