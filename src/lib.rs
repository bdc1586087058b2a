pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::LeagueClient;
pub use config::ClientConfig;
pub use core::{editor::GameEditor, ledger::ScoreLedger, seating::partition};
pub use utils::error::{LeagueError, Result};
