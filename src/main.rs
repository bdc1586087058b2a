use clap::Parser;
use league_client::core::seating;
use league_client::domain::ports::SeatingDirectory;
use league_client::utils::{logger, validation::Validate};
use league_client::{ClientConfig, LeagueClient, LeagueError};
use std::path::PathBuf;

/// Operator tool: fetch the current seating pool and print the table chart
/// the partitioner would produce for it.
#[derive(Debug, Parser)]
#[command(name = "seating-preview")]
#[command(about = "Preview seating tables for the league's current player pool")]
struct Args {
    #[arg(long, help = "Path to a TOML config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Override the configured backend base URL")]
    base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    logger::init_logger(args.verbose || config.verbose);
    tracing::info!("Starting seating-preview");

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = LeagueClient::new(config);
    let players = client.current_players().await?;
    tracing::info!(count = players.len(), "fetched seating pool");

    match seating::partition(&players) {
        Ok(layout) => {
            for (index, table) in layout.tables.iter().enumerate() {
                println!("TABLE {}", index + 1);
                for seat in &table.seats {
                    println!("  {} {}", seat.label, seat.player);
                }
            }
        }
        Err(e @ LeagueError::InvalidPlayerCount { .. }) => {
            // Not fatal: the pool changes as players check in.
            println!("{}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
