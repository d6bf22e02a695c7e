// crates/foodgrid-advisor/src/main.rs
// FOOD-GRID - farmer advisory assistant

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use foodgrid::config::FoodGridConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (global first, then project - first value wins)
    let _ = dotenvy::from_path(FoodGridConfig::config_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Keep stdout clean for answers; diagnostics go to stderr
    let log_level = match &cli.command {
        Commands::Ask { verbose: true, .. } | Commands::Config => Level::INFO,
        Commands::Ask { .. } | Commands::Classify { .. } => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Ask {
            query,
            context,
            json,
            verbose,
        } => cli::run_ask(query, context, json, verbose).await?,
        Commands::Classify { query } => cli::run_classify(query)?,
        Commands::Config => cli::run_config()?,
    }

    Ok(())
}
