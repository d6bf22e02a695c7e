// crates/foodgrid-advisor/src/cli/mod.rs
// CLI module for FOOD-GRID commands

use clap::{Parser, Subcommand};

pub mod ask;
pub mod classify;
pub mod config;

pub use ask::run_ask;
pub use classify::run_classify;
pub use config::run_config;

#[derive(Parser)]
#[command(name = "foodgrid")]
#[command(about = "FOOD-GRID farmer advisory assistant")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a farming question
    Ask {
        /// The question (e.g. "What crops should I grow?")
        #[arg(index = 1)]
        query: String,

        /// Context hint as key=value (e.g. -c soilType=red -c location=Mysuru)
        #[arg(short = 'c', long = "context", value_parser = parse_context_pair)]
        context: Vec<(String, String)>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,

        /// Show which path answered (live model or offline topic)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the topic the offline generator would use (no network)
    Classify {
        #[arg(index = 1)]
        query: String,
    },

    /// Show live-advisory readiness and validate configuration
    Config,
}

/// Parse a `key=value` context hint
pub fn parse_context_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
