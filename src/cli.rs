//! CLI commands for lotofacil-api.
//!
//! Supports the API server mode, a cache updater, and offline suggestions
//! computed from the cache file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cache;
use crate::config::AppConfig;
use crate::fetch;
use crate::period::Period;
use crate::stats;
use crate::types::SuggestionsResponse;

#[derive(Parser)]
#[command(name = "lotofacil-api")]
#[command(version, about = "Lotofácil number suggestions API and CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },

    /// Download the full draw history and write the local cache file
    Update {
        /// Destination file (defaults to the configured cache file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute suggestions offline from the cache file
    Suggest {
        /// Analysis period (last_month, last_week, last_10, all)
        #[arg(short = 'P', long, default_value = "all")]
        period: String,

        /// Cache file to read (defaults to the configured cache file)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

/// Fetch the full history and persist it for offline use.
pub async fn run_update(output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let dest = output.unwrap_or_else(|| PathBuf::from(&config.source.cache_file));

    eprintln!("Fetching results from {}...", config.source.results_url);
    let client = reqwest::Client::new();
    let records = fetch::fetch_raw_draws(&client, &config.source).await?;

    if records.is_empty() {
        anyhow::bail!("remote API returned no draws");
    }

    cache::store_raw_draws(&dest, &records)?;
    eprintln!("Done! Saved {} draws to {}", records.len(), dest.display());

    Ok(())
}

/// Compute both suggestion strategies from the cached history.
pub async fn run_suggest(
    period: String,
    input: Option<PathBuf>,
    format: String,
) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let path = input.unwrap_or_else(|| PathBuf::from(&config.source.cache_file));

    let draws = fetch::load_cached_draws(&path)?;
    eprintln!("Loaded {} draws from {}", draws.len(), path.display());

    let period = Period::parse(&period);
    let response = stats::suggestions(&draws, period)
        .ok_or_else(|| anyhow::anyhow!("no draws in the selected period"))?;

    match format.as_str() {
        "table" => print_table(&response),
        "json" => println!("{}", serde_json::to_string_pretty(&response)?),
        _ => {
            eprintln!("Unknown format: {}. Using JSON.", format);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Print suggestion results in table format.
fn print_table(response: &SuggestionsResponse) {
    println!("Period: {}", response.period);
    println!();

    println!("=== Strategy 1: Hot Columns ===");
    for (col, chunk) in response.strategy1.chunks(5).enumerate() {
        let nums: Vec<String> = chunk.iter().map(|n| format!("{:02}", n)).collect();
        println!("  Column {}: {}", col + 1, nums.join(" "));
    }
    println!();

    println!("=== Strategy 2: Cold Numbers ===");
    let nums: Vec<String> = response.strategy2.iter().map(|n| format!("{:02}", n)).collect();
    println!("  {}", nums.join(" "));
}
