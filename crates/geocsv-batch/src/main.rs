//! geocsv-batch - batch address geocoding over delimited input
//!
//! Reads the first field of each row of a CSV file, resolves each address
//! through the Mapbox forward geocoding API with paced requests, and prints
//! the (address, result) pairs to standard output in input order.

mod batch;
mod config;
mod error;
mod rows;

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::batch::{geocode_rows, ResultMode};
use crate::config::Config;
use crate::error::Result;
use crate::rows::read_rows;
use mapbox_client::MapboxClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("geocsv_batch=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment; fails here, before any I/O,
    // when the access token is missing
    let config = Config::from_env()?;
    info!("Input: {}", config.input_file);
    match (config.start_row, config.end_row) {
        (None, None) => info!("Processing all rows"),
        (start, end) => info!(
            "Processing rows {} through {}",
            start.map_or_else(|| "start".to_string(), |s| s.to_string()),
            end.map_or_else(|| "end".to_string(), |e| e.to_string()),
        ),
    }

    let addresses = read_rows(
        Path::new(&config.input_file),
        config.start_row,
        config.end_row,
    )?;
    info!("Read {} addresses", addresses.len());

    let client = MapboxClient::new(config.access_token.clone());
    let mode = if config.all_candidates {
        ResultMode::AllCandidates
    } else {
        ResultMode::Single
    };

    let results = geocode_rows(&client, &addresses, mode).await?;

    for pair in &results {
        println!("{} -> {}", pair.address, pair.resolution);
    }

    Ok(())
}
