use std::fmt;

use mapbox_client::{Location, MapboxClient};
use tracing::{debug, info};

use crate::error::Result;

/// Candidates requested per address in multi-result mode
const CANDIDATE_LIMIT: u32 = 5;

/// Whether each address resolves to its best match or to all candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMode {
    Single,
    AllCandidates,
}

/// Outcome of one address lookup
#[derive(Debug, Clone)]
pub enum Resolution {
    Single(Option<Location>),
    Candidates(Vec<Location>),
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Single(Some(location)) => write!(f, "{}", location),
            Resolution::Single(None) => write!(f, "no match"),
            Resolution::Candidates(locations) if locations.is_empty() => write!(f, "no match"),
            Resolution::Candidates(locations) => {
                for (i, location) in locations.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", location)?;
                }
                Ok(())
            }
        }
    }
}

/// One input address paired with its lookup outcome
#[derive(Debug, Clone)]
pub struct ResultPair {
    pub address: String,
    pub resolution: Resolution,
}

/// Geocode addresses one at a time, in input order
///
/// The first provider or network failure aborts the remaining batch.
pub async fn geocode_rows(
    client: &MapboxClient,
    addresses: &[String],
    mode: ResultMode,
) -> Result<Vec<ResultPair>> {
    let mut results = Vec::with_capacity(addresses.len());
    for address in addresses {
        let resolution = match mode {
            ResultMode::Single => Resolution::Single(client.geocode(address).await?),
            ResultMode::AllCandidates => {
                Resolution::Candidates(client.geocode_all(address, CANDIDATE_LIMIT).await?)
            }
        };
        debug!(%address, %resolution, "Resolved address");
        results.push(ResultPair {
            address: address.clone(),
            resolution,
        });
    }

    info!("Geocoded {} addresses", results.len());

    Ok(results)
}
