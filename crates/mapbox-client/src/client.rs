use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use crate::error::{MapboxError, Result};
use crate::types::{Feature, GeocodeResponse, Location};

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";
const DEFAULT_USER_AGENT: &str = "mapbox-client-rs/0.1";
/// Minimum spacing between consecutive outbound requests
const MIN_REQUEST_SPACING: Duration = Duration::from_millis(200);
/// The forward geocoding endpoint rejects search text over 256 bytes
const MAX_QUERY_BYTES: usize = 256;

/// Mapbox forward geocoding client with request pacing
pub struct MapboxClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    /// Dispatch instant of the most recent request, for pacing
    last_dispatch: Mutex<Option<Instant>>,
}

impl MapboxClient {
    /// Create a new client with default settings
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom API base URL
    pub fn with_base_url(access_token: String, base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.to_string(),
            access_token,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Forward geocode an address, returning the best match only
    ///
    /// Returns `None` when the provider finds no match, or when the
    /// address is empty or whitespace-only (no request is issued).
    ///
    /// # Arguments
    /// * `address` - Free-form search text, e.g. "825 S Milwaukee Ave, Libertyville"
    pub async fn geocode(&self, address: &str) -> Result<Option<Location>> {
        let mut candidates = self.search(address, 1).await?;
        if candidates.is_empty() {
            Ok(None)
        } else {
            Ok(Some(candidates.remove(0)))
        }
    }

    /// Forward geocode an address, returning all candidates
    ///
    /// Candidates are ordered as returned by the provider, best match first.
    ///
    /// # Arguments
    /// * `address` - Free-form search text
    /// * `limit` - Maximum number of candidates to request
    pub async fn geocode_all(&self, address: &str, limit: u32) -> Result<Vec<Location>> {
        self.search(address, limit).await
    }

    async fn search(&self, address: &str, limit: u32) -> Result<Vec<Location>> {
        let query = address.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() > MAX_QUERY_BYTES {
            return Err(MapboxError::InvalidQuery(format!(
                "search text exceeds {} bytes",
                MAX_QUERY_BYTES
            )));
        }

        // Rate limit: wait out the minimum spacing since the last dispatch
        self.pace().await;

        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json?access_token={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            self.access_token,
            limit
        );

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(MapboxError::Http)?;

        if !response.status().is_success() {
            return Err(MapboxError::ApiError(format!(
                "Mapbox returned status {}",
                response.status()
            )));
        }

        let data: GeocodeResponse = response.json().await.map_err(MapboxError::Http)?;
        let locations: Vec<Location> = data.features.into_iter().map(parse_feature).collect();

        debug!(query, matches = locations.len(), "Geocoded address");

        Ok(locations)
    }

    /// Sleep until the minimum request spacing has elapsed, then claim
    /// the current instant as the new dispatch time
    async fn pace(&self) {
        let mut last = self.last_dispatch.lock().await;
        if let Some(prev) = *last {
            sleep_until(prev + MIN_REQUEST_SPACING).await;
        }
        *last = Some(Instant::now());
    }
}

/// Parse a response feature into a [`Location`]
fn parse_feature(feature: Feature) -> Location {
    let [longitude, latitude] = feature.center;
    Location {
        latitude,
        longitude,
        place_name: feature.place_name,
        place_types: feature.place_type,
        relevance: feature.relevance,
    }
}
