use std::fmt;

use serde::Deserialize;

/// A geocoded place returned by the forward geocoding endpoint
#[derive(Debug, Clone)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Full formatted place name, e.g. street, city, region, country
    pub place_name: String,
    /// Feature types, most specific first, e.g. "address", "poi"
    pub place_types: Vec<String>,
    /// Provider confidence in the match, 0.0 to 1.0
    pub relevance: Option<f64>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.place_name, self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub(crate) features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feature {
    pub(crate) place_name: String,
    #[serde(default)]
    pub(crate) place_type: Vec<String>,
    /// Coordinates in [longitude, latitude] order
    pub(crate) center: [f64; 2],
    pub(crate) relevance: Option<f64>,
}
