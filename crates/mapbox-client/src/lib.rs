//! Mapbox Forward Geocoding Client
//!
//! A Rust client for the [Mapbox Geocoding API](https://docs.mapbox.com/api/search/geocoding/)
//! forward endpoint with built-in request pacing (minimum 0.2 s between
//! consecutive requests).

mod client;
mod error;
mod types;

pub use client::MapboxClient;
pub use error::{MapboxError, Result};
pub use types::Location;
