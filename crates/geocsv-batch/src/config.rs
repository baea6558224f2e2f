use std::env;

use crate::error::{BatchError, Result};

/// Environment variable holding the Mapbox access token
pub const TOKEN_ENV_VAR: &str = "MAPBOX_API_TOKEN";

const DEFAULT_INPUT_FILE: &str = "sample_addresses.txt";

/// Run configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub input_file: String,
    /// 1-based inclusive lower row bound, unbounded if unset
    pub start_row: Option<usize>,
    /// 1-based inclusive upper row bound, unbounded if unset
    pub end_row: Option<usize>,
    /// Request all candidates per address instead of the best match
    pub all_candidates: bool,
}

impl Config {
    /// Parse configuration from environment variables
    ///
    /// Fails before any file or network I/O when the access token is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_token = get(TOKEN_ENV_VAR)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                BatchError::Config(format!("{} environment variable is required", TOKEN_ENV_VAR))
            })?;

        let input_file = get("INPUT_FILE").unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string());

        let start_row = get("START_ROW").and_then(|s| s.parse::<usize>().ok());
        let end_row = get("END_ROW").and_then(|s| s.parse::<usize>().ok());

        let all_candidates = get("ALL_CANDIDATES")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            access_token,
            input_file,
            start_row,
            end_row,
            all_candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = Config::from_lookup(env_of(&[])).unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
        assert!(format!("{}", err).contains(TOKEN_ENV_VAR));
    }

    #[test]
    fn test_empty_token_is_fatal() {
        let err = Config::from_lookup(env_of(&[(TOKEN_ENV_VAR, "")])).unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(env_of(&[(TOKEN_ENV_VAR, "pk.test")])).unwrap();
        assert_eq!(config.access_token, "pk.test");
        assert_eq!(config.input_file, DEFAULT_INPUT_FILE);
        assert!(config.start_row.is_none());
        assert!(config.end_row.is_none());
        assert!(!config.all_candidates);
    }

    #[test]
    fn test_row_bounds_from_env() {
        let config = Config::from_lookup(env_of(&[
            (TOKEN_ENV_VAR, "pk.test"),
            ("INPUT_FILE", "addresses.csv"),
            ("START_ROW", "10"),
            ("END_ROW", "15"),
        ]))
        .unwrap();
        assert_eq!(config.input_file, "addresses.csv");
        assert_eq!(config.start_row, Some(10));
        assert_eq!(config.end_row, Some(15));
    }

    #[test]
    fn test_unparseable_bound_means_unbounded() {
        let config = Config::from_lookup(env_of(&[
            (TOKEN_ENV_VAR, "pk.test"),
            ("START_ROW", "ten"),
        ]))
        .unwrap();
        assert!(config.start_row.is_none());
    }

    #[test]
    fn test_all_candidates_flag() {
        let config = Config::from_lookup(env_of(&[
            (TOKEN_ENV_VAR, "pk.test"),
            ("ALL_CANDIDATES", "true"),
        ]))
        .unwrap();
        assert!(config.all_candidates);
    }
}
