//! Error types for the batch geocoder

use std::fmt;

#[derive(Debug)]
pub enum BatchError {
    Config(String),
    Csv(Box<csv::Error>),
    MissingField { row: usize },
    Geocode(mapbox_client::MapboxError),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BatchError::Csv(err) => write!(f, "CSV error: {}", err),
            BatchError::MissingField { row } => write!(f, "Row {} has no first field", row),
            BatchError::Geocode(err) => write!(f, "Geocoding error: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Csv(err) => Some(err.as_ref()),
            BatchError::Geocode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        BatchError::Csv(Box::new(err))
    }
}

impl From<mapbox_client::MapboxError> for BatchError {
    fn from(err: mapbox_client::MapboxError) -> Self {
        BatchError::Geocode(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for BatchError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        BatchError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = BatchError::Config("MAPBOX_API_TOKEN environment variable is required".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration error: MAPBOX_API_TOKEN environment variable is required"
        );
    }

    #[test]
    fn test_missing_field_error_display() {
        let err = BatchError::MissingField { row: 7 };
        assert_eq!(format!("{}", err), "Row 7 has no first field");
    }

    #[test]
    fn test_error_is_debug() {
        let err = BatchError::MissingField { row: 1 };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("MissingField"));
    }
}
