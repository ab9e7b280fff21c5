//! Error types for carkit

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Car catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog TOML: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No vehicle at index {0}")]
    VehicleNotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts_into_error() {
        let err: Error = CatalogError::Parse("expected a table".to_string()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
        assert_eq!(
            err.to_string(),
            "Catalog error: Failed to parse catalog TOML: expected a table"
        );
    }

    #[test]
    fn test_vehicle_not_found_message() {
        assert_eq!(Error::VehicleNotFound(7).to_string(), "No vehicle at index 7");
    }
}
