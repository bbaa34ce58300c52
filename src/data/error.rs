use std::path::PathBuf;

use thiserror::Error;

/// Errors from fetching the product catalogue.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {source}")]
    ClientSetup {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unsuccessful HTTP status {status} from '{url}'")]
    UnsuccessfulStatus { url: String, status: u16 },

    #[error("Failed to decode products: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("No products available")]
    NoProducts,
}

/// Errors from loading or persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
