use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub products: ProductsConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Remote product catalogue settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsConfig {
    /// Base URL of the catalogue API (products are read from `{base_url}/products`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// How long fetched products stay cached, in seconds (default: 900).
    #[serde(default = "default_cache_lifetime")]
    pub cache_lifetime_seconds: u64,
}

/// Settings storage location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Settings file; defaults to `settings.toml` next to the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://fakestoreapi.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_lifetime() -> u64 {
    15 * 60
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            cache_lifetime_seconds: default_cache_lifetime(),
        }
    }
}
