//! Remote product catalogue.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ProductsConfig;

use super::error::FetchError;
use super::product::{Product, ProductRecord};

/// Where products come from when the cache is cold.
#[async_trait]
pub trait ProductsSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Product>, FetchError>;
}

/// Fetches `GET {base_url}/products` and parses the JSON array.
pub struct HttpProductsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductsSource {
    pub fn new(config: &ProductsConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|source| FetchError::ClientSetup { source })?;
        Ok(Self {
            client,
            url: format!("{}/products", config.base_url.trim_end_matches('/')),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductsSource for HttpProductsSource {
    async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        let transport = |source| FetchError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnsuccessfulStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        let records: Vec<ProductRecord> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode { source })?;
        tracing::debug!(count = records.len(), url = %self.url, "fetched products");

        let products: Vec<Product> = records.into_iter().map(ProductRecord::parse).collect();
        if products.is_empty() {
            return Err(FetchError::NoProducts);
        }
        Ok(products)
    }
}
