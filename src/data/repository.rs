//! Products repository: remote source fronted by an expiring in-memory cache.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::clock::Clock;
use super::error::FetchError;
use super::product::Product;
use super::source::ProductsSource;

/// Capability the products controller depends on.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Cached products if fresh, otherwise a fetch from the source.
    async fn get_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Forget cached products so the next read hits the source.
    async fn flush_cache(&self);
}

struct CacheEntry {
    products: Vec<Product>,
    updated_at: SystemTime,
}

/// In-memory product cache that expires after `lifetime`.
pub struct ProductsCache {
    entry: RwLock<Option<CacheEntry>>,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl ProductsCache {
    pub fn new(lifetime: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entry: RwLock::new(None),
            lifetime,
            clock,
        }
    }

    /// Cached products unless expired. An expired entry is dropped.
    pub fn products(&self) -> Option<Vec<Product>> {
        let now = self.clock.now();
        let mut entry = self.entry.write();
        let expired = match entry.as_ref() {
            None => return None,
            // A clock that went backwards counts as fresh.
            Some(cached) => now
                .duration_since(cached.updated_at)
                .map(|age| age > self.lifetime)
                .unwrap_or(false),
        };

        if expired {
            tracing::debug!("product cache expired");
            *entry = None;
            return None;
        }
        entry.as_ref().map(|cached| cached.products.clone())
    }

    pub fn replace(&self, products: Vec<Product>) {
        *self.entry.write() = Some(CacheEntry {
            products,
            updated_at: self.clock.now(),
        });
    }

    pub fn flush(&self) {
        *self.entry.write() = None;
    }
}

pub struct CachedProductsRepository<S> {
    source: S,
    cache: ProductsCache,
}

impl<S: ProductsSource> CachedProductsRepository<S> {
    pub fn new(source: S, cache: ProductsCache) -> Self {
        Self { source, cache }
    }
}

#[async_trait]
impl<S: ProductsSource> ProductsRepository for CachedProductsRepository<S> {
    async fn get_products(&self) -> Result<Vec<Product>, FetchError> {
        if let Some(products) = self.cache.products().filter(|p| !p.is_empty()) {
            tracing::debug!(count = products.len(), "serving products from cache");
            return Ok(products);
        }

        let products = self.source.fetch().await?;
        self.cache.replace(products.clone());
        Ok(products)
    }

    async fn flush_cache(&self) {
        self.cache.flush();
    }
}
