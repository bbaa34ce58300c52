//! Effect handler for the products controller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::controller::EffectHandler;
use crate::data::{ProductsRepository, SettingsRepository};
use crate::navigation::Navigator;

use super::intent::{ProductsIntent, ProductsResponse};
use super::reducer::ProductsEffect;

/// Runs products effects against injected collaborators.
///
/// Repository failures never escape: they become
/// `ProductsResponse::Error` payloads.
pub struct ProductsEffects {
    repository: Arc<dyn ProductsRepository>,
    settings: Arc<dyn SettingsRepository>,
    navigator: Arc<dyn Navigator>,
}

impl ProductsEffects {
    pub fn new(
        repository: Arc<dyn ProductsRepository>,
        settings: Arc<dyn SettingsRepository>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            repository,
            settings,
            navigator,
        }
    }

    async fn fetch(&self) -> ProductsResponse {
        match self.repository.get_products().await {
            Ok(products) => ProductsResponse::Success(products),
            Err(err) => {
                tracing::warn!(error = %err, "products fetch failed");
                ProductsResponse::Error(err.to_string())
            }
        }
    }
}

#[async_trait]
impl EffectHandler for ProductsEffects {
    type Effect = ProductsEffect;
    type Intent = ProductsIntent;

    async fn handle(&self, effect: ProductsEffect) -> Option<ProductsIntent> {
        match effect {
            ProductsEffect::InitializeSettings => {
                match self.settings.initialize().await {
                    Ok(settings) => tracing::debug!(?settings, "settings initialized"),
                    Err(err) => tracing::warn!(error = %err, "settings initialization failed"),
                }
                None
            }
            ProductsEffect::Fetch => Some(ProductsIntent::LoadFinished(self.fetch().await)),
            ProductsEffect::Refresh => {
                self.repository.flush_cache().await;
                Some(ProductsIntent::RefreshFinished(self.fetch().await))
            }
            ProductsEffect::Navigate(target) => {
                self.navigator.navigate_to(target);
                None
            }
        }
    }
}
