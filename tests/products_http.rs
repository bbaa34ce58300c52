//! HTTP catalogue source and the products controller end to end.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::mock_catalogue::{MockCatalogue, TWO_PRODUCTS};
use common::*;
use mvi_queue::config::ProductsConfig;
use mvi_queue::data::{
    CachedProductsRepository, FetchError, HttpProductsSource, ProductsCache, ProductsSource,
    SystemClock,
};
use mvi_queue::products::{self, ProductsEffects, ProductsIntent, ProductsState};

fn config_for(catalogue: &MockCatalogue) -> ProductsConfig {
    ProductsConfig {
        base_url: format!("{}/", catalogue.base_url()),
        timeout_seconds: 5,
        cache_lifetime_seconds: 900,
    }
}

#[tokio::test]
async fn fetch_parses_products() {
    let catalogue = MockCatalogue::start(StatusCode::OK, TWO_PRODUCTS).await;
    let source = HttpProductsSource::new(&config_for(&catalogue)).unwrap();
    assert_eq!(source.url(), format!("{}/products", catalogue.base_url()));

    let products = source.fetch().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Backpack");
    assert_eq!(products[0].category, "bags");
    assert_eq!(products[1].title, "T-Shirt");
    assert!(products[1].image.is_empty());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let catalogue = MockCatalogue::start(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let source = HttpProductsSource::new(&config_for(&catalogue)).unwrap();

    match source.fetch().await {
        Err(FetchError::UnsuccessfulStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected UnsuccessfulStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_catalogue_is_no_products() {
    let catalogue = MockCatalogue::start(StatusCode::OK, "[]").await;
    let source = HttpProductsSource::new(&config_for(&catalogue)).unwrap();
    assert!(matches!(source.fetch().await, Err(FetchError::NoProducts)));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let catalogue = MockCatalogue::start(StatusCode::OK, "{\"not\": \"a list\"}").await;
    let source = HttpProductsSource::new(&config_for(&catalogue)).unwrap();
    assert!(matches!(source.fetch().await, Err(FetchError::Decode { .. })));
}

#[tokio::test]
async fn controller_loads_then_refresh_bypasses_cache() {
    let catalogue = MockCatalogue::start(StatusCode::OK, TWO_PRODUCTS).await;
    let config = config_for(&catalogue);
    let repository = CachedProductsRepository::new(
        HttpProductsSource::new(&config).unwrap(),
        ProductsCache::new(Duration::from_secs(900), Arc::new(SystemClock)),
    );
    let effects = ProductsEffects::new(
        Arc::new(repository),
        MemorySettings::new(call_log()),
        Arc::new(RecordingNavigator::default()),
    );

    let controller = products::launch(effects).unwrap();
    let mut states = controller.subscribe();
    let state = wait_for_state(&mut states, |s| s.is_settled()).await;
    assert_eq!(state.products().len(), 2);
    assert_eq!(catalogue.hits(), 1);

    // Settings init, first load, its completion.
    eventually(|| controller.processed() == 3).await;

    // Retry reads through the warm cache.
    controller.enqueue(ProductsIntent::RetryProducts);
    eventually(|| controller.processed() == 5).await;
    assert!(controller.state().is_settled());
    assert_eq!(catalogue.hits(), 1);

    // Refresh flushes first.
    controller.enqueue(ProductsIntent::RefreshProducts);
    eventually(|| controller.processed() == 7).await;
    assert_eq!(controller.state().products().len(), 2);
    assert_eq!(catalogue.hits(), 2);
}

#[tokio::test]
async fn unreachable_catalogue_ends_in_error_state() {
    let config = ProductsConfig {
        // Reserved port on localhost; nothing listens there.
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        cache_lifetime_seconds: 900,
    };
    let repository = CachedProductsRepository::new(
        HttpProductsSource::new(&config).unwrap(),
        ProductsCache::new(Duration::from_secs(900), Arc::new(SystemClock)),
    );
    let effects = ProductsEffects::new(
        Arc::new(repository),
        MemorySettings::new(call_log()),
        Arc::new(RecordingNavigator::default()),
    );

    let controller = products::launch(effects).unwrap();
    let mut states = controller.subscribe();
    let state = wait_for_state(&mut states, |s| s.is_settled()).await;
    assert!(matches!(state, ProductsState::Error { .. }));
}
