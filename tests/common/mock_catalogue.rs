//! Mock product catalogue server.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TWO_PRODUCTS: &str = r#"[
    {"id": 1, "title": "Backpack", "price": 109.95, "description": "Fits a laptop", "category": "bags",
     "image": "https://example.com/1.jpg", "rating": {"rate": 3.9, "count": 120}},
    {"id": 2, "title": "T-Shirt", "price": 22.3}
]"#;

/// A running mock catalogue.
pub struct MockCatalogue {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockCatalogue {
    /// Serves `GET /products` with the given status and body.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let app = Router::new().route(
            "/products",
            get(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalogue");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock catalogue");
        });

        Self { addr, hits, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockCatalogue {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
