//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_catalogue;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mvi_queue::data::{FetchError, Product, ProductsRepository, Settings, SettingsError, SettingsRepository};
use mvi_queue::navigation::{NavTarget, Navigator};
use parking_lot::Mutex;
use tokio::sync::{watch, Semaphore};

pub const WAIT: Duration = Duration::from_secs(5);

/// Waits until the published state satisfies `pred`.
pub async fn wait_for_state<S: Clone>(
    states: &mut watch::Receiver<S>,
    pred: impl FnMut(&S) -> bool,
) -> S {
    let state = tokio::time::timeout(WAIT, states.wait_for(pred))
        .await
        .expect("timed out waiting for state")
        .expect("controller dropped its state");
    (*state).clone()
}

/// Polls `check` until it holds.
pub async fn eventually(mut check: impl FnMut() -> bool) {
    let start = std::time::Instant::now();
    while !check() {
        assert!(start.elapsed() < WAIT, "condition not reached in time");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

pub fn product(title: &str) -> Product {
    Product {
        title: title.to_string(),
        price: 1.0,
        ..Default::default()
    }
}

/// Shared, ordered record of collaborator calls.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Products repository whose fetches wait on a gate and answer from a script.
pub struct GatedRepository {
    gate: Semaphore,
    response: Mutex<Result<Vec<Product>, String>>,
    pub fetches: AtomicUsize,
    pub flushes: AtomicUsize,
    log: CallLog,
}

impl GatedRepository {
    /// Fetches block until [`GatedRepository::open`] is called.
    pub fn closed(log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            response: Mutex::new(Ok(vec![product("a"), product("b")])),
            fetches: AtomicUsize::new(0),
            flushes: AtomicUsize::new(0),
            log,
        })
    }

    /// Fetches answer immediately.
    pub fn open_with(log: CallLog, response: Result<Vec<Product>, String>) -> Arc<Self> {
        let repo = Self::closed(log);
        repo.set_response(response);
        repo.open();
        repo
    }

    pub fn open(&self) {
        self.gate.add_permits(Semaphore::MAX_PERMITS / 2);
    }

    pub fn set_response(&self, response: Result<Vec<Product>, String>) {
        *self.response.lock() = response;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductsRepository for GatedRepository {
    async fn get_products(&self) -> Result<Vec<Product>, FetchError> {
        self.log.lock().push("products");
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let _permit = self.gate.acquire().await.expect("gate closed");
        match self.response.lock().clone() {
            Ok(products) if products.is_empty() => Err(FetchError::NoProducts),
            Ok(products) => Ok(products),
            Err(_) => Err(FetchError::UnsuccessfulStatus {
                url: "http://test/products".to_string(),
                status: 503,
            }),
        }
    }

    async fn flush_cache(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory settings that log every initialization.
pub struct MemorySettings {
    current: Mutex<Settings>,
    log: CallLog,
}

impl MemorySettings {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(Settings::default()),
            log,
        })
    }
}

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn initialize(&self) -> Result<Settings, SettingsError> {
        self.log.lock().push("settings");
        let mut current = self.current.lock();
        current.is_initialized = true;
        Ok(*current)
    }

    fn settings(&self) -> Settings {
        *self.current.lock()
    }

    async fn replace(&self, settings: Settings) -> Result<Settings, SettingsError> {
        *self.current.lock() = settings;
        Ok(settings)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub targets: Mutex<Vec<NavTarget>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, target: NavTarget) {
        self.targets.lock().push(target);
    }
}
