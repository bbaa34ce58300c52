//! Serialized reducer loop over a coalescing [`EventQueue`].
//!
//! A [`Controller`] owns one queue, one published state and one processing
//! task:
//!
//! ```text
//!   enqueue() ──► EventQueue ──► run_loop ──► Reducer::reduce ──► watch::Sender<State>
//!                     ▲                              │
//!                     │                              ▼ effect
//!                     └────── follow-up intent ◄── EffectHandler (own task)
//! ```
//!
//! ## Invariants
//! - Exactly one task reduces intents; state is written only by that task.
//! - Effects never touch state. Their result re-enters through the queue.
//! - After shutdown nothing is delivered: the queue is closed and late
//!   follow-ups from in-flight effects are dropped.

mod effects;
mod error;

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::mvi::{Next, Reducer};
use crate::queue::{EventQueue, EventSubscription};
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};

pub use effects::{EffectHandler, NoEffects};
pub use error::ControllerError;

/// Owner of a reducer's state and its processing loop.
///
/// Intents may be enqueued before [`Controller::start`]; they are buffered
/// and delivered once the loop runs.
pub struct Controller<R: Reducer, H> {
    queue: EventQueue<R::Intent>,
    state_rx: watch::Receiver<R::State>,
    state_tx: Option<watch::Sender<R::State>>,
    effects: Arc<H>,
    shutdown: ShutdownCoordinator,
    processed: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R, H> Controller<R, H>
where
    R: Reducer + Send + 'static,
    H: EffectHandler<Effect = R::Effect, Intent = R::Intent>,
{
    pub fn new(initial: R::State, effects: Arc<H>) -> Self {
        let (state_tx, state_rx) = watch::channel(initial);
        Self {
            queue: EventQueue::new(),
            state_rx,
            state_tx: Some(state_tx),
            effects,
            shutdown: ShutdownCoordinator::new(),
            processed: Arc::new(AtomicU64::new(0)),
            task: None,
            _reducer: PhantomData,
        }
    }

    /// Spawns the reducer loop. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<(), ControllerError> {
        if self.task.is_some() {
            return Err(ControllerError::AlreadyStarted);
        }
        if self.shutdown.is_shutting_down() {
            return Err(ControllerError::ShutDown);
        }

        let subscription = self.queue.subscribe()?;
        let state_tx = self
            .state_tx
            .take()
            .ok_or(ControllerError::AlreadyStarted)?;

        let task = tokio::spawn(run_loop::<R, H>(
            subscription,
            state_tx,
            self.queue.clone(),
            Arc::clone(&self.effects),
            self.shutdown.handle(),
            Arc::clone(&self.processed),
        ));
        self.task = Some(task);
        tracing::debug!("controller started");
        Ok(())
    }

    pub fn enqueue(&self, intent: R::Intent) {
        self.queue.add(intent);
    }

    /// Producer handle for collaborators that enqueue on their own.
    pub fn queue(&self) -> EventQueue<R::Intent> {
        self.queue.clone()
    }

    /// Latest published state.
    pub fn state(&self) -> R::State {
        self.state_rx.borrow().clone()
    }

    /// New observer of the published state (latest-value semantics).
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state_rx.clone()
    }

    /// Number of intents reduced so far.
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Waits until every queued intent is reduced and every effect it spawned
    /// has finished, follow-ups included.
    ///
    /// Returns at once when the loop is not running.
    pub async fn drain(&self) {
        if !self.is_running() {
            return;
        }
        self.queue.wait_idle().await;
    }

    /// Stops the loop, cancels in-flight effects and discards the queue.
    pub async fn stop(&mut self) {
        self.shutdown.signal();
        self.queue.close();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "reducer loop ended abnormally");
            }
        }
    }
}

impl<R: Reducer, H> Drop for Controller<R, H> {
    fn drop(&mut self) {
        self.shutdown.signal();
        self.queue.close();
    }
}

async fn run_loop<R, H>(
    mut subscription: EventSubscription<R::Intent>,
    state_tx: watch::Sender<R::State>,
    queue: EventQueue<R::Intent>,
    effects: Arc<H>,
    shutdown: ShutdownHandle,
    processed: Arc<AtomicU64>,
) where
    R: Reducer,
    H: EffectHandler<Effect = R::Effect, Intent = R::Intent>,
{
    let mut state = state_tx.borrow().clone();

    loop {
        let intent = tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            next = subscription.next() => match next {
                Some(intent) => intent,
                None => break,
            },
        };

        tracing::debug!(?intent, "reducing intent");
        let Next {
            state: next_state,
            effect,
        } = R::reduce(state, intent);
        state = next_state;

        let published = state.clone();
        let changed = state_tx.send_if_modified(|current| {
            if *current == published {
                false
            } else {
                *current = published;
                true
            }
        });
        if changed {
            tracing::info!(state = ?state, "state transition");
        }
        processed.fetch_add(1, Ordering::SeqCst);

        if let Some(effect) = effect {
            tracing::debug!(?effect, "dispatching effect");
            spawn_effect(Arc::clone(&effects), effect, queue.clone(), shutdown.clone());
        }
        subscription.done();
    }

    tracing::debug!("reducer loop stopped");
}

fn spawn_effect<H: EffectHandler>(
    effects: Arc<H>,
    effect: H::Effect,
    queue: EventQueue<H::Intent>,
    shutdown: ShutdownHandle,
) {
    // Taken before the triggering intent is acknowledged.
    let hold = queue.hold();
    tokio::spawn(async move {
        let _hold = hold;
        tokio::select! {
            _ = shutdown.wait() => {
                tracing::debug!("effect cancelled by shutdown");
            }
            follow_up = effects.handle(effect) => {
                if let Some(intent) = follow_up {
                    queue.add(intent);
                }
            }
        }
    });
}
