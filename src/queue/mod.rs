//! Coalescing, priority-aware event queue with a single consumer.
//!
//! Producers call [`EventQueue::add`] from any thread. The single
//! [`EventSubscription`] pulls intents one at a time with
//! [`EventSubscription::next`].
//!
//! ```text
//! Producer A ──┐
//! Producer B ──┼──► add() ──► [ lock: coalesce into Backlog ] ──► notify
//! Effect     ──┘                                                   │
//!                                                                  ▼
//!                            EventSubscription::next() ◄── [ lock: pop front ]
//! ```
//!
//! ## Rules
//! - **Coalescing**: at most one pending intent per variant; a newer intent
//!   of a queued variant replaces the older one in place.
//! - **Priority**: a top-priority intent whose variant is not queued goes to
//!   the head.
//! - **Lossless delivery**: an accepted intent stays in the backlog until the
//!   subscriber pops it, unless coalescing supersedes it first.
//! - **Buffered before subscribe**: intents added before the subscriber
//!   attaches are kept.
//! - **Closed queue drops**: once closed, `add` discards intents silently.
//! - **Idle**: empty backlog, no intent in flight with the subscriber and no
//!   outstanding [`QueueHold`]. [`EventQueue::wait_idle`] waits for it.

mod backlog;

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::Notify;

use crate::mvi::Intent;

pub use backlog::{Backlog, Placement};

/// Errors returned when attaching the subscriber.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("event queue already has a subscriber")]
    AlreadySubscribed,

    #[error("event queue is closed")]
    Closed,
}

struct QueueInner<E> {
    backlog: Backlog<E>,
    subscribed: bool,
    closed: bool,
    /// The subscriber popped an intent and has not asked for the next one.
    in_flight: bool,
    holds: usize,
}

impl<E> QueueInner<E> {
    fn is_idle(&self) -> bool {
        self.backlog.is_empty() && !self.in_flight && self.holds == 0
    }
}

struct Shared<E> {
    inner: Mutex<QueueInner<E>>,
    notify: Notify,
    idle: Notify,
}

/// Producer-side handle. Cheap to clone; all clones feed the same backlog.
pub struct EventQueue<E> {
    shared: Arc<Shared<E>>,
}

impl<E> Clone for EventQueue<E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<E: Intent> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(QueueInner {
                    backlog: Backlog::new(),
                    subscribed: false,
                    closed: false,
                    in_flight: false,
                    holds: 0,
                }),
                notify: Notify::new(),
                idle: Notify::new(),
            }),
        }
    }

    /// Coalesces `intent` into the backlog and wakes the subscriber.
    ///
    /// Never blocks beyond the backlog lock.
    pub fn add(&self, intent: E) {
        {
            let mut inner = self.shared.inner.lock();
            if inner.closed {
                tracing::trace!(?intent, "event queue closed, dropping intent");
                return;
            }
            let placement = inner.backlog.insert(intent);
            tracing::debug!(?placement, pending = inner.backlog.len(), "intent enqueued");
        }
        self.shared.notify.notify_one();
    }

    /// Alias for [`EventQueue::add`].
    pub fn enqueue(&self, intent: E) {
        self.add(intent);
    }

    /// Attaches the single subscriber.
    pub fn subscribe(&self) -> Result<EventSubscription<E>, QueueError> {
        let mut inner = self.shared.inner.lock();
        if inner.closed {
            return Err(QueueError::Closed);
        }
        if inner.subscribed {
            return Err(QueueError::AlreadySubscribed);
        }
        inner.subscribed = true;
        Ok(EventSubscription {
            shared: Arc::clone(&self.shared),
        })
    }

    /// Closes the queue and discards anything still pending.
    pub fn close(&self) {
        close_shared(&self.shared);
    }

    pub fn is_closed(&self) -> bool {
        self.shared.inner.lock().closed
    }

    pub fn len(&self) -> usize {
        self.shared.inner.lock().backlog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.inner.lock().backlog.is_empty()
    }

    /// True when nothing is queued, in flight or held.
    pub fn is_idle(&self) -> bool {
        self.shared.inner.lock().is_idle()
    }

    /// Keeps the queue from reporting idle until the hold is dropped.
    ///
    /// Work that may still add follow-up intents takes a hold before the
    /// intent that started it is acknowledged.
    pub fn hold(&self) -> QueueHold<E> {
        self.shared.inner.lock().holds += 1;
        QueueHold {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Waits until the queue is idle or closed.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.shared.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            {
                let inner = self.shared.inner.lock();
                if inner.closed || inner.is_idle() {
                    return;
                }
            }
            notified.await;
        }
    }

    /// Logs every pending intent at debug level.
    pub fn debug(&self) {
        let inner = self.shared.inner.lock();
        for (index, intent) in inner.backlog.iter().enumerate() {
            tracing::debug!(index, ?intent, "pending intent");
        }
    }
}

impl<E: Intent + Clone> EventQueue<E> {
    /// Copy of the pending intents, head first.
    pub fn snapshot(&self) -> Vec<E> {
        self.shared.inner.lock().backlog.iter().cloned().collect()
    }
}

impl<E: Intent> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn close_shared<E>(shared: &Shared<E>) {
    {
        let mut inner = shared.inner.lock();
        if inner.closed {
            return;
        }
        inner.closed = true;
        inner.in_flight = false;
        inner.backlog.clear();
    }
    // Single consumer: a stored permit is enough to wake it.
    shared.notify.notify_one();
    shared.idle.notify_waiters();
}

/// Marks the subscriber's current intent as handled.
fn acknowledge<E>(shared: &Shared<E>, inner: &mut QueueInner<E>) {
    if inner.in_flight {
        inner.in_flight = false;
        if inner.is_idle() {
            shared.idle.notify_waiters();
        }
    }
}

/// Outstanding work that may still feed the queue. See [`EventQueue::hold`].
pub struct QueueHold<E> {
    shared: Arc<Shared<E>>,
}

impl<E> Drop for QueueHold<E> {
    fn drop(&mut self) {
        let mut inner = self.shared.inner.lock();
        inner.holds = inner.holds.saturating_sub(1);
        if inner.is_idle() {
            self.shared.idle.notify_waiters();
        }
    }
}

/// Consumer-side handle. Exactly one exists per queue.
///
/// Dropping it closes the queue.
pub struct EventSubscription<E> {
    shared: Arc<Shared<E>>,
}

impl<E: Intent> EventSubscription<E> {
    /// Waits for the next intent. Returns `None` once the queue is closed.
    ///
    /// Calling it again acknowledges the previously returned intent.
    pub async fn next(&mut self) -> Option<E> {
        self.done();
        loop {
            // Create the waiter before checking the backlog so a concurrent
            // add between the check and the await still wakes us.
            let notified = self.shared.notify.notified();
            {
                let mut inner = self.shared.inner.lock();
                if let Some(intent) = inner.backlog.pop_front() {
                    inner.in_flight = true;
                    tracing::debug!(?intent, pending = inner.backlog.len(), "intent delivered");
                    return Some(intent);
                }
                if inner.closed {
                    return None;
                }
            }
            notified.await;
        }
    }

    /// Pops the head without waiting.
    pub fn try_next(&mut self) -> Option<E> {
        let mut inner = self.shared.inner.lock();
        acknowledge(&self.shared, &mut inner);
        let intent = inner.backlog.pop_front();
        inner.in_flight = intent.is_some();
        intent
    }

    /// Acknowledges the last delivered intent without asking for another.
    pub fn done(&mut self) {
        let mut inner = self.shared.inner.lock();
        acknowledge(&self.shared, &mut inner);
    }
}

impl<E> Drop for EventSubscription<E> {
    fn drop(&mut self) {
        close_shared(&self.shared);
    }
}
