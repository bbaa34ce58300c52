//! Side-effect execution seam between reducers and the outside world.

use std::convert::Infallible;
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::mvi::Intent;

/// Executes effects requested by a reducer.
///
/// Runs on its own tokio task, never on the reducer loop. Failures must be
/// folded into the returned intent (an error-carrying completion), never
/// propagated: the controller has nowhere to send them.
#[async_trait]
pub trait EffectHandler: Send + Sync + 'static {
    /// Effect type produced by the reducer.
    type Effect: Send + 'static;

    /// Intent type fed back into the queue.
    type Intent: Intent;

    /// Performs `effect` and returns the follow-up intent, if any.
    async fn handle(&self, effect: Self::Effect) -> Option<Self::Intent>;
}

/// Handler for reducers that never request effects.
pub struct NoEffects<I> {
    _intent: PhantomData<fn() -> I>,
}

impl<I> NoEffects<I> {
    pub fn new() -> Self {
        Self {
            _intent: PhantomData,
        }
    }
}

impl<I> Default for NoEffects<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I: Intent> EffectHandler for NoEffects<I> {
    type Effect = Infallible;
    type Intent = I;

    // `Infallible` is uninhabited, so this is never called.
    async fn handle(&self, _effect: Infallible) -> Option<I> {
        None
    }
}
