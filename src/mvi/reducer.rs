//! Reducer trait for MVI architecture.

use std::fmt;

use super::intent::Intent;
use super::state::UiState;

/// Result of a single reduction: the next state plus at most one side effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Next<S, F> {
    pub state: S,
    pub effect: Option<F>,
}

impl<S, F> Next<S, F> {
    /// Transition without a side effect.
    pub fn state(state: S) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    /// Transition that also schedules `effect`.
    pub fn with_effect(state: S, effect: F) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect?).
/// Effects are executed by the controller, never by the reducer.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects this reducer may request.
    type Effect: fmt::Debug + Send + 'static;

    /// Process an intent and return the new state and optional effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> Next<Self::State, Self::Effect>;
}
