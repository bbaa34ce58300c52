//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between producers and a single reducer loop.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ EventQueue ──→ Reducer ──→ State ──→ Observers
//!    ↑                         │
//!    └──────── Effect ◄────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced on every transition
//! - **Intent**: User actions or system events, coalesced by variant
//! - **Reducer**: Pure function that transforms state and requests effects

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Next, Reducer};
pub use state::UiState;
