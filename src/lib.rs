//! # mvi-queue
//!
//! Coalescing, priority-aware intent queue feeding a single serialized
//! reducer loop, plus the reference controllers built on it.
//!
//! ```text
//!  producers ──► EventQueue (one pending intent per variant) ──► Controller loop
//!                      ▲                                              │
//!                      └────────── effect follow-ups ◄── EffectHandler┘
//!                                                                     │
//!                                               watch::Receiver<State>◄┘
//! ```
//!
//! - [`queue`]: the coalescing queue and its single subscription.
//! - [`controller`]: reducer loop, state publication, effect dispatch.
//! - [`mvi`]: `Intent` / `UiState` / `Reducer` traits.
//! - [`products`], [`fab`], [`settings`]: reference controllers.
//! - [`data`], [`navigation`]: collaborators the controllers drive.

pub mod config;
pub mod controller;
pub mod data;
pub mod fab;
pub mod logging;
pub mod mvi;
pub mod navigation;
pub mod products;
pub mod queue;
pub mod settings;
pub mod shutdown;
