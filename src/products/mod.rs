//! Products list feature.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state (Uninitialized → Loading → Successful | Error,
//!   Successful → Refreshing → Successful | Error)
//! - `intent.rs` - User and completion events
//! - `reducer.rs` - State transitions and requested effects (pure)
//! - `effects.rs` - Effect execution against the repositories

mod effects;
mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use crate::controller::{Controller, ControllerError};

pub use effects::ProductsEffects;
pub use intent::{ProductsIntent, ProductsResponse};
pub use reducer::{ProductsEffect, ProductsReducer};
pub use state::ProductsState;

pub type ProductsController = Controller<ProductsReducer, ProductsEffects>;

/// Builds and starts a products controller, primed with the startup intents.
///
/// Settings load first (top priority), then the first products load.
pub fn launch(effects: ProductsEffects) -> Result<ProductsController, ControllerError> {
    let mut controller = ProductsController::new(ProductsState::default(), Arc::new(effects));
    controller.enqueue(ProductsIntent::ProductsUninitialized);
    controller.enqueue(ProductsIntent::SettingsUninitialized);
    controller.start()?;
    Ok(controller)
}
