//! Floating action button: a two-state toggle (Primary ⇄ Secondary).

mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use crate::controller::{Controller, ControllerError, NoEffects};

pub use intent::FabIntent;
pub use reducer::FabReducer;
pub use state::FabState;

pub type FabController = Controller<FabReducer, NoEffects<FabIntent>>;

/// Builds and starts a FAB controller showing the primary button.
pub fn launch() -> Result<FabController, ControllerError> {
    let mut controller = FabController::new(FabState::Primary, Arc::new(NoEffects::new()));
    controller.start()?;
    Ok(controller)
}
