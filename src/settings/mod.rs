//! Settings screen: load and persist [`Settings`](crate::data::Settings).

mod effects;
mod intent;
mod reducer;
mod state;

use std::sync::Arc;

use crate::controller::{Controller, ControllerError};

pub use effects::SettingsEffects;
pub use intent::SettingsIntent;
pub use reducer::{SettingsEffect, SettingsReducer};
pub use state::SettingsState;

pub type SettingsController = Controller<SettingsReducer, SettingsEffects>;

/// Builds and starts a settings controller with a load already queued.
pub fn launch(effects: SettingsEffects) -> Result<SettingsController, ControllerError> {
    let mut controller = SettingsController::new(SettingsState::default(), Arc::new(effects));
    controller.enqueue(SettingsIntent::Load);
    controller.start()?;
    Ok(controller)
}
