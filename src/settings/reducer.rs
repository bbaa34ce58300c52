use crate::data::Settings;
use crate::mvi::{Next, Reducer};

use super::intent::SettingsIntent;
use super::state::SettingsState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsEffect {
    Load,
    WriteSettingsToDisk(Settings),
}

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;
    type Effect = SettingsEffect;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Next<Self::State, Self::Effect> {
        match intent {
            SettingsIntent::Load => Next::with_effect(SettingsState::Loading, SettingsEffect::Load),
            SettingsIntent::Write(settings) => Next::with_effect(
                SettingsState::Saving { settings },
                SettingsEffect::WriteSettingsToDisk(settings),
            ),
            SettingsIntent::Loaded(result) | SettingsIntent::Written(result) => {
                Next::state(match result {
                    Ok(settings) => SettingsState::Successful { settings },
                    Err(message) => SettingsState::Error { message },
                })
            }
        }
    }
}
