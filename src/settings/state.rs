use crate::data::Settings;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsState {
    #[default]
    Uninitialized,
    Loading,
    Successful { settings: Settings },
    /// Write in flight with the settings being saved.
    Saving { settings: Settings },
    Error { message: String },
}

impl UiState for SettingsState {}

impl SettingsState {
    pub fn settings(&self) -> Option<Settings> {
        match self {
            SettingsState::Successful { settings } | SettingsState::Saving { settings } => {
                Some(*settings)
            }
            _ => None,
        }
    }
}
