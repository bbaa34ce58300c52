use crate::mvi::UiState;

/// Which of the two floating action buttons is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FabState {
    #[default]
    Primary,
    Secondary,
}

impl UiState for FabState {}
