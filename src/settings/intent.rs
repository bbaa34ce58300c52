use crate::data::Settings;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsIntent {
    Load,
    Loaded(Result<Settings, String>),
    /// User edited settings; persist them.
    Write(Settings),
    Written(Result<Settings, String>),
}

impl Intent for SettingsIntent {}
