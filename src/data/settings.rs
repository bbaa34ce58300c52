//! User settings and their on-disk store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::error::SettingsError;

/// Persisted user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub is_initialized: bool,
    #[serde(default)]
    pub enable_debugging: bool,
}

/// Capability for reading and replacing settings.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads settings from storage, creating them when absent.
    async fn initialize(&self) -> Result<Settings, SettingsError>;

    /// Last loaded or written settings.
    fn settings(&self) -> Settings;

    /// Persists `settings` and makes them current.
    async fn replace(&self, settings: Settings) -> Result<Settings, SettingsError>;
}

/// TOML-file backed settings.
pub struct FileSettingsRepository {
    path: PathBuf,
    current: RwLock<Settings>,
}

impl FileSettingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            current: RwLock::new(Settings::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, settings: &Settings) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(settings)?;
        let write_error = |source| SettingsError::WriteError {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
        }
        tokio::fs::write(&self.path, content).await.map_err(write_error)
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn initialize(&self) -> Result<Settings, SettingsError> {
        let settings = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let mut settings: Settings =
                    toml::from_str(&content).map_err(|source| SettingsError::ParseError {
                        path: self.path.clone(),
                        source,
                    })?;
                settings.is_initialized = true;
                settings
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let settings = Settings {
                    is_initialized: true,
                    ..Settings::default()
                };
                self.write(&settings).await?;
                tracing::info!(path = %self.path.display(), "created settings file");
                settings
            }
            Err(source) => {
                return Err(SettingsError::ReadError {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        *self.current.write() = settings;
        Ok(settings)
    }

    fn settings(&self) -> Settings {
        *self.current.read()
    }

    async fn replace(&self, settings: Settings) -> Result<Settings, SettingsError> {
        self.write(&settings).await?;
        *self.current.write() = settings;
        Ok(settings)
    }
}
