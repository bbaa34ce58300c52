use std::sync::Arc;

use async_trait::async_trait;

use crate::controller::EffectHandler;
use crate::data::SettingsRepository;

use super::intent::SettingsIntent;
use super::reducer::SettingsEffect;

pub struct SettingsEffects {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsEffects {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EffectHandler for SettingsEffects {
    type Effect = SettingsEffect;
    type Intent = SettingsIntent;

    async fn handle(&self, effect: SettingsEffect) -> Option<SettingsIntent> {
        let intent = match effect {
            SettingsEffect::Load => SettingsIntent::Loaded(
                self.repository
                    .initialize()
                    .await
                    .map_err(|err| err.to_string()),
            ),
            SettingsEffect::WriteSettingsToDisk(settings) => SettingsIntent::Written(
                self.repository
                    .replace(settings)
                    .await
                    .map_err(|err| err.to_string()),
            ),
        };
        if let SettingsIntent::Loaded(Err(message)) | SettingsIntent::Written(Err(message)) =
            &intent
        {
            tracing::warn!(error = %message, "settings effect failed");
        }
        Some(intent)
    }
}
