//! Store user preferences in memory.
use crate::Error;
use async_trait::async_trait;
use newsstand_preferences::{PreferenceMap, PreferencesStorage};
use tokio::sync::Mutex;

/// Store preferences in memory.
///
/// Used by tests and by ephemeral profiles that must not touch
/// the file system.
#[derive(Default)]
pub struct MemoryPreferenceProvider {
    values: Mutex<PreferenceMap>,
}

#[async_trait]
impl PreferencesStorage for MemoryPreferenceProvider {
    type Error = Error;

    async fn load_preferences(
        &self,
    ) -> Result<PreferenceMap, Self::Error> {
        Ok(self.values.lock().await.clone())
    }

    async fn save_preferences(
        &self,
        preferences: &PreferenceMap,
    ) -> Result<(), Self::Error> {
        *self.values.lock().await = preferences.clone();
        Ok(())
    }

    async fn clear_preferences(&self) -> Result<(), Self::Error> {
        *self.values.lock().await = Default::default();
        Ok(())
    }
}
