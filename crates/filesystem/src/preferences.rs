//! Store user preferences in a file as JSON.
use crate::{read_exclusive, write_exclusive, Error};
use async_trait::async_trait;
use newsstand_core::Paths;
use newsstand_preferences::{PreferenceMap, PreferencesStorage};
use std::{path::PathBuf, sync::Arc};

/// Store preferences in a file as JSON.
pub struct PreferenceProvider<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + From<newsstand_preferences::Error>
        + From<std::io::Error>
        + Send
        + Sync
        + 'static,
{
    paths: Arc<Paths>,
    marker: std::marker::PhantomData<E>,
}

impl<E> PreferenceProvider<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + From<newsstand_preferences::Error>
        + From<std::io::Error>
        + Send
        + Sync
        + 'static,
{
    /// Create a new preferences file provider.
    pub fn new(paths: Arc<Paths>) -> Self {
        Self {
            paths,
            marker: std::marker::PhantomData,
        }
    }

    fn file_path(&self) -> PathBuf {
        self.paths.preferences_file()
    }
}

#[async_trait]
impl<E> PreferencesStorage for PreferenceProvider<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + From<newsstand_preferences::Error>
        + From<std::io::Error>
        + Send
        + Sync
        + 'static,
{
    type Error = E;

    async fn load_preferences(
        &self,
    ) -> Result<PreferenceMap, Self::Error> {
        let path = self.file_path();
        let prefs = if tokio::fs::try_exists(&path).await? {
            let content = read_exclusive(&path).await?;
            serde_json::from_slice::<PreferenceMap>(&content)
                .map_err(Error::from)?
        } else {
            Default::default()
        };
        tracing::debug!(
            path = %path.display(),
            "preferences::load",
        );
        Ok(prefs)
    }

    async fn save_preferences(
        &self,
        preferences: &PreferenceMap,
    ) -> Result<(), Self::Error> {
        let path = self.file_path();
        let buf =
            serde_json::to_vec_pretty(preferences).map_err(Error::from)?;
        write_exclusive(&path, buf).await?;
        tracing::debug!(
            path = %path.display(),
            "preferences::save",
        );
        Ok(())
    }

    async fn clear_preferences(&self) -> Result<(), Self::Error> {
        self.save_preferences(&Default::default()).await
    }
}
