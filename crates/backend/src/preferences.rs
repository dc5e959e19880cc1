//! Construct user preferences for a selected storage backend.
use crate::{Error, MemoryPreferenceProvider};
use newsstand_core::Paths;
use newsstand_filesystem::PreferenceProvider as FsPreferenceProvider;
use newsstand_preferences::{PreferenceStorageProvider, UserPreferences};
use std::sync::Arc;
use tokio::sync::Mutex;

/// User preference store for a selected backend.
pub struct UserPreferenceStore(Arc<Mutex<UserPreferences<Error>>>);

impl UserPreferenceStore {
    /// Create a store using a JSON document on disc.
    pub fn new_fs(paths: Arc<Paths>) -> Self {
        let provider: PreferenceStorageProvider<Error> =
            Box::new(FsPreferenceProvider::new(paths));
        Self(Arc::new(Mutex::new(UserPreferences::new(provider))))
    }

    /// Create a store using memory only.
    pub fn new_memory() -> Self {
        let provider: PreferenceStorageProvider<Error> =
            Box::new(MemoryPreferenceProvider::default());
        Self(Arc::new(Mutex::new(UserPreferences::new(provider))))
    }

    /// Load persisted preferences into memory.
    pub async fn load(&self) -> Result<(), Error> {
        let mut prefs = self.0.lock().await;
        prefs.load().await
    }

    /// Shared handle to the user preferences.
    pub fn preferences(&self) -> Arc<Mutex<UserPreferences<Error>>> {
        self.0.clone()
    }
}
