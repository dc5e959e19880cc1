//! Repository of the user's local preferences and interests.
use async_trait::async_trait;
use newsstand_core::{
    AuthorId, DarkThemeConfig, ThemeBrand, TopicId, UserData,
};
use newsstand_preferences::{Error as PreferenceError, UserPreferences};
use std::{collections::BTreeSet, sync::Arc};
use tokio::sync::{watch, Mutex};

/// Repository for the user data snapshot.
#[async_trait]
pub trait UserDataRepository {
    /// Error type.
    type Error: std::error::Error + std::fmt::Debug + Send + Sync + 'static;

    /// Stream of user data snapshots.
    ///
    /// The receiver always yields the latest committed snapshot.
    fn user_data_stream(&self) -> watch::Receiver<UserData>;

    /// Replace the set of followed topics.
    async fn set_followed_topic_ids(
        &self,
        topic_ids: BTreeSet<TopicId>,
    ) -> Result<(), Self::Error>;

    /// Follow or unfollow a single topic.
    async fn toggle_followed_topic_id(
        &self,
        topic_id: &str,
        followed: bool,
    ) -> Result<(), Self::Error>;

    /// Replace the set of followed authors.
    async fn set_followed_author_ids(
        &self,
        author_ids: BTreeSet<AuthorId>,
    ) -> Result<(), Self::Error>;

    /// Follow or unfollow a single author.
    async fn toggle_followed_author_id(
        &self,
        author_id: &str,
        followed: bool,
    ) -> Result<(), Self::Error>;

    /// Bookmark or unbookmark a news resource.
    async fn update_resource_bookmark(
        &self,
        resource_id: &str,
        bookmarked: bool,
    ) -> Result<(), Self::Error>;

    /// Set the theme brand.
    async fn set_theme_brand(
        &self,
        brand: ThemeBrand,
    ) -> Result<(), Self::Error>;

    /// Set the dark theme configuration.
    async fn set_dark_theme_config(
        &self,
        config: DarkThemeConfig,
    ) -> Result<(), Self::Error>;

    /// Set whether the user has dismissed the onboarding flow.
    async fn set_onboarding_dismissed(
        &self,
        dismissed: bool,
    ) -> Result<(), Self::Error>;
}

/// Repository backed entirely by the on-device preference store.
///
/// The local store is the source of truth; every operation
/// delegates to the preferences data source and the snapshot
/// stream is the data source stream.
pub struct OfflineFirstUserDataRepository<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<PreferenceError>
        + Send
        + Sync
        + 'static,
{
    preferences: Arc<Mutex<UserPreferences<E>>>,
    stream: watch::Receiver<UserData>,
}

impl<E> OfflineFirstUserDataRepository<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<PreferenceError>
        + Send
        + Sync
        + 'static,
{
    /// Create a repository over a shared preferences data source.
    pub async fn new(preferences: Arc<Mutex<UserPreferences<E>>>) -> Self {
        let stream = {
            let prefs = preferences.lock().await;
            prefs.subscribe()
        };
        Self {
            preferences,
            stream,
        }
    }
}

#[async_trait]
impl<E> UserDataRepository for OfflineFirstUserDataRepository<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<PreferenceError>
        + Send
        + Sync
        + 'static,
{
    type Error = E;

    fn user_data_stream(&self) -> watch::Receiver<UserData> {
        self.stream.clone()
    }

    async fn set_followed_topic_ids(
        &self,
        topic_ids: BTreeSet<TopicId>,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.set_followed_topic_ids(topic_ids).await
    }

    async fn toggle_followed_topic_id(
        &self,
        topic_id: &str,
        followed: bool,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.toggle_followed_topic_id(topic_id, followed).await
    }

    async fn set_followed_author_ids(
        &self,
        author_ids: BTreeSet<AuthorId>,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.set_followed_author_ids(author_ids).await
    }

    async fn toggle_followed_author_id(
        &self,
        author_id: &str,
        followed: bool,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.toggle_followed_author_id(author_id, followed).await
    }

    async fn update_resource_bookmark(
        &self,
        resource_id: &str,
        bookmarked: bool,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.update_resource_bookmark(resource_id, bookmarked).await
    }

    async fn set_theme_brand(
        &self,
        brand: ThemeBrand,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.set_theme_brand(brand).await
    }

    async fn set_dark_theme_config(
        &self,
        config: DarkThemeConfig,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.set_dark_theme_config(config).await
    }

    async fn set_onboarding_dismissed(
        &self,
        dismissed: bool,
    ) -> Result<(), Self::Error> {
        let mut prefs = self.preferences.lock().await;
        prefs.set_onboarding_dismissed(dismissed).await
    }
}
