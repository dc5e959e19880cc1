//! Typed data source for the user's local preferences.
//!
//! The committed state is cached in memory and persisted through a
//! storage provider which may be a JSON document on disc or an
//! in-memory map depending upon the backend implementation. Every
//! mutation commits to storage before the new snapshot is published
//! to subscribers.
use crate::{Error, PreferenceMap};
use async_trait::async_trait;
use newsstand_core::{
    AuthorId, DarkThemeConfig, ThemeBrand, TopicId, UserData,
};
use std::collections::BTreeSet;
use tokio::sync::watch;

/// Key for the set of followed topic identifiers.
const FOLLOWED_TOPICS: &str = "user.followed-topics";
/// Key for the set of followed author identifiers.
const FOLLOWED_AUTHORS: &str = "user.followed-authors";
/// Key for the set of bookmarked resource identifiers.
const BOOKMARKED_RESOURCES: &str = "user.bookmarked-resources";
/// Key for the theme brand.
const THEME_BRAND: &str = "user.theme-brand";
/// Key for the dark theme configuration.
const DARK_THEME_CONFIG: &str = "user.dark-theme-config";
/// Key for the onboarding dismissal flag.
const ONBOARDING_DISMISSED: &str = "user.onboarding-dismissed";

/// Boxed storage provider.
pub type PreferenceStorageProvider<E> =
    Box<dyn PreferencesStorage<Error = E> + Send + Sync + 'static>;

/// Storage provider for user preferences.
#[async_trait]
pub trait PreferencesStorage {
    /// Error type.
    type Error: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static;

    /// Load preferences from storage.
    async fn load_preferences(&self)
        -> Result<PreferenceMap, Self::Error>;

    /// Save preferences to storage.
    async fn save_preferences(
        &self,
        preferences: &PreferenceMap,
    ) -> Result<(), Self::Error>;

    /// Remove all preferences from storage.
    async fn clear_preferences(&self) -> Result<(), Self::Error>;
}

/// Typed user preferences with a backing storage provider.
///
/// Owners are expected to serialize mutations behind a mutex; the
/// watch channel carries the latest committed snapshot to readers.
pub struct UserPreferences<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    values: PreferenceMap,
    provider: PreferenceStorageProvider<E>,
    channel: watch::Sender<UserData>,
}

impl<E> UserPreferences<E>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<Error>
        + Send
        + Sync
        + 'static,
{
    /// Create user preferences using the given storage provider.
    pub fn new(provider: PreferenceStorageProvider<E>) -> Self {
        let (channel, _) = watch::channel(UserData::default());
        Self {
            values: Default::default(),
            provider,
            channel,
        }
    }

    /// Load the persisted preferences into memory.
    ///
    /// Missing storage yields the default snapshot.
    pub async fn load(&mut self) -> Result<(), E> {
        self.values = self.provider.load_preferences().await?;
        let data = self.user_data()?;
        tracing::debug!(len = self.values.len(), "user_preferences::load");
        self.channel.send_replace(data);
        Ok(())
    }

    /// Subscribe to committed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<UserData> {
        self.channel.subscribe()
    }

    /// Latest committed snapshot.
    pub fn current(&self) -> UserData {
        self.channel.borrow().clone()
    }

    /// Replace the set of followed topics.
    pub async fn set_followed_topic_ids(
        &mut self,
        topic_ids: BTreeSet<TopicId>,
    ) -> Result<(), E> {
        self.values
            .insert(FOLLOWED_TOPICS.to_owned(), topic_ids.into());
        self.sync_onboarding_state()?;
        self.commit().await
    }

    /// Follow or unfollow a single topic.
    pub async fn toggle_followed_topic_id(
        &mut self,
        topic_id: &str,
        followed: bool,
    ) -> Result<(), E> {
        self.toggle_member(FOLLOWED_TOPICS, topic_id, followed)?;
        self.sync_onboarding_state()?;
        self.commit().await
    }

    /// Replace the set of followed authors.
    pub async fn set_followed_author_ids(
        &mut self,
        author_ids: BTreeSet<AuthorId>,
    ) -> Result<(), E> {
        self.values
            .insert(FOLLOWED_AUTHORS.to_owned(), author_ids.into());
        self.sync_onboarding_state()?;
        self.commit().await
    }

    /// Follow or unfollow a single author.
    pub async fn toggle_followed_author_id(
        &mut self,
        author_id: &str,
        followed: bool,
    ) -> Result<(), E> {
        self.toggle_member(FOLLOWED_AUTHORS, author_id, followed)?;
        self.sync_onboarding_state()?;
        self.commit().await
    }

    /// Bookmark or unbookmark a news resource.
    pub async fn update_resource_bookmark(
        &mut self,
        resource_id: &str,
        bookmarked: bool,
    ) -> Result<(), E> {
        self.toggle_member(BOOKMARKED_RESOURCES, resource_id, bookmarked)?;
        self.commit().await
    }

    /// Set the theme brand.
    pub async fn set_theme_brand(
        &mut self,
        brand: ThemeBrand,
    ) -> Result<(), E> {
        self.values
            .insert(THEME_BRAND.to_owned(), brand.to_string().into());
        self.commit().await
    }

    /// Set the dark theme configuration.
    pub async fn set_dark_theme_config(
        &mut self,
        config: DarkThemeConfig,
    ) -> Result<(), E> {
        self.values
            .insert(DARK_THEME_CONFIG.to_owned(), config.to_string().into());
        self.commit().await
    }

    /// Set whether the user has dismissed the onboarding flow.
    pub async fn set_onboarding_dismissed(
        &mut self,
        dismissed: bool,
    ) -> Result<(), E> {
        self.values
            .insert(ONBOARDING_DISMISSED.to_owned(), dismissed.into());
        self.commit().await
    }

    /// Clear all preferences.
    pub async fn clear(&mut self) -> Result<(), E> {
        self.values = Default::default();
        self.provider.clear_preferences().await?;
        self.channel.send_replace(UserData::default());
        Ok(())
    }

    /// Add or remove a member of a string set preference.
    fn toggle_member(
        &mut self,
        key: &str,
        id: &str,
        member: bool,
    ) -> Result<(), E> {
        let mut set = self
            .values
            .get_string_set(key)?
            .cloned()
            .unwrap_or_default();
        if member {
            set.insert(id.to_owned());
        } else {
            set.remove(id);
        }
        self.values.insert(key.to_owned(), set.into());
        Ok(())
    }

    /// Reset the onboarding flag when the last followed topic or
    /// author has been removed.
    ///
    /// Called after either followed set mutates; an addition leaves
    /// its set non-empty so only removals can trip the reset.
    fn sync_onboarding_state(&mut self) -> Result<(), E> {
        let has_interests = {
            let topics = self.values.get_string_set(FOLLOWED_TOPICS)?;
            let authors = self.values.get_string_set(FOLLOWED_AUTHORS)?;
            topics.is_some_and(|set| !set.is_empty())
                || authors.is_some_and(|set| !set.is_empty())
        };
        if !has_interests {
            self.values
                .insert(ONBOARDING_DISMISSED.to_owned(), false.into());
        }
        Ok(())
    }

    /// Persist the values and publish the new snapshot.
    async fn commit(&mut self) -> Result<(), E> {
        self.provider.save_preferences(&self.values).await?;
        let data = self.user_data()?;
        tracing::debug!(len = self.values.len(), "user_preferences::commit");
        self.channel.send_replace(data);
        Ok(())
    }

    /// Build the snapshot from the committed values.
    fn user_data(&self) -> Result<UserData, E> {
        let followed_topics = self
            .values
            .get_string_set(FOLLOWED_TOPICS)?
            .cloned()
            .unwrap_or_default();
        let followed_authors = self
            .values
            .get_string_set(FOLLOWED_AUTHORS)?
            .cloned()
            .unwrap_or_default();
        let bookmarked_resources = self
            .values
            .get_string_set(BOOKMARKED_RESOURCES)?
            .cloned()
            .unwrap_or_default();
        let theme_brand = match self.values.get_string(THEME_BRAND)? {
            Some(value) => {
                value.parse::<ThemeBrand>().map_err(Error::from)?
            }
            None => Default::default(),
        };
        let dark_theme_config =
            match self.values.get_string(DARK_THEME_CONFIG)? {
                Some(value) => {
                    value.parse::<DarkThemeConfig>().map_err(Error::from)?
                }
                None => Default::default(),
            };
        let onboarding_dismissed = self
            .values
            .get_bool(ONBOARDING_DISMISSED)?
            .unwrap_or_default();
        Ok(UserData {
            followed_topics,
            followed_authors,
            bookmarked_resources,
            theme_brand,
            dark_theme_config,
            onboarding_dismissed,
        })
    }
}
