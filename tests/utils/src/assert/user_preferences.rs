use crate::mock::string_set;
use anyhow::Result;
use newsstand_core::{DarkThemeConfig, ThemeBrand, UserData};
use newsstand_preferences::{Error as PreferenceError, UserPreferences};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

/// Assert the default snapshot of an empty store.
pub async fn assert_default_user_data<E>(
    prefs: &mut UserPreferences<E>,
) -> Result<()>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<PreferenceError>
        + Send
        + Sync
        + 'static,
{
    prefs.load().await?;
    let data = prefs.current();
    assert_eq!(UserData::default(), data);
    assert!(data.followed_topics.is_empty());
    assert!(data.followed_authors.is_empty());
    assert!(data.bookmarked_resources.is_empty());
    assert_eq!(ThemeBrand::Default, data.theme_brand);
    assert_eq!(DarkThemeConfig::FollowSystem, data.dark_theme_config);
    assert!(!data.onboarding_dismissed);
    assert!(!data.has_followed_interests());
    Ok(())
}

/// Assert the onboarding reset rule on an empty store.
pub async fn assert_onboarding_reset<E>(
    prefs: &mut UserPreferences<E>,
) -> Result<()>
where
    E: std::error::Error
        + std::fmt::Debug
        + From<PreferenceError>
        + Send
        + Sync
        + 'static,
{
    // Following a single author and dismissing onboarding sticks
    // until that author is unfollowed.
    prefs.toggle_followed_author_id("1", true).await?;
    prefs.set_onboarding_dismissed(true).await?;
    assert!(prefs.current().onboarding_dismissed);
    prefs.toggle_followed_author_id("1", false).await?;
    assert!(!prefs.current().onboarding_dismissed);

    // Same for a single topic.
    prefs.toggle_followed_topic_id("1", true).await?;
    prefs.set_onboarding_dismissed(true).await?;
    assert!(prefs.current().onboarding_dismissed);
    prefs.toggle_followed_topic_id("1", false).await?;
    assert!(!prefs.current().onboarding_dismissed);

    // Unfollowing every author at once resets the flag.
    prefs.set_followed_author_ids(string_set(&["1", "2"])).await?;
    prefs.set_onboarding_dismissed(true).await?;
    prefs.set_followed_author_ids(BTreeSet::new()).await?;
    assert!(!prefs.current().onboarding_dismissed);

    // Unfollowing every topic at once resets the flag.
    prefs.set_followed_topic_ids(string_set(&["1", "2"])).await?;
    prefs.set_onboarding_dismissed(true).await?;
    prefs.set_followed_topic_ids(BTreeSet::new()).await?;
    assert!(!prefs.current().onboarding_dismissed);

    // While authors remain followed, removing every topic leaves
    // the flag alone.
    prefs.set_followed_topic_ids(string_set(&["1", "2"])).await?;
    prefs.set_followed_author_ids(string_set(&["3", "4"])).await?;
    prefs.set_onboarding_dismissed(true).await?;
    prefs.set_followed_topic_ids(BTreeSet::new()).await?;
    assert!(prefs.current().onboarding_dismissed);

    // And removing every author while topics remain.
    prefs.set_followed_topic_ids(string_set(&["1", "2"])).await?;
    prefs.set_followed_author_ids(string_set(&["3", "4"])).await?;
    prefs.set_onboarding_dismissed(true).await?;
    prefs.set_followed_author_ids(BTreeSet::new()).await?;
    assert!(prefs.current().onboarding_dismissed);
    assert!(prefs.current().has_followed_interests());

    prefs.clear().await?;
    assert_eq!(UserData::default(), prefs.current());
    Ok(())
}
