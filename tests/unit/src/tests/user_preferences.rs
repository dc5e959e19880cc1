use anyhow::Result;
use newsstand_backend::UserPreferenceStore;
use newsstand_core::{DarkThemeConfig, ThemeBrand};
use newsstand_test_utils::{
    assert::{assert_default_user_data, assert_onboarding_reset},
    init_tracing,
    mock::temp_paths,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn fs_default_user_data() -> Result<()> {
    init_tracing();
    let (_temp, paths) = temp_paths().await?;
    let store = UserPreferenceStore::new_fs(paths);
    let prefs = store.preferences();
    let mut prefs = prefs.lock().await;
    assert_default_user_data(&mut prefs).await?;
    Ok(())
}

#[tokio::test]
async fn memory_default_user_data() -> Result<()> {
    let store = UserPreferenceStore::new_memory();
    let prefs = store.preferences();
    let mut prefs = prefs.lock().await;
    assert_default_user_data(&mut prefs).await?;
    Ok(())
}

#[tokio::test]
async fn fs_onboarding_reset() -> Result<()> {
    init_tracing();
    let (_temp, paths) = temp_paths().await?;
    let store = UserPreferenceStore::new_fs(paths);
    let prefs = store.preferences();
    let mut prefs = prefs.lock().await;
    assert_onboarding_reset(&mut prefs).await?;
    Ok(())
}

#[tokio::test]
async fn memory_onboarding_reset() -> Result<()> {
    let store = UserPreferenceStore::new_memory();
    let prefs = store.preferences();
    let mut prefs = prefs.lock().await;
    assert_onboarding_reset(&mut prefs).await?;
    Ok(())
}

#[tokio::test]
async fn snapshot_survives_reload() -> Result<()> {
    let (_temp, paths) = temp_paths().await?;

    let expected = {
        let store = UserPreferenceStore::new_fs(paths.clone());
        let prefs = store.preferences();
        let mut prefs = prefs.lock().await;
        prefs.toggle_followed_topic_id("1", true).await?;
        prefs.toggle_followed_author_id("2", true).await?;
        prefs.update_resource_bookmark("3", true).await?;
        prefs.set_theme_brand(ThemeBrand::Newsstand).await?;
        prefs.set_dark_theme_config(DarkThemeConfig::Dark).await?;
        prefs.set_onboarding_dismissed(true).await?;
        prefs.current()
    };

    let store = UserPreferenceStore::new_fs(paths);
    store.load().await?;
    let current = store.preferences().lock().await.current();
    assert_eq!(expected, current);
    assert!(current.onboarding_dismissed);
    Ok(())
}

#[tokio::test]
async fn subscriber_observes_commit() -> Result<()> {
    let store = UserPreferenceStore::new_memory();
    let prefs = store.preferences();
    let mut stream = prefs.lock().await.subscribe();

    {
        let mut prefs = prefs.lock().await;
        prefs.toggle_followed_topic_id("rust", true).await?;
    }

    stream.changed().await?;
    assert!(stream.borrow_and_update().followed_topics.contains("rust"));
    Ok(())
}

#[tokio::test]
async fn concurrent_writes() -> Result<()> {
    let store = UserPreferenceStore::new_memory();
    let prefs = store.preferences();

    let mut futures = Vec::new();
    for i in 0..50 {
        let inner = prefs.clone();
        futures.push(tokio::task::spawn(async move {
            let mut prefs = inner.lock().await;
            prefs
                .toggle_followed_topic_id(&format!("topic-{i}"), true)
                .await?;
            Ok::<_, anyhow::Error>(())
        }));
    }

    let results = futures::future::try_join_all(futures).await?;
    for result in results {
        result?;
    }

    let prefs = prefs.lock().await;
    assert_eq!(50, prefs.current().followed_topics.len());
    Ok(())
}
