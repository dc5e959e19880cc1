//! User data snapshot and enumerated preference types.
use crate::{AuthorId, Error, ResourceId, TopicId};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Brand styling for the application theme.
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub enum ThemeBrand {
    /// Stock platform styling.
    #[default]
    Default,
    /// Newsstand brand styling.
    Newsstand,
}

impl fmt::Display for ThemeBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Newsstand => write!(f, "newsstand"),
        }
    }
}

impl FromStr for ThemeBrand {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "newsstand" => Ok(Self::Newsstand),
            _ => Err(Error::UnknownThemeBrand(s.to_owned())),
        }
    }
}

/// Preferred dark theme behavior.
#[derive(
    Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub enum DarkThemeConfig {
    /// Follow the system dark mode setting.
    #[default]
    FollowSystem,
    /// Always use the light theme.
    Light,
    /// Always use the dark theme.
    Dark,
}

impl fmt::Display for DarkThemeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FollowSystem => write!(f, "followSystem"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for DarkThemeConfig {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "followSystem" => Ok(Self::FollowSystem),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(Error::UnknownDarkThemeConfig(s.to_owned())),
        }
    }
}

/// Snapshot of the user's local preferences and interests.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Topics the user is following.
    pub followed_topics: BTreeSet<TopicId>,
    /// Authors the user is following.
    pub followed_authors: BTreeSet<AuthorId>,
    /// News resources the user has bookmarked.
    pub bookmarked_resources: BTreeSet<ResourceId>,
    /// Theme brand styling.
    pub theme_brand: ThemeBrand,
    /// Dark theme behavior.
    pub dark_theme_config: DarkThemeConfig,
    /// Whether the user has dismissed the onboarding flow.
    pub onboarding_dismissed: bool,
}

impl UserData {
    /// Whether the user follows at least one topic or author.
    pub fn has_followed_interests(&self) -> bool {
        !self.followed_topics.is_empty() || !self.followed_authors.is_empty()
    }
}
