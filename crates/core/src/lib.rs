#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Core types and constants for the Newsstand SDK.

mod error;
mod paths;
mod user_data;

pub use error::Error;
pub use paths::Paths;
pub use user_data::{DarkThemeConfig, ThemeBrand, UserData};

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Identifier for a followable topic.
pub type TopicId = String;

/// Identifier for a followable author.
pub type AuthorId = String;

/// Identifier for a news resource.
pub type ResourceId = String;
