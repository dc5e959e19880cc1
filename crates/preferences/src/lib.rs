#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Typed user preferences backed by a pluggable storage provider.

mod error;
mod preference;
mod user_preferences;

pub use error::Error;
pub use preference::{Preference, PreferenceMap};
pub use user_preferences::{
    PreferenceStorageProvider, PreferencesStorage, UserPreferences,
};

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
