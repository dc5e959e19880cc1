use thiserror::Error;

/// Errors generated by the preferences library.
#[derive(Debug, Error)]
pub enum Error {
    /// Preference stored under a key is not a boolean.
    #[error("preference '{0}' is not a boolean")]
    NotABoolean(String),

    /// Preference stored under a key is not a number.
    #[error("preference '{0}' is not a number")]
    NotANumber(String),

    /// Preference stored under a key is not a string.
    #[error("preference '{0}' is not a string")]
    NotAString(String),

    /// Preference stored under a key is not a set of strings.
    #[error("preference '{0}' is not a string set")]
    NotAStringSet(String),

    /// Error generated by core types.
    #[error(transparent)]
    Core(#[from] newsstand_core::Error),
}
