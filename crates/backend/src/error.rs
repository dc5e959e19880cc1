use thiserror::Error;

/// Errors generated by the backend library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by core types.
    #[error(transparent)]
    Core(#[from] newsstand_core::Error),

    /// Error generated by the preferences library.
    #[error(transparent)]
    Preferences(#[from] newsstand_preferences::Error),

    /// Error generated by file system storage.
    #[error(transparent)]
    Filesystem(#[from] newsstand_filesystem::Error),

    /// Error generated by input/output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
