use thiserror::Error;

/// Errors generated by the core library.
#[derive(Debug, Error)]
pub enum Error {
    /// Stored theme brand does not match a known variant.
    #[error("unknown theme brand '{0}'")]
    UnknownThemeBrand(String),

    /// Stored dark theme configuration does not match a known variant.
    #[error("unknown dark theme config '{0}'")]
    UnknownDarkThemeConfig(String),

    /// Error generated by input/output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
