use thiserror::Error;

/// Errors generated by the file system storage.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated converting to and from JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error generated by input/output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
