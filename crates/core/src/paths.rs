//! Directory layout for application documents.
use crate::Result;
use std::path::{Path, PathBuf};

/// File that stores the user preferences document.
const PREFERENCES_FILE: &str = "preferences.json";

/// Paths to the application documents.
///
/// A host application isolates profiles by handing each one
/// its own documents directory.
#[derive(Debug, Clone)]
pub struct Paths {
    documents_dir: PathBuf,
}

impl Paths {
    /// Create paths rooted at a documents directory.
    pub fn new_client(documents_dir: impl AsRef<Path>) -> Self {
        Self {
            documents_dir: documents_dir.as_ref().to_owned(),
        }
    }

    /// Documents directory.
    pub fn documents_dir(&self) -> &PathBuf {
        &self.documents_dir
    }

    /// Path to the user preferences document.
    pub fn preferences_file(&self) -> PathBuf {
        self.documents_dir.join(PREFERENCES_FILE)
    }

    /// Ensure the directory layout exists on disc.
    pub async fn ensure(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.documents_dir).await?;
        Ok(())
    }
}
