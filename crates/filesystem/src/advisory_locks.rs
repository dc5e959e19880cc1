//! Advisory file locks for document reads and writes.
use async_fd_lock::{LockRead, LockWrite};
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Read a file acquiring a read lock.
pub async fn read_exclusive(
    path: impl AsRef<Path>,
) -> std::io::Result<Vec<u8>> {
    let file = File::open(path.as_ref()).await?;
    let mut guard = file.lock_read().await.map_err(|e| e.error)?;
    let mut content = Vec::new();
    guard.read_to_end(&mut content).await?;
    Ok(content)
}

/// Write a file acquiring an exclusive lock.
///
/// The file is created if it does not exist and
/// truncated if it does exist.
pub async fn write_exclusive(
    path: impl AsRef<Path>,
    buf: impl AsRef<[u8]>,
) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .read(true)
        .write(true)
        .open(path.as_ref())
        .await?;
    let mut guard = file.lock_write().await.map_err(|e| e.error)?;
    guard.write_all(buf.as_ref()).await?;
    guard.flush().await?;
    Ok(())
}
