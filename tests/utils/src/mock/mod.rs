//! Mock data and helpers.
use anyhow::Result;
use newsstand_core::Paths;
use std::{collections::BTreeSet, sync::Arc};
use tempfile::TempDir;

/// Create client paths rooted in a temporary directory.
///
/// The temporary directory guard must be kept alive for the
/// duration of the test.
pub async fn temp_paths() -> Result<(TempDir, Arc<Paths>)> {
    let temp = tempfile::tempdir()?;
    let paths = Paths::new_client(temp.path());
    paths.ensure().await?;
    Ok((temp, Arc::new(paths)))
}

/// Build a set of string identifiers.
pub fn string_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}
