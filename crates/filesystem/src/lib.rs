#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! User preference storage backed by the file system.

mod advisory_locks;
mod error;
mod preferences;

pub use advisory_locks::{read_exclusive, write_exclusive};
pub use error::Error;
pub use preferences::PreferenceProvider;
