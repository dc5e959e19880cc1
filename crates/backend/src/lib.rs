#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Storage backend selection for the Newsstand SDK.

mod error;
mod memory;
mod preferences;

pub use error::Error;
pub use memory::MemoryPreferenceProvider;
pub use preferences::UserPreferenceStore;
