#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Offline-first repository over the local user data store.

mod user_data;

pub use user_data::{OfflineFirstUserDataRepository, UserDataRepository};
