//! Test utilities for the Newsstand SDK.
pub mod assert;
pub mod mock;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Initialize tracing output for tests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
