//! Tracing subscriber setup.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` (e.g. `"qc_lite_core=debug"`).
/// Does nothing if a global subscriber is already set.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

/// Subscriber for tests; output is captured per test by the harness
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}
