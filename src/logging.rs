//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Initialise logging. `RUST_LOG` overrides the default level (`debug` in
/// debug builds, `info` in release). Calling this twice is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
