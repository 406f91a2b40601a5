//! Logging setup for the deformkit binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the application. The filter honours `RUST_LOG` and defaults to `info`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber as the global default.
///
/// Logs go to stderr so stdout stays free for score output. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
