//! Logging initialization.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries. Reports go to stdout, so logs always go to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `JOBSCREEN_LOG=jobscreen=debug`.
pub const LOG_ENV: &str = "JOBSCREEN_LOG";

/// Filter used when `JOBSCREEN_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by [`LOG_ENV`].
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_logging(ansi: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(ansi).with_writer(std::io::stderr))
        .try_init();
}
