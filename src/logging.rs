//! # Logging
//!
//! Console logging on stderr so that stdout only ever carries resolved statuses.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_ENV: &str = "STATUSMAP_LOG";
const DEFAULT_LEVEL: &str = "warn";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize logging once per process. Later calls are no-ops.
///
/// The filter comes from `STATUSMAP_LOG`, then `configured`, then `warn`.
pub fn init_logging(configured: Option<&str>) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let level = get_log_level(std::env::var(LOG_ENV).ok(), configured);

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_filter(EnvFilter::new(&level)),
        );

        // a host application may already own the global subscriber
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::debug!(level = %level, "logging initialized");
    });
}

fn get_log_level(from_env: Option<String>, configured: Option<&str>) -> String {
    from_env
        .filter(|level| !level.trim().is_empty())
        .or_else(|| configured.map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_owned())
}
