//! Logging setup.
//!
//! Logs go to stderr so stdout carries only summaries.
//! `FITTRACK_LOG` overrides the configured filter.

use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "FITTRACK_LOG";

/// Install the global subscriber, using `default_level` unless `FITTRACK_LOG` is set.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}
