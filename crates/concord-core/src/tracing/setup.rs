//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;

static INIT: Once = Once::new();

/// Initialize the Concord tracing/logging system with default settings.
///
/// Reads the `CONCORD_LOG` environment variable for filter directives.
/// Format: `CONCORD_LOG=concord_consensus=debug,concord_core=warn`
///
/// Falls back to `info` for both Concord crates if `CONCORD_LOG` is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::default());
}

/// Initialize tracing from a `LoggingConfig`.
///
/// `CONCORD_LOG` still takes precedence over `config.level`. If another global
/// subscriber is already installed, this is a no-op.
pub fn init_tracing_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directives(config.effective_level())));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.effective_json() {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set; keeping it");
        }
    });
}

/// Filter directives applying `level` to every Concord crate.
pub fn default_directives(level: &str) -> String {
    format!("concord_core={level},concord_consensus={level}")
}
