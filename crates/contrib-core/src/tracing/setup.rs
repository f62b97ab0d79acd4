//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging.
///
/// Reads the `CONTRIB_LOG` environment variable for per-module log levels,
/// e.g. `CONTRIB_LOG=contrib_analysis=debug,contrib_render=info`.
/// Falls back to `contrib=info` when unset or invalid.
///
/// Idempotent. A subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
