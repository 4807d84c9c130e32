//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ENVSCAN_LOG";

/// Filter used when `ENVSCAN_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "envscan=info";

/// Initialize the envscan tracing/logging system.
///
/// Reads `ENVSCAN_LOG` for per-module log levels.
/// Format: `ENVSCAN_LOG=envscan_analysis::usage=trace,envscan_core=debug`
///
/// Falls back to `envscan=info` if `ENVSCAN_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the embedding tool.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
