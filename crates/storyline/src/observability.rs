//! Tracing initialization.

use std::sync::Once;

use storyline_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "STORYLINE_LOG";

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// `STORYLINE_LOG` (e.g. `storyline_temporal=debug,info`) wins over the
/// configured `log_level`. Idempotent; later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let registry = tracing_subscriber::registry().with(filter);

        let result = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };
        if let Err(e) = result {
            eprintln!("tracing already initialized: {e}");
        }
    });
}
