//! Tracing setup shared by the command-line tools.
//!
//! Logs go to stderr so stdout stays reserved for the report each tool
//! prints.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. from tests) is ignored.
    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
