//! Tracing subscriber setup.

use outcome_config::LogConfig;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr; `RUST_LOG` wins over config.
pub fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(error) = installed {
        let _ = writeln!(io::stderr(), "warning: tracing init failed: {error}");
    }
}
