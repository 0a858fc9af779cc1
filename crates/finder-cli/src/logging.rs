//! Log setup for the terminal.
//!
//! Logs go to stderr so the rendered page on stdout stays clean. The level
//! defaults to `warn` and follows `RUST_LOG` when set.

use std::io;
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
