//! Logging setup.
//!
//! # Environment Variables
//!
//! - `INVITE_LOG`: filter directives (e.g. `debug`, `info,simple_invite=trace`)
//! - `RUST_LOG`: used when `INVITE_LOG` is unset
//!
//! With neither set, the level passed on the command line applies.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "INVITE_LOG";

/// Filter from the environment, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber, writing to stderr. Fails if one is
/// already installed.
pub fn init_logging(default_level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
}
