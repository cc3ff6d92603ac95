//! Diagnostic logging setup
//!
//! Log lines go to stderr so they never mix with the game on stdout.

use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

/// Map `-v` count and `-q` to a level filter
#[must_use]
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the command-line verbosity when set.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity, quiet).into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
