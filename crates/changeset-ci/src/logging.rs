//! Diagnostics go to stderr; stdout carries command output only.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Priority: quiet flag, then verbose count, then `RUST_LOG`, then `warn`.
pub(crate) fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

pub(crate) fn init(quiet: bool, verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
