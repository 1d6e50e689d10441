//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout only carries the report (or the rendered
//! config with `--dry-run`).

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
