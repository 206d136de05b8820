//! Logging initialization
//!
//! Diagnostics go to stderr so table output on stdout stays clean.

use tracing_subscriber::{
    fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global subscriber
///
/// `RUST_LOG` wins when set. Otherwise `verbose` enables debug output for
/// this crate and the default is warnings only.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "finwise=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
