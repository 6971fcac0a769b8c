//! Shared setup for the `cantor-*` client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` controls the filter, e.g. `RUST_LOG=cantor=debug`. Without it
/// only warnings are shown, so report output on stdout stays clean.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .without_time(),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
