//! Tracing subscriber setup shared by the binaries

use artpipe_common::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing once per process
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so
/// stdout carries only tool output.
pub fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
