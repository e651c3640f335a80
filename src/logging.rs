use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use crate::config::LogLevel;

/// Install the process wide tracing subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Every record carries its source file
/// and line. Call once, from the binary entry point.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(Level::from(level)).into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(filter))
        .init();
}
