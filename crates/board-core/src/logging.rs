use crate::BoardResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming a file that receives DEBUG-level logs.
pub const DEBUG_LOG_ENV: &str = "BOARD_DEBUG_LOG";

/// Installs the global tracing subscriber.
///
/// With `BOARD_DEBUG_LOG` set, everything at DEBUG and above is appended to
/// that file with source locations. Otherwise `RUST_LOG` (default `warn`)
/// filters what goes to stderr, keeping stdout free for JSON output.
pub fn init_logging() -> BoardResult<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}
