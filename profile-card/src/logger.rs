//! Logging setup for hosts embedding the card renderer
//!
//! The library itself only emits `tracing` events; a bot process calls
//! [`init_logger`] once at startup.

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize console logging
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON lines for production, pretty output for development
///
/// Fails if a global subscriber is already installed.
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logger("debug", false);
        assert!(init_logger("debug", true).is_err());
    }
}
