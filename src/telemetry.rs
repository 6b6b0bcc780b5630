//! Logging setup.
//!
//! Installs a global `tracing` subscriber driven by [`LogConfig`]. `RUST_LOG`
//! takes precedence over the configured level when set.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AlaError, AlaResult};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialize the logging system.
///
/// Only the first call installs a subscriber; later calls return `Ok(())`
/// without touching the global state.
pub fn init_logging(config: &LogConfig) -> AlaResult<()> {
    LOGGING
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| ())
}

fn install_subscriber(config: &LogConfig) -> AlaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| AlaError::Custom(format!("Failed to set global tracing subscriber: {e}")))?;
    tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = LogConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}
