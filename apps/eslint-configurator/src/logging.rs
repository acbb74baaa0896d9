//! Structured logging via `tracing`.
//!
//! Events go to stderr so the stdout messages stay exactly as documented.
//! The filter comes from the effective `log_level` setting.

use crate::error::{ConfiguratorError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for a `log_level` directive such as `warn` or
/// `eslint_configurator=debug`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| ConfiguratorError::Logging(format!("invalid log_level '{}': {}", level, e)))
}

/// Install the global subscriber. Fails if `level` is not a valid directive
/// or a subscriber is already installed.
pub fn init_logging(level: &str, color: bool) -> Result<()> {
    let filter = build_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .try_init()
        .map_err(|e| ConfiguratorError::Logging(e.to_string()))
}
