//! Configuration file loading and validation.

mod loader;
mod types;

pub use loader::{ConfigError, LOG_LEVELS, TICK_RATE_RANGE_MS};
pub use types::{Config, DisplayConfig, LoggingConfig, SiteConfig};
