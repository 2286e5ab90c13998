//! Presentation settings shared by the terminal shells.

use crate::error::ConfigError;
use std::time::Duration;

/// Longest accepted pause before the victory announcement
pub const MAX_ANNOUNCE_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Pause between the winning move being drawn and the announcement popup
    pub announce_delay: Duration,
    /// Colored stones and status text
    pub use_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            announce_delay: Duration::from_millis(10),
            use_color: true,
        }
    }
}

impl AppConfig {
    pub fn new(announce_delay: Duration, use_color: bool) -> Result<Self, ConfigError> {
        let config = AppConfig {
            announce_delay,
            use_color,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.announce_delay > MAX_ANNOUNCE_DELAY {
            return Err(ConfigError::AnnounceDelayTooLong(
                self.announce_delay,
                MAX_ANNOUNCE_DELAY,
            ));
        }
        Ok(())
    }
}
