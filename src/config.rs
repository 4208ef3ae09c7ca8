//! Application configuration loaded from the environment.
//!
//! Operating hours drive the capacity and maximum-revenue calculations in the
//! report module, so they are configurable rather than baked in.

use anyhow::{bail, Context};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// Listen address for the HTTP server
    pub bind_addr: String,
    /// First bookable hour of the day (inclusive)
    pub opening_hour: u32,
    /// Hour at which courts close (exclusive)
    pub closing_hour: u32,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// `DATABASE_URL` is required; everything else falls back to defaults
    /// (listen on `0.0.0.0:8000`, courts open 8-22).
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let opening_hour = read_hour("OPENING_HOUR", 8)?;
        let closing_hour = read_hour("CLOSING_HOUR", 22)?;

        let config = Self {
            database_url,
            bind_addr,
            opening_hour,
            closing_hour,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured hours describe a non-empty operating day.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.closing_hour > 24 {
            bail!("closing hour {} is past midnight", self.closing_hour);
        }
        if self.opening_hour >= self.closing_hour {
            bail!(
                "opening hour {} must be before closing hour {}",
                self.opening_hour,
                self.closing_hour
            );
        }
        Ok(())
    }
}

fn read_hour(var: &str, default: u32) -> anyhow::Result<u32> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("{} must be an hour (0-24), got '{}'", var, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(opening_hour: u32, closing_hour: u32) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/test".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            opening_hour,
            closing_hour,
        }
    }

    #[test]
    fn default_hours_are_valid() {
        assert!(config(8, 22).validate().is_ok());
    }

    #[test]
    fn rejects_inverted_hours() {
        assert!(config(22, 8).validate().is_err());
        assert!(config(10, 10).validate().is_err());
    }

    #[test]
    fn rejects_hours_past_midnight() {
        assert!(config(8, 25).validate().is_err());
    }
}
