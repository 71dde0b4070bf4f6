//! Runtime configuration
//!
//! Values come from the process environment (optionally seeded from `.env`).

use crate::error::DashboardError;
use crate::Result;
use rand::random_range;
use std::env;
use std::time::Duration;

pub const REPLY_DELAY_MIN_VAR: &str = "COGNIWEALTH_REPLY_DELAY_MIN_MS";
pub const REPLY_DELAY_MAX_VAR: &str = "COGNIWEALTH_REPLY_DELAY_MAX_MS";

const DEFAULT_REPLY_DELAY_MIN_MS: u64 = 1_000;
const DEFAULT_REPLY_DELAY_MAX_MS: u64 = 2_000;

/// Bounds of the simulated "assistant is typing" delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ReplyDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        if min_ms > max_ms {
            return Err(DashboardError::Config(format!(
                "reply delay minimum ({}ms) exceeds maximum ({}ms)",
                min_ms, max_ms
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Replies are produced immediately
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    /// Pick a delay uniformly inside the bounds
    pub fn sample(&self) -> Duration {
        let ms = if self.max_ms > self.min_ms {
            random_range(self.min_ms..=self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(ms)
    }
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_REPLY_DELAY_MIN_MS,
            max_ms: DEFAULT_REPLY_DELAY_MAX_MS,
        }
    }
}

/// Top-level configuration for a dashboard session
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    pub reply_delay: ReplyDelay,
}

impl DashboardConfig {
    /// Build configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let min_ms = read_ms(REPLY_DELAY_MIN_VAR, DEFAULT_REPLY_DELAY_MIN_MS)?;
        let max_ms = read_ms(REPLY_DELAY_MAX_VAR, DEFAULT_REPLY_DELAY_MAX_MS)?;

        Ok(Self {
            reply_delay: ReplyDelay::new(min_ms, max_ms)?,
        })
    }
}

fn read_ms(var: &str, default: u64) -> Result<u64> {
    match env::var(var) {
        Ok(raw) => parse_ms(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_ms(var: &str, raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|e| {
        DashboardError::Config(format!("{} must be a whole number of milliseconds: {}", var, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_bounds() {
        let config = DashboardConfig::default();
        assert_eq!(config.reply_delay.min_ms, 1_000);
        assert_eq!(config.reply_delay.max_ms, 2_000);
    }

    #[test]
    fn test_sample_stays_within_bounds() {
        let delay = ReplyDelay::new(10, 20).unwrap();
        for _ in 0..100 {
            let sampled = delay.sample();
            assert!(sampled >= Duration::from_millis(10));
            assert!(sampled <= Duration::from_millis(20));
        }
        assert_eq!(ReplyDelay::none().sample(), Duration::ZERO);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = ReplyDelay::new(500, 100);
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_parse_ms() {
        assert_eq!(parse_ms(REPLY_DELAY_MIN_VAR, " 250 ").unwrap(), 250);
        assert!(parse_ms(REPLY_DELAY_MIN_VAR, "soon").is_err());
        assert!(parse_ms(REPLY_DELAY_MIN_VAR, "-5").is_err());
    }
}
