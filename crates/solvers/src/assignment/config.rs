use std::time::Duration;

use perks_core::FeePolicy;
use thiserror::Error;

/// Configuration for the assignment solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    fee_policy: FeePolicy,
    time_limit: Option<Duration>,
}

/// Errors that can occur when validating an assignment solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time_limit must be greater than zero")]
    ZeroTimeLimit,
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_limit` is `Some(Duration::ZERO)`.
    pub fn new(fee_policy: FeePolicy, time_limit: Option<Duration>) -> Result<Self, ConfigError> {
        if time_limit.is_some_and(|limit| limit.is_zero()) {
            return Err(ConfigError::ZeroTimeLimit);
        }

        Ok(Self {
            fee_policy,
            time_limit,
        })
    }

    /// Returns how annual costs are charged.
    #[must_use]
    pub fn fee_policy(&self) -> FeePolicy {
        self.fee_policy
    }

    /// Returns the wall-clock limit for a single solve, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}
