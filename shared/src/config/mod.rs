//! Engine configuration.
//!
//! [`ValidationOptions`] carries the knobs that change rule outcomes. Front
//! ends build it from flags or environment variables and call
//! [`ValidationOptions::checked`] before handing it to a
//! [`Validator`](crate::validation::Validator).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Default tolerance for start times in the future, in seconds.
pub const DEFAULT_CLOCK_SKEW_TOLERANCE_SECS: u64 = 60;

/// Largest accepted clock skew tolerance (one day).
pub const MAX_CLOCK_SKEW_TOLERANCE_SECS: u64 = 86_400;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Errors raised for invalid engine options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field failed its range check.
    #[error("Invalid validation options: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Options that influence rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// How far a span start time may lie in the future before a warning.
    #[validate(range(
        max = 86400,
        message = "Clock skew tolerance cannot exceed 86400 seconds"
    ))]
    pub clock_skew_tolerance_secs: u64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            clock_skew_tolerance_secs: DEFAULT_CLOCK_SKEW_TOLERANCE_SECS,
        }
    }
}

impl ValidationOptions {
    /// Creates options with the given clock skew tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared::config::ValidationOptions;
    ///
    /// let options = ValidationOptions::new(5);
    /// assert_eq!(options.clock_skew_tolerance_nanos(), 5_000_000_000);
    /// ```
    #[must_use]
    pub const fn new(clock_skew_tolerance_secs: u64) -> Self {
        Self {
            clock_skew_tolerance_secs,
        }
    }

    /// Returns `self` if every field is within range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the tolerance exceeds
    /// [`MAX_CLOCK_SKEW_TOLERANCE_SECS`].
    pub fn checked(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// The tolerance in nanoseconds.
    #[must_use]
    pub const fn clock_skew_tolerance_nanos(&self) -> u64 {
        self.clock_skew_tolerance_secs.saturating_mul(NANOS_PER_SEC)
    }
}
