//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use crate::config::{Config, DEFAULT_MAX_BODY_BYTES};
use shared::validation::Validator;

/// Application state shared across all request handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    validator: Validator,
    max_body_bytes: usize,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub const fn new(validator: Validator, max_body_bytes: usize) -> Self {
        Self {
            validator,
            max_body_bytes,
        }
    }

    /// Creates the application state described by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Validator::new(config.validation), config.max_body_bytes)
    }

    /// Returns the validation engine.
    #[must_use]
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Returns the request body limit in bytes.
    #[must_use]
    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Validator::default(), DEFAULT_MAX_BODY_BYTES)
    }
}
