//! API route definitions.
//!
//! This module organizes all HTTP routes for the Otlpcheck API server.

mod health;
mod validate;

pub use health::health_routes;
pub use validate::{validate_routes, ValidateResponse};
