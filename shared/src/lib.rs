//! Otlpcheck Shared Library
//!
//! This crate contains the OTLP/JSON validation engine used by the
//! `otlpcheck` HTTP service and command-line tool.
//!
//! # Modules
//!
//! - [`validation`] - Type detection, the validation pipeline and result types
//! - [`schema`] - Structural schemas for the OTLP/JSON encoding
//! - [`semantic`] - Domain rules the structural schemas cannot express
//! - [`models`] - Typed views of payload types, identifiers and metric shapes
//! - [`config`] - Engine options
//!
//! # Example
//!
//! ```
//! use shared::serde_json::json;
//! use shared::validation::{validate, ErrorKeyword};
//!
//! let result = validate(&json!({
//!     "resourceSpans": [{"scopeSpans": [{"spans": [{
//!         "traceId": "00000000000000000000000000000000",
//!         "spanId": "eee19b7ec3c1b174"
//!     }]}]}]
//! }));
//!
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].keyword, ErrorKeyword::Semantic);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod models;
pub mod schema;
pub mod semantic;
pub mod validation;

/// Re-export common dependencies for convenience.
pub use serde_json;
