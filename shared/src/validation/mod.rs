//! Validation orchestration.
//!
//! The pipeline is strictly sequential: detect the payload type, run the
//! structural schema for that type, run the semantic rules regardless of the
//! structural outcome, then merge. Only a failed detection stops early.

mod detect;
mod engine;
mod pointer;
mod result;


pub use detect::detect_payload_type;
pub use engine::{validate, Validator};
pub use pointer::JsonPointer;
pub use result::{ErrorKeyword, ValidationError, ValidationResult, ValidationWarning};
