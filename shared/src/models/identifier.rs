//! Trace and span identifiers.
//!
//! OTLP/JSON encodes identifiers as hex strings: 32 characters for a trace ID,
//! 16 for a span ID. Input is case-insensitive; the canonical form is
//! lowercase. An all-zero identifier is well-formed hex but means "unset".

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier has the wrong number of hex characters.
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required number of characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The identifier contains a non-hex character.
    #[error("invalid hex identifier: {0}")]
    InvalidHex(String),
}

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], IdentifierError> {
    if s.len() != N * 2 {
        return Err(IdentifierError::InvalidLength {
            expected: N * 2,
            actual: s.len(),
        });
    }
    let mut bytes = [0u8; N];
    hex::decode_to_slice(s, &mut bytes)
        .map_err(|e| IdentifierError::InvalidHex(e.to_string()))?;
    Ok(bytes)
}

/// A 16-byte trace identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId([u8; 16]);

/// An 8-byte span identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanId([u8; 8]);

impl TraceId {
    /// Number of hex characters in the wire form.
    pub const HEX_LEN: usize = 32;

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns true if every byte is zero (the "unset" identifier).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl SpanId {
    /// Number of hex characters in the wire form.
    pub const HEX_LEN: usize = 16;

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Returns true if every byte is zero (the "unset" identifier).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for TraceId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl FromStr for SpanId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
