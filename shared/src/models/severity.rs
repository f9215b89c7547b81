//! Log severity bands.
//!
//! OTLP severity numbers run from 0 to 24 and group into bands of four; each
//! band has a canonical short name that a record's `severityText` is expected
//! to start with.

use serde::{Deserialize, Serialize};

/// Canonical severity band implied by a severity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityBand {
    /// Severity number 0.
    Unspecified,
    /// Severity numbers 1-4.
    Trace,
    /// Severity numbers 5-8.
    Debug,
    /// Severity numbers 9-12.
    Info,
    /// Severity numbers 13-16.
    Warn,
    /// Severity numbers 17-20.
    Error,
    /// Severity numbers 21-24.
    Fatal,
}

impl SeverityBand {
    /// Maps an OTLP severity number to its band.
    ///
    /// See <https://opentelemetry.io/docs/specs/otel/logs/data-model/#field-severitynumber>.
    /// Returns `None` outside 0-24.
    #[must_use]
    pub const fn from_number(severity: i64) -> Option<Self> {
        match severity {
            0 => Some(Self::Unspecified),
            1..=4 => Some(Self::Trace),
            5..=8 => Some(Self::Debug),
            9..=12 => Some(Self::Info),
            13..=16 => Some(Self::Warn),
            17..=20 => Some(Self::Error),
            21..=24 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Returns the canonical uppercase band name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns true if `text` starts with this band's name, ignoring case.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        let name = self.as_str();
        text.get(..name.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
