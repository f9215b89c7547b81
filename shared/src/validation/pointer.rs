//! JSON Pointer paths for reported issues.

use std::fmt;

/// An immutable JSON Pointer (RFC 6901) built up while walking a document.
///
/// The root renders as `/`; children render as `/resourceSpans/0/scopeSpans`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPointer {
    encoded: String,
}

impl JsonPointer {
    /// Returns the pointer to the document root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a child pointer for an object field.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        let mut encoded = String::with_capacity(self.encoded.len() + name.len() + 1);
        encoded.push_str(&self.encoded);
        encoded.push('/');
        for c in name.chars() {
            match c {
                '~' => encoded.push_str("~0"),
                '/' => encoded.push_str("~1"),
                _ => encoded.push(c),
            }
        }
        Self { encoded }
    }

    /// Returns a child pointer for an array element.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self {
            encoded: format!("{}/{index}", self.encoded),
        }
    }

    /// Returns true if this is the root pointer.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.encoded.is_empty()
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.encoded)
        }
    }
}
