//! Integer reading shared by the structural and semantic layers.

use serde_json::Value;

/// Largest integer a JSON number can carry without losing precision.
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns the integer carried by a JSON number, accepting integral floats.
///
/// `2000` and `2000.0` read the same; `1.5`, floats beyond 2^53 and
/// non-numbers yield `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn json_integer(value: &Value) -> Option<i128> {
    if let Some(i) = value.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = value.as_u64() {
        return Some(i128::from(u));
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INTEGER {
        return Some(f as i128);
    }
    None
}
