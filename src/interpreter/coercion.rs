//! Numeric coercion shared by the arithmetic, comparison and loop kinds.

use crate::graph::Value;

/// Coerces a value to a number; see [`Value::as_number`].
pub fn to_number(value: &Value) -> Option<f64> {
    value.as_number()
}

/// Coerces a value to a number truncated toward zero.
pub fn to_integer(value: &Value) -> Option<f64> {
    value.as_number().map(truncate)
}

/// Truncation toward zero that never yields negative zero.
pub fn truncate(n: f64) -> f64 {
    let t = n.trunc();
    if t == 0.0 { 0.0 } else { t }
}

/// Coerces every operand or returns `None` if any of them is not numeric.
pub fn all_numbers(values: &[Value]) -> Option<Vec<f64>> {
    values.iter().map(to_number).collect()
}

/// Remainder normalized into `[0, |divisor|)`. The divisor must be nonzero.
pub fn normalized_modulo(a: f64, b: f64) -> f64 {
    let m = b.abs();
    truncate(((a % m) + m) % m)
}

/// Rounds half up, matching the editor's rounding of `x.5` toward +∞.
pub fn round_half_up(n: f64) -> f64 {
    truncate((n + 0.5).floor())
}

/// Two-operand min/max where an invalid operand falls back to the other.
pub fn pick_valid(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Clamps with bounds that are swapped when given inverted.
pub fn clamp_swapped(value: f64, min: f64, max: f64) -> f64 {
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    value.max(low).min(high)
}
