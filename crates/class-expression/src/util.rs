//! Coercion helpers shared by the cursor reads.

use crate::types::Primitive;

/// Truthiness of a primitive: non-zero numbers, non-empty strings, and `true`.
pub fn is_truthy(value: &Primitive) -> bool {
    match value {
        Primitive::Num(n) => *n != 0.0 && !n.is_nan(),
        Primitive::Str(s) => !s.is_empty(),
        Primitive::Bool(b) => *b,
    }
}

/// String form of a primitive. Integral numbers print without a fractional
/// part, so a numeric `0` used as a switch discriminant coerces to `"0"` and
/// can match an arm literal `"0"`.
pub fn string_form(value: &Primitive) -> String {
    match value {
        Primitive::Num(n) => format_number(*n),
        Primitive::Str(s) => s.clone(),
        Primitive::Bool(b) => b.to_string(),
    }
}

pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}
