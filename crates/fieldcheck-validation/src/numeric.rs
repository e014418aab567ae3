//! Numeric coercion and validation

/// Coerces a raw field value to a number.
///
/// Follows the host-language `Number()` contract the age rule was written
/// against: surrounding whitespace is trimmed, an empty (or
/// whitespace-only) string coerces to 0, and anything else parses as
/// `f64` with unparsable input yielding NaN.
///
/// Known deviations from ECMAScript `Number()`: hex/octal/binary literals
/// are not recognized, and Rust's parser also accepts the `inf` and
/// `infinity` spellings. Parsing is locale-independent; a decimal comma
/// is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Validates that a raw value coerces to a number strictly greater than
/// zero. Zero, negatives, and NaN are all invalid.
pub fn is_positive_number(raw: &str) -> bool {
    coerce_number(raw) > 0.0
}
