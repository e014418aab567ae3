//! String validation functions

/// Length of a string in UTF-16 code units.
///
/// Name and surname rules count code units rather than chars or bytes,
/// matching how a browser reports `value.length`. An astral-plane symbol
/// such as "𝒜" counts as two.
pub fn utf16_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Validates minimum string length, counted in UTF-16 code units.
///
/// No trimming: surrounding whitespace counts toward the length.
pub fn has_min_length(s: &str, min: usize) -> bool {
    utf16_length(s) >= min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("a", 1)]
    #[case("ab", 2)]
    #[case("  ", 2)]
    #[case("ñé", 2)]
    #[case("𝒜", 2)] // surrogate pair counts as two code units
    fn utf16_lengths(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(utf16_length(input), expected);
    }

    #[test]
    fn min_length_boundaries() {
        assert!(!has_min_length("", 2));
        assert!(!has_min_length("a", 2));
        assert!(has_min_length("ab", 2));
        assert!(has_min_length("abc", 2));
    }

    #[test]
    fn min_length_does_not_trim() {
        // Two spaces satisfy a length-2 minimum.
        assert!(has_min_length("  ", 2));
    }
}
