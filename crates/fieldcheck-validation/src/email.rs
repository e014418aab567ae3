//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape pattern: one or more word characters (ASCII letters,
/// digits, underscore), then any number of groups of an optional dot or
/// hyphen followed by more word characters, an `@`, the same grammar for
/// the domain labels, and one or more dot-extensions of 2 to 4 word
/// characters.
///
/// Word classes are spelled out as `[0-9A-Za-z_]` to keep ASCII
/// semantics; the crate-default `\w` is Unicode-aware.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9A-Za-z_]+(?:[.-]?[0-9A-Za-z_]+)*@[0-9A-Za-z_]+(?:[.-]?[0-9A-Za-z_]+)*(?:\.[0-9A-Za-z_]{2,4})+$",
    )
    .expect("email pattern compiles")
});

/// Validates email shape against [`EMAIL_SHAPE`].
///
/// This is a best-effort shape check, not RFC validation: it rejects
/// consecutive separators around the `@` but accepts some
/// invalid-but-shaped strings (a numeric TLD, for one). The pattern is
/// the ground truth.
pub fn matches_email_shape(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
