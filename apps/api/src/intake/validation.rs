//! Field validators for the intake conversation. Pure predicates: a `false`
//! means "re-prompt", never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Syntactic `local@domain.tld` check. No DNS or MX lookups.
pub fn validate_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// Valid iff the text holds 10 to 15 digits once every non-digit is dropped.
/// Spaces, dashes, parentheses and a leading `+` are all accepted.
pub fn validate_phone(text: &str) -> bool {
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
