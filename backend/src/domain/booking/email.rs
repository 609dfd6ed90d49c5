//! Email shape check used by booking intake.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local@domain.tld with no whitespace or extra `@` in any part.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether `value` looks like `local@domain.tld`.
///
/// This is a shape check only; deliverability is not verified.
///
/// # Examples
/// ```
/// use rentals_backend::domain::booking::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}
