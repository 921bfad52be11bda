//! Email shape check

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // local@domain.tld, no whitespace, exactly one @, no empty dot labels
        Regex::new(r"^[^\s@.]+(\.[^\s@.]+)*@[^\s@.]+(\.[^\s@.]+)+$")
            .expect("email pattern compiles")
    })
}

/// Whether `value` looks like an email address.
///
/// Shape only; nothing is resolved or delivered.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(is_email("x_y@sub.domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_email(""));
        assert!(!is_email("bad-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@@b.com"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@b..com"));
        assert!(!is_email("a@b.com "));
        assert!(!is_email("a..b@c.com"));
        assert!(!is_email(".a@b.com"));
        assert!(!is_email("a.@b.com"));
    }
}
