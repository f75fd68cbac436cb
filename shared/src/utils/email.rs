//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of an address per RFC 5321
pub const MAX_EMAIL_LENGTH: usize = 254;

// Pragmatic address shape: local@domain.tld, no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$")
        .expect("email regex is valid")
});

/// Normalize an email address: trim surrounding whitespace and lower-case it
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an already-normalized email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logs (e.g., j***@example.com)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@Example.COM \n"), "user@example.com");
        assert_eq!(normalize_email("u@x.com"), "u@x.com");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("u@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("u@localhost"));
        assert!(!is_valid_email("u @x.com"));
        assert!(!is_valid_email("U@X.COM")); // must be normalized first
        assert!(!is_valid_email(&format!("{}@x.com", "a".repeat(260))));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john@example.com"), "j***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("garbage"), "***");
    }
}
