//! Email address validation.

use std::sync::LazyLock;

use regex::Regex;

/// Shape check: something@something.something with no whitespace or extra `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

/// DNS label rules for the strict domain check: alphanumeric edges, hyphens
/// allowed inside, at most 63 characters per label.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("invalid domain regex")
});

/// Basic shape validation of an email address.
///
/// Surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Stricter validation on top of [`is_valid_email`]: RFC-style length limits
/// and common invalid patterns in the local part and domain.
pub fn is_valid_email_strict(email: &str) -> bool {
    if !is_valid_email(email) {
        return false;
    }

    let trimmed = email.trim();
    if trimmed.len() > 254 {
        return false;
    }

    // The basic regex guarantees exactly one `@`.
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };

    if local.len() > 64 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    DOMAIN_REGEX.is_match(domain)
}
