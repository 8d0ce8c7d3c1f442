//! HTTP/HTTPS URL validation.

use url::Url;

/// Check whether `input` is a well-formed HTTP or HTTPS URL.
///
/// Leading and trailing whitespace is ignored. With `https_only` set, plain
/// HTTP URLs are rejected. Beyond what the URL parser enforces, the host must
/// be present, free of empty labels, and contain at least one dot unless it
/// is `localhost`.
///
/// # Example
///
/// ```
/// use torc_validate::is_valid_url;
///
/// assert!(is_valid_url("https://www.example.com", false));
/// assert!(!is_valid_url("ftp://example.com", false));
/// assert!(!is_valid_url("http://example.com", true));
/// ```
pub fn is_valid_url(input: &str, https_only: bool) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let Ok(url) = Url::parse(trimmed) else {
        return false;
    };

    match url.scheme() {
        "https" => {}
        "http" if !https_only => {}
        _ => return false,
    }

    let Some(host) = url.host_str() else {
        return false;
    };
    if host.is_empty() {
        return false;
    }
    if host.contains("..") || host.starts_with('.') || host.ends_with('.') {
        return false;
    }
    // Dotless hosts are rejected except for localhost.
    if host != "localhost" && !host.contains('.') {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_http_and_https() {
        assert!(is_valid_url("https://www.example.com", false));
        assert!(is_valid_url("http://example.com", false));
        assert!(is_valid_url("https://example.com/path?query=1#frag", false));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_valid_url("ftp://example.com", false));
        assert!(!is_valid_url("file:///etc/hosts", false));
        assert!(!is_valid_url("mailto:user@example.com", false));
    }

    #[test]
    fn https_only_rejects_http() {
        assert!(!is_valid_url("http://example.com", true));
        assert!(is_valid_url("https://example.com", true));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(!is_valid_url("", false));
        assert!(!is_valid_url("   ", false));
        assert!(!is_valid_url("not a url", false));
        assert!(!is_valid_url("http://", false));
    }

    #[test]
    fn rejects_malformed_hosts() {
        assert!(!is_valid_url("http://example..com", false));
        assert!(!is_valid_url("http://example.com.", false));
    }

    #[test]
    fn localhost_is_the_only_dotless_host() {
        assert!(is_valid_url("http://localhost", false));
        assert!(is_valid_url("http://localhost:8080", false));
        assert!(!is_valid_url("http://intranet", false));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_valid_url("  https://example.com  ", false));
    }
}
