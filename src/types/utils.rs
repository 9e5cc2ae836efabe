//! Shared utility functions.

use url::Url;

// =============================================================================
// URL Validation
// =============================================================================

/// Basic check that a string is a usable absolute URL (scheme and host).
///
/// Used for the operator's incident link, the webhook URL and the
/// communication links in config.
#[inline]
pub fn is_url(s: &str) -> bool {
    Url::parse(s.trim())
        .map(|u| !u.scheme().is_empty() && u.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

// =============================================================================
// Tests
// =============================================================================
