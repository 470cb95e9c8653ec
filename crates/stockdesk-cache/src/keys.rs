//! Cache key derivation.
//!
//! Every key the application stores lives under a single prefix so that
//! `clear` and `list` can enumerate exactly our entries and nothing else
//! sharing the Redis instance.

use sha2::{Digest, Sha256};

/// Prefix for all cache keys.
const CACHE_PREFIX: &str = "stockdesk";

/// Builds a prefixed key for an explicitly named entry (admin-added).
pub fn prefixed(key: &str) -> String {
    format!("{}:{}", CACHE_PREFIX, key)
}

/// Deterministic fingerprint over a handler name and request path.
///
/// This is the sole collision-avoidance mechanism for cached responses.
/// Note what it does NOT include: HTTP method, query string, or caller
/// identity. Responses that vary along those dimensions will share a
/// fingerprint. Routes wrapped in the response cache must therefore be
/// idempotent GETs whose output depends on the path alone.
pub fn fingerprint(handler_name: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(handler_name.as_bytes());
    hasher.update(b":");
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}

/// Full storage key for a cached response.
pub fn response_key(handler_name: &str, path: &str) -> String {
    format!(
        "{}:resp:{}",
        CACHE_PREFIX,
        fingerprint(handler_name, path)
    )
}

/// Pattern matching every entry this application owns.
pub fn all_entries_pattern() -> String {
    format!("{}:*", CACHE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = fingerprint("list_products", "/products");
        let b = fingerprint("list_products", "/products");
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_distinguishes_handlers_and_paths() {
        let base = fingerprint("list_products", "/products");
        assert_ne!(base, fingerprint("list_vendors", "/products"));
        assert_ne!(base, fingerprint("list_products", "/vendors"));
    }

    #[test]
    fn fingerprint_input_boundary_is_unambiguous() {
        // The separator keeps ("ab", "c") and ("a", "bc") apart.
        assert_ne!(fingerprint("ab", "c"), fingerprint("a", "bc"));
    }

    #[test]
    fn fingerprint_ignores_everything_but_handler_and_path() {
        // Known gap, asserted on purpose: the key has no method or query
        // component, so a GET and a DELETE of the same path collide, as do
        // `/products?page=1` and `/products?page=2` once the query string is
        // stripped by the caller. A future fix must change this test
        // deliberately.
        let with_query = fingerprint("list_products", "/products");
        let other_caller = fingerprint("list_products", "/products");
        assert_eq!(with_query, other_caller);
    }

    #[test]
    fn response_key_is_prefixed() {
        let key = response_key("list_products", "/products");
        assert!(key.starts_with("stockdesk:resp:"));
    }

    #[test]
    fn prefixed_key_matches_all_entries_pattern() {
        let key = prefixed("manual-entry");
        assert!(key.starts_with("stockdesk:"));
        assert!(all_entries_pattern().starts_with("stockdesk:"));
    }
}
