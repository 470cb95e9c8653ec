//! # Stockdesk Cache
//!
//! Redis-backed response cache for the Stockdesk API.
//!
//! This crate provides:
//! - Redis connection management with soft-failure semantics: a broken
//!   backing store degrades reads to "always recompute", never to a request
//!   failure
//! - Cache operations (get, set with TTL, delete, clear, list)
//! - Deterministic fingerprint keys derived from handler name + request path
//! - [`ResponseCache`], an explicit middleware combinator that wraps an
//!   idempotent route in a read-through cache
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use stockdesk_cache::{CacheConfig, RedisCache, ResponseCache};
//!
//! let config = CacheConfig::from_env();
//! let cache = RedisCache::new(&config.redis_url, Duration::from_secs(config.default_ttl_seconds))
//!     .await
//!     .ok();
//!
//! let layer = ResponseCache::new(cache, "list_products", Duration::from_secs(60));
//! ```

pub mod config;
pub mod keys;
pub mod middleware;
pub mod redis;

pub use config::CacheConfig;
pub use keys::{all_entries_pattern, fingerprint, prefixed, response_key};
pub use middleware::{CachedResponse, ResponseCache};
pub use self::redis::{CacheError, RedisCache};
