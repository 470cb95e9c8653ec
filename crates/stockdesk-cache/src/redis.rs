//! Redis cache client.
//!
//! The backing store is shared by every process instance behind the load
//! balancer; single-key get/set/delete rely on Redis's own per-key
//! atomicity, and no cross-key transactions are used anywhere.
//!
//! Read/write failures are soft: `get` degrades to a miss and logs, so a
//! dead Redis slows the API down but never breaks a request.

use std::collections::BTreeMap;
use std::time::Duration;

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Redis cache client with a managed, reconnecting connection.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    default_ttl: Duration,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RedisCache {
    /// Creates a new Redis cache client.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if the initial connection fails.
    /// Callers treat that as "run without a cache", not as a fatal error.
    pub async fn new(redis_url: &str, default_ttl: Duration) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn, default_ttl })
    }

    /// The process-wide default TTL for cached values.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Gets a cached value by key.
    ///
    /// Returns `None` on absence, after expiry, on deserialization failure,
    /// or on a backing-store error. The caller cannot distinguish those
    /// cases and should not need to.
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!(cache.key = %key, "Cache hit");
                match serde_json::from_str(&value) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        error!(cache.key = %key, error = %e, "Failed to deserialize cached value");
                        None
                    }
                }
            }
            Ok(None) => {
                debug!(cache.key = %key, "Cache miss");
                None
            }
            Err(e) => {
                error!(cache.key = %key, error = %e, "Redis GET error");
                None
            }
        }
    }

    /// Sets a cached value with the default TTL. Overwrites silently.
    #[instrument(skip(self, value), fields(cache.operation = "SET"))]
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        self.set_with_ttl(key, value, self.default_ttl).await
    }

    /// Sets a cached value with a custom TTL.
    #[instrument(skip(self, value), fields(cache.operation = "SETEX"))]
    pub async fn set_with_ttl<T>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(value)?;

        conn.set_ex::<_, _, ()>(key, json, ttl.as_secs()).await?;

        debug!(cache.key = %key, cache.ttl_secs = %ttl.as_secs(), "Cache set");

        Ok(())
    }

    /// Deletes a key, reporting whether it was present.
    #[instrument(skip(self), fields(cache.operation = "DEL"))]
    pub async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();

        let removed: u64 = conn.del(key).await?;

        debug!(cache.key = %key, cache.removed = %(removed > 0), "Cache delete");

        Ok(removed > 0)
    }

    /// Deletes all keys matching a pattern, returning the count removed.
    ///
    /// Uses SCAN, so concurrent writers are only ever blocked for the
    /// duration of each cursor step.
    #[instrument(skip(self), fields(cache.operation = "SCAN_DEL"))]
    pub async fn clear_prefix(&self, pattern: &str) -> Result<u64, CacheError> {
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut deleted: u64 = 0;

        loop {
            let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                let count: u64 = conn.del(&keys).await?;
                deleted += count;
            }

            cursor = next_cursor;
            if cursor == 0 {
                break;
            }
        }

        debug!(cache.pattern = %pattern, cache.deleted = %deleted, "Cache cleared");

        Ok(deleted)
    }

    /// Snapshot of every entry matching a pattern.
    ///
    /// O(n) in entry count. The SCAN cursor gives a point-in-time-ish
    /// enumeration without blocking writers; values written mid-scan may or
    /// may not appear.
    #[instrument(skip(self), fields(cache.operation = "SCAN_MGET"))]
    pub async fn list_all(
        &self,
        pattern: &str,
    ) -> Result<BTreeMap<String, serde_json::Value>, CacheError> {
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut entries = BTreeMap::new();

        loop {
            let (next_cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                let values: Vec<Option<String>> = redis::cmd("MGET")
                    .arg(&keys)
                    .query_async(&mut conn)
                    .await?;

                for (key, value) in keys.into_iter().zip(values) {
                    // A key may expire between SCAN and MGET; skip it.
                    let Some(raw) = value else { continue };
                    let parsed = serde_json::from_str(&raw)
                        .unwrap_or(serde_json::Value::String(raw));
                    entries.insert(key, parsed);
                }
            }

            cursor = next_cursor;
            if cursor == 0 {
                break;
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        id: i32,
        name: String,
    }

    // Integration tests require a running Redis instance.

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn set_then_get_roundtrip() {
        let cache = RedisCache::new("redis://localhost:6379", Duration::from_secs(60))
            .await
            .unwrap();

        let data = TestData {
            id: 1,
            name: "ten-kg-basmati".to_string(),
        };

        let key = keys::prefixed("test:roundtrip");
        cache.set(&key, &data).await.unwrap();

        let retrieved: Option<TestData> = cache.get(&key).await;
        assert_eq!(retrieved, Some(data));

        // Repeated gets return the same value.
        let again: Option<TestData> = cache.get(&key).await;
        assert!(again.is_some());

        assert!(cache.delete(&key).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn get_after_ttl_elapses_is_a_miss() {
        let cache = RedisCache::new("redis://localhost:6379", Duration::from_secs(60))
            .await
            .unwrap();

        let key = keys::prefixed("test:ttl");
        cache
            .set_with_ttl(&key, &"short-lived", Duration::from_secs(1))
            .await
            .unwrap();

        assert!(cache.get::<String>(&key).await.is_some());
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(cache.get::<String>(&key).await.is_none());
    }

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn delete_reports_presence() {
        let cache = RedisCache::new("redis://localhost:6379", Duration::from_secs(60))
            .await
            .unwrap();

        let key = keys::prefixed("test:delete");
        assert!(!cache.delete(&key).await.unwrap());

        cache.set(&key, &"value").await.unwrap();
        assert!(cache.delete(&key).await.unwrap());
        assert!(cache.get::<String>(&key).await.is_none());
    }

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn clear_prefix_then_list_all_is_empty() {
        let cache = RedisCache::new("redis://localhost:6379", Duration::from_secs(60))
            .await
            .unwrap();

        cache.set(&keys::prefixed("test:a"), &1).await.unwrap();
        cache.set(&keys::prefixed("test:b"), &2).await.unwrap();

        cache.clear_prefix(&keys::all_entries_pattern()).await.unwrap();

        let entries = cache.list_all(&keys::all_entries_pattern()).await.unwrap();
        assert!(entries.is_empty());
    }
}
