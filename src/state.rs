//! Shared application state.
//!
//! Everything a handler needs is constructed once at startup and injected
//! here; there are no process-wide globals initialized at import time. The
//! cache handle is optional by design: if Redis is unreachable when the
//! process comes up, the API runs uncached rather than refusing to start.

use std::time::Duration;

use sqlx::PgPool;
use stockdesk_cache::{CacheConfig, RedisCache};
use stockdesk_config::{CorsConfig, JwtConfig, RateLimitConfig};
use stockdesk_db::init_db_pool;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub cache_config: CacheConfig,
    pub cache: Option<RedisCache>,
}

pub async fn init_app_state() -> AppState {
    let cache_config = CacheConfig::from_env();
    let cache = match RedisCache::new(
        &cache_config.redis_url,
        Duration::from_secs(cache_config.default_ttl_seconds),
    )
    .await
    {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!(error = %e, "Redis unavailable, running without response cache");
            None
        }
    };

    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        cache_config,
        cache,
    }
}
