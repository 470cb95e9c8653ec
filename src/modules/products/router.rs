use std::time::Duration;

use axum::{Router, middleware, routing::get};

use stockdesk_cache::ResponseCache;

use crate::state::AppState;

use super::controller::list_products;

/// Routes for the product catalog. The listing is wrapped in the
/// read-through response cache, so repeated reads within the TTL are
/// served from Redis without touching Postgres.
pub fn init_products_router(state: &AppState) -> Router<AppState> {
    let response_cache = ResponseCache::new(
        state.cache.clone(),
        "list_products",
        Duration::from_secs(state.cache_config.default_ttl_seconds),
    );

    Router::new().route(
        "/",
        get(list_products).layer(middleware::from_fn(move |req, next| {
            let response_cache = response_cache.clone();
            async move { response_cache.handle(req, next).await }
        })),
    )
}
