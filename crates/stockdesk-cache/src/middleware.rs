//! Read-through response caching for idempotent routes.
//!
//! [`ResponseCache`] is an explicit combinator: it is constructed with a
//! handler name and a TTL and attached to exactly one route, instead of
//! introspecting handler arguments at call time. The cache key is the
//! fingerprint of (handler name, request path), so everything the key does
//! and does not distinguish is visible at the call site.
//!
//! Pipeline per request (after authentication has already run):
//!
//! 1. derive the fingerprint key from handler name + path
//! 2. `GET`: a hit replays the stored response without invoking the handler
//! 3. on miss, invoke the handler
//! 4. a successful (2xx) response is stored with the configured TTL;
//!    failures propagate uncached
//!
//! There is no per-key single-flight: concurrent misses on the same
//! fingerprint each invoke the handler and race on the final `SET`,
//! last-write-wins. That is an accepted inefficiency for idempotent
//! handlers, not a correctness problem.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::keys;
use crate::redis::RedisCache;

/// A materialized handler response, as stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl IntoResponse for CachedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        if let Some(ct) = self.content_type.as_deref() {
            if let Ok(value) = HeaderValue::from_str(ct) {
                response.headers_mut().insert(CONTENT_TYPE, value);
            }
        }
        response
            .headers_mut()
            .insert("x-cache", HeaderValue::from_static("hit"));
        response
    }
}

/// Read-through cache wrapper for one route.
#[derive(Clone)]
pub struct ResponseCache {
    cache: Option<RedisCache>,
    handler_name: Arc<str>,
    ttl: Duration,
}

impl ResponseCache {
    /// Wraps the route identified by `handler_name`.
    ///
    /// `cache` is `None` when the backing store was unreachable at startup;
    /// the wrapper then passes every request straight through.
    pub fn new(cache: Option<RedisCache>, handler_name: &str, ttl: Duration) -> Self {
        Self {
            cache,
            handler_name: Arc::from(handler_name),
            ttl,
        }
    }

    /// Middleware entry point, used with `axum::middleware::from_fn`.
    pub async fn handle(self, req: Request, next: Next) -> Response {
        let Some(cache) = self.cache else {
            return next.run(req).await;
        };

        let key = keys::response_key(&self.handler_name, req.uri().path());

        if let Some(hit) = cache.get::<CachedResponse>(&key).await {
            debug!(handler = %self.handler_name, "serving cached response");
            return hit.into_response();
        }

        let response = next.run(req).await;

        if !response.status().is_success() {
            return response;
        }

        let (parts, body) = response.into_parts();
        let bytes = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(_) => return (parts, Body::empty()).into_response(),
        };

        let entry = CachedResponse {
            status: parts.status.as_u16(),
            content_type: parts
                .headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string()),
            body: bytes.to_vec(),
        };

        // Store failures degrade to "recompute next time".
        if let Err(e) = cache.set_with_ttl(&key, &entry, self.ttl).await {
            warn!(handler = %self.handler_name, error = %e, "failed to store cached response");
        }

        let mut response = Response::from_parts(parts, Body::from(bytes));
        response
            .headers_mut()
            .insert("x-cache", HeaderValue::from_static("miss"));
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, middleware, routing::get};
    use serde_json::json;
    use tower::ServiceExt;

    fn demo_router(wrapper: ResponseCache) -> Router {
        Router::new()
            .route("/products", get(|| async { Json(json!({"products": []})) }))
            .route_layer(middleware::from_fn(move |req, next| {
                let wrapper = wrapper.clone();
                async move { wrapper.handle(req, next).await }
            }))
    }

    #[tokio::test]
    async fn disabled_cache_passes_requests_through() {
        let wrapper = ResponseCache::new(None, "list_products", Duration::from_secs(60));
        let app = demo_router(wrapper);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        // No backing store, so no cache header is added.
        assert!(response.headers().get("x-cache").is_none());
    }

    #[test]
    fn cached_response_serialization_roundtrip() {
        let entry = CachedResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: br#"{"products":[]}"#.to_vec(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: CachedResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn cached_response_rebuilds_status_and_content_type() {
        let entry = CachedResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: b"{}".to_vec(),
        };
        let response = entry.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.headers().get("x-cache").unwrap(), "hit");
    }
}
