//! HTTP handlers for cache administration.
//!
//! Unlike the read-through path, these are explicit operator actions: a
//! broken backing store surfaces as a 500 here instead of soft-failing.

use std::time::Duration;

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use stockdesk_cache::{RedisCache, keys};
use stockdesk_core::AppError;

use crate::middleware::role::AdminUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    AddCacheEntryRequest, CacheListResponse, CacheMessageResponse, FingerprintRequest,
};

fn require_cache(state: &AppState) -> Result<&RedisCache, AppError> {
    state
        .cache
        .as_ref()
        .ok_or_else(|| AppError::internal(anyhow::anyhow!("Cache backing store unavailable")))
}

/// List every cached entry
#[utoipa::path(
    get,
    path = "/cache",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All cached entries", body = CacheListResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Cache"
)]
#[instrument(skip(state, _admin))]
pub async fn list_cache(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<CacheListResponse>, AppError> {
    let cache = require_cache(&state)?;
    let entries = cache
        .list_all(&keys::all_entries_pattern())
        .await
        .map_err(AppError::internal)?;

    Ok(Json(CacheListResponse { cache: entries }))
}

/// Add an explicit key/value entry with a TTL
#[utoipa::path(
    post,
    path = "/cache",
    security(("bearer_auth" = [])),
    request_body = AddCacheEntryRequest,
    responses(
        (status = 200, description = "Entry stored", body = CacheMessageResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Cache"
)]
#[instrument(skip(state, _admin, dto))]
pub async fn add_to_cache(
    _admin: AdminUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AddCacheEntryRequest>,
) -> Result<Json<CacheMessageResponse>, AppError> {
    let cache = require_cache(&state)?;
    let key = keys::prefixed(&dto.key);

    cache
        .set_with_ttl(&key, &dto.value, Duration::from_secs(dto.expire))
        .await
        .map_err(AppError::internal)?;

    Ok(Json(CacheMessageResponse {
        message: format!(
            "Key '{}' added to cache with expiration {} seconds",
            dto.key, dto.expire
        ),
    }))
}

/// Delete a cache entry by key
#[utoipa::path(
    delete,
    path = "/cache/{key}",
    security(("bearer_auth" = [])),
    params(("key" = String, Path, description = "Entry key without the application prefix")),
    responses(
        (status = 200, description = "Entry removed", body = CacheMessageResponse),
        (status = 404, description = "Key not present"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Cache"
)]
#[instrument(skip(state, _admin))]
pub async fn delete_from_cache(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheMessageResponse>, AppError> {
    let cache = require_cache(&state)?;

    let removed = cache
        .delete(&keys::prefixed(&key))
        .await
        .map_err(AppError::internal)?;

    if !removed {
        return Err(AppError::not_found(anyhow::anyhow!(
            "Key '{}' not found in cache",
            key
        )));
    }

    Ok(Json(CacheMessageResponse {
        message: format!("Key '{}' removed from cache", key),
    }))
}

/// Delete a cached response by its handler+path fingerprint
#[utoipa::path(
    delete,
    path = "/cache/fingerprint",
    security(("bearer_auth" = [])),
    request_body = FingerprintRequest,
    responses(
        (status = 200, description = "Cached response removed", body = CacheMessageResponse),
        (status = 404, description = "No cached response for that fingerprint"),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Cache"
)]
#[instrument(skip(state, _admin, dto))]
pub async fn delete_fingerprint(
    _admin: AdminUser,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<FingerprintRequest>,
) -> Result<Json<CacheMessageResponse>, AppError> {
    let cache = require_cache(&state)?;
    let key = keys::response_key(&dto.handler, &dto.path);

    let removed = cache.delete(&key).await.map_err(AppError::internal)?;

    if !removed {
        return Err(AppError::not_found(anyhow::anyhow!(
            "No cached response for handler '{}' at path '{}'",
            dto.handler,
            dto.path
        )));
    }

    Ok(Json(CacheMessageResponse {
        message: format!(
            "Cached response for handler '{}' at path '{}' removed",
            dto.handler, dto.path
        ),
    }))
}

/// Clear the entire cache
#[utoipa::path(
    delete,
    path = "/cache",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cache cleared", body = CacheMessageResponse),
        (status = 401, description = "Not an administrator")
    ),
    tag = "Cache"
)]
#[instrument(skip(state, _admin))]
pub async fn clear_cache(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<CacheMessageResponse>, AppError> {
    let cache = require_cache(&state)?;

    let deleted = cache
        .clear_prefix(&keys::all_entries_pattern())
        .await
        .map_err(AppError::internal)?;

    Ok(Json(CacheMessageResponse {
        message: format!("All cache cleared successfully ({} entries)", deleted),
    }))
}
