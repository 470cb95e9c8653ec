//! DTOs for the cache admin endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheListResponse {
    /// Every stored entry, keyed by full storage key.
    pub cache: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddCacheEntryRequest {
    #[validate(length(min = 1, message = "Key is required"))]
    pub key: String,
    pub value: serde_json::Value,
    /// TTL in seconds; defaults to one hour.
    #[serde(default = "default_expire")]
    pub expire: u64,
}

fn default_expire() -> u64 {
    3600
}

/// Identifies a cached response by the inputs of its fingerprint.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FingerprintRequest {
    #[validate(length(min = 1, message = "Handler name is required"))]
    pub handler: String,
    #[validate(length(min = 1, message = "Path is required"))]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheMessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_entry_defaults_expire_to_an_hour() {
        let dto: AddCacheEntryRequest =
            serde_json::from_str(r#"{"key": "k", "value": "v"}"#).unwrap();
        assert_eq!(dto.expire, 3600);
    }

    #[test]
    fn add_entry_accepts_structured_values() {
        let dto: AddCacheEntryRequest =
            serde_json::from_str(r#"{"key": "k", "value": {"stock": 12}, "expire": 60}"#).unwrap();
        assert_eq!(dto.value["stock"], 12);
        assert_eq!(dto.expire, 60);
    }
}
