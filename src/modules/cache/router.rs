use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{
    add_to_cache, clear_cache, delete_fingerprint, delete_from_cache, list_cache,
};

pub fn init_cache_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cache).post(add_to_cache).delete(clear_cache))
        .route("/fingerprint", delete(delete_fingerprint))
        .route("/{key}", delete(delete_from_cache))
}
