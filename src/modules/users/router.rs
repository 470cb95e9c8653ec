use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{db_healthcheck, login_user, register_user, validate_token};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/validate-token", post(validate_token))
        .route("/dbhealthcheck", get(db_healthcheck))
}
