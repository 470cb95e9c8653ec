//! HTTP handlers for user accounts.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use stockdesk_auth::Claims;
use stockdesk_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use super::service::UserService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "User"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = UserService::register_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "User"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = UserService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Decode and return the claims of the presented token
///
/// Probe endpoint for clients and ops tooling to check token health.
#[utoipa::path(
    post,
    path = "/user/validate-token",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = Claims),
        (status = 401, description = "Token is invalid or expired", body = ErrorResponse)
    ),
    tag = "User"
)]
#[instrument(skip(auth_user))]
pub async fn validate_token(auth_user: AuthUser) -> Json<Claims> {
    Json(auth_user.0)
}

/// Database connectivity check
#[utoipa::path(
    get,
    path = "/user/dbhealthcheck",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 500, description = "Database not connected", body = ErrorResponse)
    ),
    tag = "User"
)]
#[instrument(skip(state))]
pub async fn db_healthcheck(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    UserService::db_health(&state.db).await?;

    Ok(Json(HealthResponse {
        status: "up".to_string(),
        timestamp: chrono::Utc::now(),
    }))
}
