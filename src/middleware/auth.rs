//! Bearer token extraction and verification.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use stockdesk_auth::{Claims, verify_token};
use stockdesk_core::{AppError, ErrorKind};

use crate::state::AppState;

/// Extractor that validates the bearer token and yields the caller's claims.
///
/// Ordinary-user gating trusts the signed claim set as-is; no store lookup
/// happens here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The caller's email (token subject).
    pub fn email(&self) -> &str {
        &self.0.sub
    }

    /// The caller's user row ID.
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
///
/// Missing header or a non-Bearer scheme is rejected before any codec work
/// runs.
pub(crate) fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(ErrorKind::TokenMissing))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::unauthorized(ErrorKind::TokenMalformed))?;

    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
