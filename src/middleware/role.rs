//! Admin role gating.

use axum::{extract::FromRequestParts, http::request::Parts};

use stockdesk_auth::Claims;
use stockdesk_core::{AppError, ErrorKind};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// The stored role value that grants administrative access. Comparison is
/// case-insensitive, so legacy rows holding `Admin` or `ADMIN` still count.
pub const ADMIN_ROLE: &str = "admin";

pub fn is_admin_role(role: &str) -> bool {
    role.eq_ignore_ascii_case(ADMIN_ROLE)
}

/// Extractor for administrator-only routes.
///
/// Verifies the bearer token, then re-fetches the caller's role from the
/// credential store on every request, so role changes take effect
/// immediately at the cost of one lookup per call. A missing user record and a
/// non-admin role both produce the same uniform 401 as a bad token.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl AdminUser {
    pub fn email(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        let role = UserService::find_role_by_email(&state.db, &claims.sub).await?;

        match role {
            Some(role) if is_admin_role(&role) => Ok(AdminUser(claims)),
            _ => Err(AppError::unauthorized(ErrorKind::RoleDenied)),
        }
    }
}
