//! User data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user account. The password hash never leaves the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    /// `user` or `admin`; compared case-insensitively by the role gate.
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Credential row used during login and role checks.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Indian mobile number, exactly 10 digits.
    #[validate(length(min = 10, max = 10, message = "Phone number must be exactly 10 digits"))]
    pub phone: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub address: Option<String>,
}

/// Slim response after registration; mirrors what the client needs to
/// confirm the account, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// The unique subject identifier (email).
    #[validate(email(message = "A valid email address is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_rejects_short_password() {
        let dto = RegisterRequest {
            email: "a@b.com".to_string(),
            phone: "9876543210".to_string(),
            password: "short".to_string(),
            name: "Akash".to_string(),
            address: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_request_rejects_bad_phone_length() {
        let dto = RegisterRequest {
            email: "a@b.com".to_string(),
            phone: "12345".to_string(),
            password: "longenough".to_string(),
            name: "Akash".to_string(),
            address: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_request_accepts_valid_input() {
        let dto = RegisterRequest {
            email: "a@b.com".to_string(),
            phone: "9876543210".to_string(),
            password: "longenough".to_string(),
            name: "Akash".to_string(),
            address: Some("Karol Bagh, Delhi".to_string()),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn login_request_requires_email_username() {
        let dto = LoginRequest {
            username: "not-an-email".to_string(),
            password: "whatever".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
