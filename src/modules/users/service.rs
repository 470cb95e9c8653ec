//! Business logic for user accounts.

use sqlx::PgPool;
use tracing::instrument;

use stockdesk_auth::create_access_token;
use stockdesk_config::JwtConfig;
use stockdesk_core::{AppError, hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserCredentials};

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequest,
    ) -> Result<RegisterResponse, AppError> {
        if !dto.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "Phone number must be exactly 10 digits"
            )));
        }

        let existing: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await
                .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, RegisterResponse>(
            "INSERT INTO users (name, email, phone, address, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, email, name",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.address)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Verifies the submitted secret against the stored hash and issues an
    /// access token. Unknown subject and wrong password are reported
    /// identically.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(AppError::invalid_credentials)?;

        if !verify_password(&dto.password, &credentials.password_hash)? {
            return Err(AppError::invalid_credentials());
        }

        let access_token = create_access_token(credentials.id, &credentials.email, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Credential-store lookup behind the admin gate: the stored role for a
    /// subject, or `None` when no such user exists.
    #[instrument(skip(db))]
    pub async fn find_role_by_email(db: &PgPool, email: &str) -> Result<Option<String>, AppError> {
        let role: Option<String> =
            sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(db)
                .await
                .map_err(AppError::database)?;

        Ok(role)
    }

    #[instrument(skip(db))]
    pub async fn db_health(db: &PgPool) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }
}
