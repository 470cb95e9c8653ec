//! Token issuance and verification.
//!
//! Signing and verification are pure CPU work against static configuration;
//! nothing here touches the database or suspends.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use stockdesk_config::JwtConfig;
use stockdesk_core::{AppError, ErrorKind};

use crate::claims::Claims;

/// Creates a signed access token for the given user.
///
/// The expiration is always `now + configured TTL`; callers cannot choose
/// their own lifetime.
///
/// # Errors
///
/// Returns an internal error if encoding fails (e.g. an algorithm/secret
/// mismatch), which indicates broken configuration rather than bad input.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry_seconds();

    let claims = Claims {
        sub: email.to_string(),
        user_id,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(jwt_config.algorithm),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// Fails closed: malformed encoding, signature mismatch and expiry all
/// collapse into the same uniform unauthorized error. The distinction is
/// recorded in the error's internal kind for logging, never in the message.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(jwt_config.algorithm);
    // No clock leeway: a token whose expiry has passed is dead immediately,
    // including tokens issued with TTL zero.
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(ErrorKind::TokenInvalid))?;

    // The library accepts `exp == now`; we require the expiry to be strictly
    // in the future so a zero-TTL token never validates, not even within its
    // issuance second.
    if claims.exp as i64 <= Utc::now().timestamp() {
        return Err(AppError::unauthorized(ErrorKind::TokenInvalid));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 30,
        }
    }

    #[test]
    fn issue_then_verify_returns_original_claims() {
        let config = test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, "a@b.com", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.user_id, user_id);
        assert!(claims.exp > claims.iat);
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let config = test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), "a@b.com", &config).unwrap();

        // Flip a single character anywhere in the token; the signature
        // check must fail.
        for position in [5, token.len() / 2, token.len() - 1] {
            let mut chars: Vec<char> = token.chars().collect();
            chars[position] = if chars[position] == 'A' { 'B' } else { 'A' };
            let mutated: String = chars.into_iter().collect();
            if mutated == token {
                continue;
            }
            assert!(
                verify_token(&mutated, &config).is_err(),
                "mutation at {} validated",
                position
            );
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), "a@b.com", &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "a-completely-different-secret-key-here".to_string(),
            ..test_jwt_config()
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let config = test_jwt_config();
        assert!(verify_token("not-a-token", &config).is_err());
        assert!(verify_token("", &config).is_err());
        assert!(verify_token("a.b.c", &config).is_err());
    }

    #[test]
    fn zero_ttl_token_is_expired_at_birth() {
        let config = JwtConfig {
            access_token_expiry_minutes: 0,
            ..test_jwt_config()
        };
        let token = create_access_token(Uuid::new_v4(), "a@b.com", &config).unwrap();

        // exp == iat, and verification allows no leeway.
        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn negative_ttl_token_is_rejected() {
        let config = JwtConfig {
            access_token_expiry_minutes: -5,
            ..test_jwt_config()
        };
        let token = create_access_token(Uuid::new_v4(), "a@b.com", &config).unwrap();
        assert!(verify_token(&token, &config).is_err());
    }
}
