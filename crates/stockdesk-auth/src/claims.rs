//! Claim set embedded in access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims for access tokens.
///
/// Issued at login and presented back on every protected request. The
/// subject is the user's email; `user_id` is carried alongside so handlers
/// can reference the row without an extra lookup.
///
/// Claims are never mutated after issuance. Validity is purely
/// time-bounded: once `exp` passes, the token stops verifying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User's email address (subject claim).
    pub sub: String,
    /// User's row ID.
    pub user_id: Uuid,
    /// Expiration timestamp (Unix seconds).
    pub exp: usize,
    /// Issued-at timestamp (Unix seconds).
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_serialize_subject_and_expiry() {
        let claims = Claims {
            sub: "a@b.com".to_string(),
            user_id: Uuid::nil(),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"a@b.com""#));
        assert!(serialized.contains(r#""exp":1234567890"#));
    }

    #[test]
    fn claims_deserialize() {
        let user_id = Uuid::new_v4();
        let json = format!(
            r#"{{"sub":"vendor@kansal.example","user_id":"{}","exp":9999999999,"iat":9999999900}}"#,
            user_id
        );
        let claims: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims.sub, "vendor@kansal.example");
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn unknown_fields_are_rejected_only_if_required_missing() {
        // Extra claims are tolerated, a missing subject is not.
        let json = r#"{"user_id":"00000000-0000-0000-0000-000000000000","exp":1,"iat":1}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
