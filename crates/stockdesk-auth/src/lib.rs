//! # Stockdesk Auth
//!
//! Token codec for the Stockdesk API: turning an identity into a signed,
//! expiring bearer token and back again.
//!
//! The scheme is stateless. The server keeps no session record; a token is
//! valid if and only if its signature checks out against the process-wide
//! secret and its embedded expiration has not passed. Verification fails
//! closed: a corrupt or tampered token yields no claims at all, never a
//! partial set.
//!
//! # Example
//!
//! ```ignore
//! use stockdesk_auth::{create_access_token, verify_token};
//! use stockdesk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "trader@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "trader@example.com");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
