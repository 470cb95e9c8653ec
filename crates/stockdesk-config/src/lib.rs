//! # Stockdesk Config
//!
//! Configuration types for the Stockdesk API, loaded from environment
//! variables with sensible defaults:
//!
//! - [`jwt`]: token signing secret, algorithm and TTL
//! - [`cors`]: allowed browser origins
//! - [`rate_limit`]: per-IP request budgets

pub mod cors;
pub mod jwt;
pub mod rate_limit;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
