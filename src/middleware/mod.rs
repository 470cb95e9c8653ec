//! Request authentication and authorization.
//!
//! Two extractors gate every protected route:
//!
//! - [`auth::AuthUser`]: "is any valid user", bearer token extraction and
//!   signature/expiry verification, no database traffic
//! - [`role::AdminUser`]: "is an admin user", `AuthUser` plus one
//!   credential-store lookup to check the stored role
//!
//! Both fail with the same external 401 body whatever went wrong; the real
//! reason only reaches the logs.

pub mod auth;
pub mod role;
