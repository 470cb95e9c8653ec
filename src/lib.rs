//! # Stockdesk API
//!
//! Inventory and vendor management backend built with Axum and PostgreSQL,
//! with JWT bearer authentication and a Redis-backed response cache.
//!
//! ## Architecture
//!
//! Core concerns live in workspace crates; this crate wires them into an
//! HTTP surface:
//!
//! ```text
//! crates/
//! ├── stockdesk-core     # error type, password hashing
//! ├── stockdesk-config   # JWT, CORS, rate limit configuration
//! ├── stockdesk-db       # Postgres pool bootstrap
//! ├── stockdesk-auth     # token claims, issue/verify
//! └── stockdesk-cache    # Redis cache, key scheme, response cache
//! src/
//! ├── middleware/        # AuthUser / AdminUser extractors
//! ├── modules/           # users, products, cache admin
//! ├── docs.rs            # OpenAPI document
//! ├── router.rs          # route table, CORS, rate limits
//! └── state.rs           # shared application state
//! ```
//!
//! Each feature module follows the same structure: `model.rs` for DTOs and
//! rows, `service.rs` for business logic, `controller.rs` for handlers, and
//! `router.rs` for wiring.
//!
//! ## Authentication
//!
//! Login issues a short-lived HS256 access token whose subject is the
//! user's email. Protected routes take an [`middleware::auth::AuthUser`]
//! extractor; admin routes take [`middleware::role::AdminUser`], which also
//! checks the stored role. Every authentication failure, whatever its
//! internal reason, returns the same 401 body.
//!
//! ## Caching
//!
//! Idempotent reads are wrapped in a read-through Redis cache keyed on a
//! fingerprint of handler name and request path. Cache failures degrade to
//! cache misses; the cache admin endpoints under `/cache` let operators
//! inspect and invalidate entries.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use stockdesk_auth;
pub use stockdesk_cache;
pub use stockdesk_config;
pub use stockdesk_core;
pub use stockdesk_db;
