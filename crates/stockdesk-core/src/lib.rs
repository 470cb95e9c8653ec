//! # Stockdesk Core
//!
//! Core types and utilities shared across the Stockdesk API:
//!
//! - [`errors`]: application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification

pub mod errors;
pub mod password;

pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password};
