//! User accounts: registration, login, token validation.
//!
//! This module is the credential store behind the authenticator: it owns
//! the `users` rows (email, bcrypt secret hash, role) and the login flow
//! that issues bearer tokens.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
