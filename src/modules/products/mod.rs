//! Product catalog, read-only boundary.
//!
//! The full product/SKU/stock CRUD surface lives with the persistence
//! collaborators; this module exposes just the idempotent listing that the
//! response cache wraps.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
