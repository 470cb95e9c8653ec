//! Feature modules, one directory per bounded concern.

pub mod cache;
pub mod products;
pub mod users;
