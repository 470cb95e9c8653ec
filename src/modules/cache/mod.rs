//! Administrative cache endpoints: inspect, seed, invalidate.

pub mod controller;
pub mod model;
pub mod router;
