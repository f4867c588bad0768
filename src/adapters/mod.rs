//! Adapters - connect the domain to the outside world.
//!
//! - `http` - axum routes, DTOs, HTML rendering and middleware

pub mod http;
