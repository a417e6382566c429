//! `routeguard-core`: route-authorization building blocks.
//!
//! This crate contains **pure** primitives (no storage, no tracing, no IO).

pub mod error;
pub mod route;

pub use error::{ConfigError, ConfigResult};
pub use route::{RouteName, RoutePath};
