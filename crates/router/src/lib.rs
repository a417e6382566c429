//! `routeguard-router`: route table, guard and navigation dispatcher.
//!
//! Decoupled from rendering and history APIs: callers feed locations in and
//! act on the returned decisions.

pub mod admin;
pub mod config;
pub mod descriptor;
pub mod guard;
pub mod navigator;
pub mod table;

pub use admin::{ADMIN_LOGIN_PATH, ADMIN_REVIEW_PATH, admin_route_table};
pub use config::{GuardSettings, RouteConfig, RouteTableConfig, load_route_config};
pub use descriptor::{PathPattern, RouteDescriptor};
pub use guard::{DecisionExplanation, DecisionReason, NavigationDecision, NavigationIntent, RouteGuard};
pub use navigator::{Navigation, NavigationSuperseded, Navigator, PendingNavigation};
pub use table::RouteTable;
