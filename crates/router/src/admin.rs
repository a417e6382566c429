//! Stock route table for the admin console.

use routeguard_core::{ConfigResult, RoutePath};

use crate::descriptor::RouteDescriptor;
use crate::table::RouteTable;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_REVIEW_PATH: &str = "/admin/review";

/// Login page, review page (guarded), and a catch-all back to login.
pub fn admin_route_table() -> ConfigResult<RouteTable> {
    let login = RoutePath::parse(ADMIN_LOGIN_PATH)?;
    let review = RoutePath::parse(ADMIN_REVIEW_PATH)?;

    RouteTable::new(
        login.clone(),
        vec![
            RouteDescriptor::public(login.clone(), "AdminLogin"),
            RouteDescriptor::protected(review, "AdminReview"),
            RouteDescriptor::catch_all(login),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_table_passes_validation() {
        assert!(admin_route_table().is_ok());
    }

    #[test]
    fn stock_table_shape() {
        let table = admin_route_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.fallback().as_str(), ADMIN_LOGIN_PATH);
        assert!(!table.by_name("AdminLogin").unwrap().requires_auth);
        assert!(table.by_name("AdminReview").unwrap().requires_auth);
    }
}
