//! Role-based filtering of permission-gated routes.

use super::record::RouteRecord;

/// A route without roles is open to everyone; otherwise one role must match.
pub fn has_permission(roles: &[String], route: &RouteRecord) -> bool {
    route.meta.roles.is_empty() || roles.iter().any(|role| route.meta.roles.contains(role))
}

/// Keep the routes (and, recursively, children) the given roles may access.
pub fn filter_dynamic_routes(routes: &[RouteRecord], roles: &[String]) -> Vec<RouteRecord> {
    routes
        .iter()
        .filter(|route| has_permission(roles, route))
        .map(|route| {
            let mut permitted = route.clone();
            if let Some(children) = permitted.children_mut() {
                *children = filter_dynamic_routes(route.children(), roles);
            }
            permitted
        })
        .collect()
}
