//! Flat view of a route tree with absolute paths.

use serde::Serialize;

use super::meta::RouteMeta;
use super::record::{join_path, RouteRecord};

/// One route from a tree, resolved to its absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRoute {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "RouteMeta::is_empty")]
    pub meta: RouteMeta,
    /// 1 for top-level routes
    pub depth: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

/// Every route in `routes`, depth-first with parents before children.
pub fn normalize_routes(routes: &[RouteRecord]) -> Vec<NormalizedRoute> {
    let mut out = Vec::new();
    for route in routes {
        push_normalized(route, "/", 1, &mut out);
    }
    out
}

fn push_normalized(route: &RouteRecord, parent: &str, depth: usize, out: &mut Vec<NormalizedRoute>) {
    let path = join_path(parent, &route.path);
    out.push(NormalizedRoute {
        path: path.clone(),
        name: route.name().map(str::to_string),
        redirect: route.redirect.clone(),
        meta: route.meta.clone(),
        depth,
        external: route.is_external(),
    });
    for child in route.children() {
        push_normalized(child, &path, depth + 1, out);
    }
}
