//! Route flattening: collapse nested single-child chains so no page sits
//! deeper than the second level.
//!
//! Pages nested three levels deep are not cached by the tab/keep-alive system,
//! so when [`RouteSettings::third_level_route_cache`](super::RouteSettings) is
//! on the table is rewritten before registration:
//!
//! - Only top-level routes with at least one grandchild are touched. Hidden
//!   and external-link routes are never candidates and are copied through.
//! - Each second-level child gets its absolute path. While it has exactly one
//!   child, and that child is neither hidden nor an external link, the child
//!   replaces it, taking the merged path and inheriting its metadata.
//! - A child with several children keeps them; only its own path changes.
//! - Redirects naming a path that was folded away are pointed at the route
//!   that replaced it.

use super::record::{join_path, RouteRecord};

/// Flatten `routes` when `enabled`, otherwise return them unchanged.
pub fn flatten_routes(routes: &[RouteRecord], enabled: bool) -> Vec<RouteRecord> {
    if !enabled {
        return routes.to_vec();
    }

    let mut folded: Vec<(String, String)> = Vec::new();
    let mut flattened: Vec<RouteRecord> = routes
        .iter()
        .map(|route| {
            if is_candidate(route) && is_multi_level(route) {
                promote_route_level(route, &mut folded)
            } else {
                route.clone()
            }
        })
        .collect();

    if !folded.is_empty() {
        for route in &mut flattened {
            rewrite_redirects(route, &folded);
        }
    }

    tracing::debug!(
        routes = flattened.len(),
        folded = folded.len(),
        "Flattened multi-level routes"
    );
    flattened
}

fn is_candidate(route: &RouteRecord) -> bool {
    !route.is_hidden() && !route.is_external()
}

/// A route is multi-level when one of its children has children of its own.
fn is_multi_level(route: &RouteRecord) -> bool {
    route.children().iter().any(RouteRecord::has_children)
}

fn promote_route_level(route: &RouteRecord, folded: &mut Vec<(String, String)>) -> RouteRecord {
    let mut promoted = route.clone();
    if let Some(children) = promoted.children_mut() {
        *children = route
            .children()
            .iter()
            .map(|child| collapse_chain(&route.path, child, folded))
            .collect();
    }
    promoted
}

fn collapse_chain(
    parent_path: &str,
    child: &RouteRecord,
    folded: &mut Vec<(String, String)>,
) -> RouteRecord {
    if !is_candidate(child) {
        return child.clone();
    }

    let mut current = child.clone();
    current.path = join_path(parent_path, &child.path);

    while let Some(only) = sole_collapsible_child(&current) {
        let merged_path = join_path(&current.path, &only.path);
        let mut next = only.clone();
        next.meta = only.meta.merged_onto(&current.meta);
        if next.name().is_none() {
            next.name = current.name.take();
        }
        folded.push((
            normalize(&current.path).to_string(),
            normalize(&merged_path).to_string(),
        ));
        next.path = merged_path;
        current = next;
    }

    current
}

fn sole_collapsible_child(route: &RouteRecord) -> Option<&RouteRecord> {
    match route.children() {
        [only] if is_candidate(only) => Some(only),
        _ => None,
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Follow fold records until `target` names a path that still exists.
fn resolve_folded<'a>(folded: &'a [(String, String)], target: &'a str) -> Option<&'a str> {
    let mut current = normalize(target);
    let mut moved = false;
    // Each fold moves strictly deeper, so a chain is at most `folded.len()` long.
    for _ in 0..folded.len() {
        match folded.iter().find(|(from, _)| from == current) {
            Some((_, to)) => {
                current = to.as_str();
                moved = true;
            }
            None => break,
        }
    }
    moved.then_some(current)
}

fn rewrite_redirects(route: &mut RouteRecord, folded: &[(String, String)]) {
    if let Some(redirect) = &route.redirect {
        if let Some(target) = resolve_folded(folded, redirect) {
            route.redirect = Some(target.to_string());
        }
    }
    if let Some(children) = route.children_mut() {
        for child in children {
            rewrite_redirects(child, folded);
        }
    }
}
