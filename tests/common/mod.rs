//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{envelope, test_token};
//!
//! ResponseTemplate::new(200).set_body_json(envelope(json!({"token": test_token()})));
//! ```

#![allow(dead_code)]

use lostfound_admin::router::{RouteMeta, RouteRecord, ViewRef};
use serde_json::{json, Value};

/// Token used for authenticated requests in tests.
pub fn test_token() -> String {
    "test-admin-token".to_string()
}

/// Wrap `data` in a successful response envelope.
pub fn envelope(data: Value) -> Value {
    json!({"code": 0, "data": data, "message": "success"})
}

/// A rejected response envelope with the given business code.
pub fn rejected(code: i64, message: &str) -> Value {
    json!({"code": code, "data": null, "message": message})
}

/// A permission-gated page under a layout, as the dashboard would register
/// for one role.
pub fn gated_section(path: &str, name: &str, roles: &[&str]) -> RouteRecord {
    RouteRecord::layout(
        path,
        ViewRef::Layout,
        vec![RouteRecord::leaf("page", ViewRef::view(format!("views{}/page", path)))
            .named(format!("{}Page", name))
            .with_meta(RouteMeta::titled(format!("{} page", name)).roles(roles.iter().copied()))],
    )
    .named(name)
    .redirect_to(format!("{}/page", path))
    .with_meta(RouteMeta::titled(name).roles(roles.iter().copied()))
}

/// A chain `/a -> b -> c -> d` of single-child layouts ending in a leaf.
pub fn deep_chain() -> RouteRecord {
    RouteRecord::layout(
        "/a",
        ViewRef::Layout,
        vec![RouteRecord::layout(
            "b",
            ViewRef::Placeholder,
            vec![RouteRecord::layout(
                "c",
                ViewRef::Placeholder,
                vec![RouteRecord::leaf("d", ViewRef::view("views/a/b/c/d"))
                    .named("D")
                    .with_meta(RouteMeta::titled("D"))],
            )
            .named("C")],
        )
        .named("B")
        .redirect_to("/a/b/c")],
    )
    .named("A")
    .redirect_to("/a/b")
}
