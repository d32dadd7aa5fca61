//! Route records: the declarative navigation tree.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::meta::RouteMeta;

static EXTERNAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?:|mailto:|tel:)").expect("Invalid external link regex"));

/// Whether a path points outside the application.
pub fn is_external(path: &str) -> bool {
    EXTERNAL_REGEX.is_match(path)
}

/// Resolve a child path against its parent's absolute path.
///
/// Absolute and external child paths are returned as they are; an empty child
/// path resolves to the parent.
pub fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') || is_external(child) {
        return child.to_string();
    }
    if child.is_empty() {
        return parent.to_string();
    }
    format!("{}/{}", parent.trim_end_matches('/'), child)
}

/// Opaque identifier of a view, resolved by whoever renders the routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What a route renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum ViewRef {
    /// The application shell (menu, tag bar) hosting child routes
    Layout,
    /// A lazily loaded page
    View(ViewId),
    /// A grouping entry that renders nothing itself
    Placeholder,
}

impl ViewRef {
    pub fn view(id: impl Into<String>) -> Self {
        ViewRef::View(ViewId::new(id))
    }
}

/// Structural kind of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteNode {
    /// Renders `view` and hosts nested routes
    Layout {
        view: ViewRef,
        children: Vec<RouteRecord>,
    },
    /// A page without nested routes
    Leaf { view: ViewRef },
    /// A menu entry linking outside the application; `path` is the URL
    ExternalLink,
}

/// A path-to-view binding with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "RouteMeta::is_empty")]
    pub meta: RouteMeta,
    #[serde(flatten)]
    pub node: RouteNode,
}

impl RouteRecord {
    fn with_node(path: impl Into<String>, node: RouteNode) -> Self {
        Self {
            path: path.into(),
            name: None,
            redirect: None,
            alias: None,
            meta: RouteMeta::default(),
            node,
        }
    }

    pub fn layout(path: impl Into<String>, view: ViewRef, children: Vec<RouteRecord>) -> Self {
        Self::with_node(path, RouteNode::Layout { view, children })
    }

    pub fn leaf(path: impl Into<String>, view: ViewRef) -> Self {
        Self::with_node(path, RouteNode::Leaf { view })
    }

    pub fn external(url: impl Into<String>) -> Self {
        Self::with_node(url, RouteNode::ExternalLink)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect = Some(path.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    /// The route's name, treating an empty string as absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn view(&self) -> Option<&ViewRef> {
        match &self.node {
            RouteNode::Layout { view, .. } | RouteNode::Leaf { view } => Some(view),
            RouteNode::ExternalLink => None,
        }
    }

    pub fn children(&self) -> &[RouteRecord] {
        match &self.node {
            RouteNode::Layout { children, .. } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<RouteRecord>> {
        match &mut self.node {
            RouteNode::Layout { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn is_external(&self) -> bool {
        matches!(self.node, RouteNode::ExternalLink) || is_external(&self.path)
    }

    pub fn is_hidden(&self) -> bool {
        self.meta.hidden
    }

    /// Permission-gated routes declare at least one role.
    pub fn is_dynamic(&self) -> bool {
        !self.meta.roles.is_empty()
    }

    /// Number of levels in this subtree, counting the route itself.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(RouteRecord::depth).max().unwrap_or(0)
    }

    /// Visit this route and every descendant, parents first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a RouteRecord)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/hub6622/LostAndFound_front_back"));
        assert!(is_external("http://example.com"));
        assert!(is_external("mailto:admin@example.com"));
        assert!(is_external("tel:10086"));
        assert!(!is_external("/dashboard"));
        assert!(!is_external("httpbin"));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "dashboard"), "/dashboard");
        assert_eq!(join_path("/menu", "menu1"), "/menu/menu1");
        assert_eq!(join_path("/menu/", "menu1"), "/menu/menu1");
        assert_eq!(join_path("/user-manage", "/user-manage"), "/user-manage");
        assert_eq!(join_path("/menu", "https://www.iconfont.cn/"), "https://www.iconfont.cn/");
        assert_eq!(join_path("/menu", ""), "/menu");
    }

    #[test]
    fn test_structure_accessors() {
        let route = RouteRecord::layout(
            "/a",
            ViewRef::Layout,
            vec![RouteRecord::layout(
                "b",
                ViewRef::Placeholder,
                vec![RouteRecord::leaf("c", ViewRef::view("views/c"))],
            )],
        );
        assert_eq!(route.depth(), 3);
        assert!(route.has_children());
        assert_eq!(route.view(), Some(&ViewRef::Layout));

        let mut paths = Vec::new();
        route.walk(&mut |r| paths.push(r.path.as_str()));
        assert_eq!(paths, vec!["/a", "b", "c"]);

        let link = RouteRecord::external("https://juejin.cn/");
        assert!(link.is_external());
        assert!(link.view().is_none());
        assert_eq!(link.depth(), 1);
    }

    #[test]
    fn test_empty_name_is_absent() {
        let route = RouteRecord::leaf("/x", ViewRef::Placeholder).named("");
        assert_eq!(route.name(), None);
        assert_eq!(route.clone().named("X").name(), Some("X"));
    }

    #[test]
    fn test_serializes_tagged_node() {
        let route = RouteRecord::leaf("dashboard", ViewRef::view("views/dashboard/index"))
            .named("Dashboard");
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            serde_json::json!({
                "path": "dashboard",
                "name": "Dashboard",
                "kind": "leaf",
                "view": {"type": "view", "id": "views/dashboard/index"}
            })
        );
    }
}
