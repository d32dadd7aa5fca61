//! Route metadata controlling menu, tab and breadcrumb display.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Display and permission metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteMeta {
    /// Menu and breadcrumb title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Name of a bundled SVG icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_icon: Option<String>,
    /// Name of a component-library icon, used when `svg_icon` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub el_icon: Option<String>,
    /// Excluded from the side menu
    #[serde(skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Page state is cached when navigating away
    #[serde(skip_serializing_if = "is_false")]
    pub keep_alive: bool,
    /// Pinned in the tag bar
    #[serde(skip_serializing_if = "is_false")]
    pub affix: bool,
    /// Show the parent menu entry even with a single child
    #[serde(skip_serializing_if = "is_false")]
    pub always_show: bool,
    /// `None` means shown in the breadcrumb
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<bool>,
    /// Menu entry to highlight when this (usually hidden) route is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_menu: Option<String>,
    /// Roles allowed to see the route. Non-empty marks a dynamic route.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Metadata for pages kept out of the menu.
    pub fn hidden_page() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    pub fn svg_icon(mut self, icon: impl Into<String>) -> Self {
        self.svg_icon = Some(icon.into());
        self
    }

    pub fn el_icon(mut self, icon: impl Into<String>) -> Self {
        self.el_icon = Some(icon.into());
        self
    }

    pub fn keep_alive(mut self) -> Self {
        self.keep_alive = true;
        self
    }

    pub fn affix(mut self) -> Self {
        self.affix = true;
        self
    }

    pub fn always_show(mut self) -> Self {
        self.always_show = true;
        self
    }

    pub fn active_menu(mut self, path: impl Into<String>) -> Self {
        self.active_menu = Some(path.into());
        self
    }

    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn shows_in_breadcrumb(&self) -> bool {
        self.breadcrumb.unwrap_or(true)
    }

    /// Combine with the metadata of an ancestor that is being folded away.
    ///
    /// Fields set on `self` win. Flags are OR-ed, except `always_show` which
    /// only describes `self`. Roles are concatenated, ancestor first, without
    /// duplicates.
    pub fn merged_onto(&self, ancestor: &RouteMeta) -> RouteMeta {
        let mut roles = ancestor.roles.clone();
        for role in &self.roles {
            if !roles.contains(role) {
                roles.push(role.clone());
            }
        }

        RouteMeta {
            title: self.title.clone().or_else(|| ancestor.title.clone()),
            svg_icon: self.svg_icon.clone().or_else(|| ancestor.svg_icon.clone()),
            el_icon: self.el_icon.clone().or_else(|| ancestor.el_icon.clone()),
            hidden: self.hidden || ancestor.hidden,
            keep_alive: self.keep_alive || ancestor.keep_alive,
            affix: self.affix || ancestor.affix,
            always_show: self.always_show,
            breadcrumb: self.breadcrumb.or(ancestor.breadcrumb),
            active_menu: self.active_menu.clone().or_else(|| ancestor.active_menu.clone()),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_onto_prefers_own_fields() {
        let ancestor = RouteMeta::titled("权限").svg_icon("lock").roles(["admin", "editor"]);
        let own = RouteMeta::titled("页面级").roles(["admin"]).keep_alive();

        let merged = own.merged_onto(&ancestor);
        assert_eq!(merged.title.as_deref(), Some("页面级"));
        assert_eq!(merged.svg_icon.as_deref(), Some("lock"));
        assert_eq!(merged.roles, vec!["admin".to_string(), "editor".to_string()]);
        assert!(merged.keep_alive);
    }

    #[test]
    fn test_always_show_is_not_inherited() {
        let ancestor = RouteMeta::new().always_show();
        assert!(!RouteMeta::new().merged_onto(&ancestor).always_show);
    }

    #[test]
    fn test_serialization_skips_defaults() {
        let meta = RouteMeta::titled("首页").svg_icon("dashboard").affix();
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            serde_json::json!({"title": "首页", "svgIcon": "dashboard", "affix": true})
        );
        assert!(RouteMeta::new().is_empty());
        assert!(RouteMeta::new().shows_in_breadcrumb());
    }
}
