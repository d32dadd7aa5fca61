//! Route-related settings.

use serde::{Deserialize, Serialize};

/// Role assigned when dynamic permissions are off.
pub const DEFAULT_ROLE: &str = "DEFAULT_ROLE";

/// Settings deciding how the route table is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteSettings {
    /// Derive roles from the `admin/info` response. When off, every session
    /// gets `default_roles`.
    pub dynamic: bool,
    /// Roles used when `dynamic` is off
    pub default_roles: Vec<String>,
    /// Flatten routes nested deeper than two levels so their pages can be
    /// cached
    pub third_level_route_cache: bool,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            dynamic: false,
            default_roles: vec![DEFAULT_ROLE.to_string()],
            third_level_route_cache: false,
        }
    }
}

impl RouteSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn with_default_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_third_level_route_cache(mut self, enabled: bool) -> Self {
        self.third_level_route_cache = enabled;
        self
    }

    /// Roles in effect for a session whose server-reported roles are `reported`.
    pub fn effective_roles(&self, reported: &[String]) -> Vec<String> {
        if self.dynamic {
            reported.to_vec()
        } else {
            self.default_roles.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RouteSettings::default();
        assert!(!settings.dynamic);
        assert!(!settings.third_level_route_cache);
        assert_eq!(settings.default_roles, vec![DEFAULT_ROLE.to_string()]);
    }

    #[test]
    fn test_effective_roles() {
        let reported = vec!["admin".to_string()];
        assert_eq!(
            RouteSettings::new().effective_roles(&reported),
            vec![DEFAULT_ROLE.to_string()]
        );
        assert_eq!(
            RouteSettings::new().with_dynamic(true).effective_roles(&reported),
            reported
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: RouteSettings =
            serde_json::from_str(r#"{"thirdLevelRouteCache": true}"#).unwrap();
        assert!(settings.third_level_route_cache);
        assert_eq!(settings.default_roles, vec![DEFAULT_ROLE.to_string()]);
    }
}
