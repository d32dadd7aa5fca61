//! Dynamic route reset.
//!
//! Removes every named, role-gated route so a new session can install its own
//! set. If any removal fails the registry is considered inconsistent and a
//! full reload is requested instead.

use crate::error::RouterError;
use crate::traits::{PageReloader, RouteRegistry};

/// Result of [`reset_router`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Targeted removal succeeded; holds the names removed, in table order.
    Removed(Vec<String>),
    /// A removal failed and a full reload was requested.
    Reloaded { error: RouterError },
}

impl ResetOutcome {
    pub fn is_reloaded(&self) -> bool {
        matches!(self, ResetOutcome::Reloaded { .. })
    }
}

/// Remove all dynamic routes from `registry`, falling back to `reloader`.
///
/// Routes without a name or without roles are never touched. The reload is
/// requested at most once, and no further removals are attempted after it.
pub fn reset_router<R>(registry: &mut R, reloader: &dyn PageReloader) -> ResetOutcome
where
    R: RouteRegistry + ?Sized,
{
    let mut removed = Vec::new();
    for route in registry.routes() {
        let Some(name) = route.name.filter(|n| !n.is_empty()) else {
            continue;
        };
        if route.meta.roles.is_empty() || !registry.has_route(&name) {
            continue;
        }
        if let Err(error) = registry.remove_route(&name) {
            tracing::warn!(%name, %error, "Route removal failed, reloading");
            reloader.reload();
            return ResetOutcome::Reloaded { error };
        }
        removed.push(name);
    }
    tracing::debug!(count = removed.len(), "Dynamic routes removed");
    ResetOutcome::Removed(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CountingReloader;
    use crate::router::{NormalizedRoute, RouteMeta};

    /// Registry whose removals fail for one configured name.
    struct FlakyRegistry {
        routes: Vec<NormalizedRoute>,
        fail_on: Option<&'static str>,
        attempts: Vec<String>,
    }

    impl FlakyRegistry {
        fn new(routes: Vec<NormalizedRoute>) -> Self {
            Self {
                routes,
                fail_on: None,
                attempts: Vec::new(),
            }
        }
    }

    impl RouteRegistry for FlakyRegistry {
        fn routes(&self) -> Vec<NormalizedRoute> {
            self.routes.clone()
        }

        fn has_route(&self, name: &str) -> bool {
            self.routes.iter().any(|r| r.name.as_deref() == Some(name))
        }

        fn remove_route(&mut self, name: &str) -> Result<(), RouterError> {
            self.attempts.push(name.to_string());
            if self.fail_on == Some(name) {
                return Err(RouterError::RouteNotFound(name.to_string()));
            }
            // Children go with their parent.
            let Some(path) = self
                .routes
                .iter()
                .find(|r| r.name.as_deref() == Some(name))
                .map(|r| r.path.clone())
            else {
                return Err(RouterError::RouteNotFound(name.to_string()));
            };
            self.routes.retain(|r| !r.path.starts_with(&path));
            Ok(())
        }
    }

    fn route(path: &str, name: Option<&str>, roles: &[&str]) -> NormalizedRoute {
        NormalizedRoute {
            path: path.to_string(),
            name: name.map(str::to_string),
            redirect: None,
            meta: RouteMeta::new().roles(roles.iter().copied()),
            depth: 1,
            external: false,
        }
    }

    #[test]
    fn test_removes_only_named_roled_routes() {
        let mut registry = FlakyRegistry::new(vec![
            route("/dashboard", Some("Dashboard"), &[]),
            route("/permission", Some("Permission"), &["admin"]),
            route("/anon", None, &["admin"]),
            route("/blank", Some(""), &["admin"]),
            route("/editor", Some("Editor"), &["editor"]),
        ]);
        let reloader = CountingReloader::new();

        let outcome = reset_router(&mut registry, &reloader);

        assert_eq!(
            outcome,
            ResetOutcome::Removed(vec!["Permission".to_string(), "Editor".to_string()])
        );
        assert_eq!(reloader.reload_count(), 0);
        assert!(registry.has_route("Dashboard"));
    }

    #[test]
    fn test_no_dynamic_routes_is_noop() {
        let mut registry = FlakyRegistry::new(vec![route("/", Some("Root"), &[])]);
        let reloader = CountingReloader::new();

        assert_eq!(
            reset_router(&mut registry, &reloader),
            ResetOutcome::Removed(Vec::new())
        );
        assert!(registry.attempts.is_empty());
    }

    #[test]
    fn test_skips_routes_removed_with_parent() {
        let mut registry = FlakyRegistry::new(vec![
            route("/a", Some("A"), &["admin"]),
            route("/a/b", Some("B"), &["admin"]),
        ]);
        let reloader = CountingReloader::new();

        let outcome = reset_router(&mut registry, &reloader);

        assert_eq!(outcome, ResetOutcome::Removed(vec!["A".to_string()]));
        assert_eq!(registry.attempts, vec!["A".to_string()]);
        assert_eq!(reloader.reload_count(), 0);
    }

    #[test]
    fn test_failure_reloads_exactly_once() {
        let mut registry = FlakyRegistry::new(vec![
            route("/one", Some("One"), &["admin"]),
            route("/two", Some("Two"), &["admin"]),
            route("/three", Some("Three"), &["admin"]),
        ]);
        registry.fail_on = Some("Two");
        let reloader = CountingReloader::new();

        let outcome = reset_router(&mut registry, &reloader);

        assert!(outcome.is_reloaded());
        assert_eq!(
            outcome,
            ResetOutcome::Reloaded {
                error: RouterError::RouteNotFound("Two".to_string())
            }
        );
        assert_eq!(reloader.reload_count(), 1);
        assert_eq!(registry.attempts, vec!["One".to_string(), "Two".to_string()]);
    }
}
