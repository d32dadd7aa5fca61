//! Explicit router state: the registered route tree plus the snapshot it
//! reloads to.

use super::flatten::flatten_routes;
use super::normalize::{normalize_routes, NormalizedRoute};
use super::permission::filter_dynamic_routes;
use super::record::RouteRecord;
use super::reset::{reset_router, ResetOutcome};
use super::settings::RouteSettings;
use crate::adapters::ReloadSignal;
use crate::error::RouterError;
use crate::traits::RouteRegistry;

/// The set of registered routes.
///
/// Replaces a process-wide router singleton: callers own the state and pass
/// it to whatever needs to navigate or reset.
#[derive(Debug, Clone)]
pub struct RouterState {
    initial: Vec<RouteRecord>,
    routes: Vec<RouteRecord>,
    flatten: bool,
}

impl RouterState {
    /// Register `routes` as they are.
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self {
            initial: routes.clone(),
            routes,
            flatten: false,
        }
    }

    /// Register `routes`, flattened when the settings ask for it. Routes added
    /// later are flattened the same way.
    pub fn from_settings(routes: &[RouteRecord], settings: &RouteSettings) -> Self {
        let flatten = settings.third_level_route_cache;
        let mut state = Self::new(flatten_routes(routes, flatten));
        state.flatten = flatten;
        state
    }

    /// The registered tree.
    pub fn records(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Register a route tree at the top level.
    ///
    /// Every route in it that declares roles must be named, and the name must
    /// not already be registered.
    pub fn add_route(&mut self, route: RouteRecord) -> Result<(), RouterError> {
        self.validate(std::slice::from_ref(&route))?;
        self.insert(route);
        Ok(())
    }

    /// Filter `routes` by `roles` and register what remains. Returns the
    /// names of the top-level routes added.
    ///
    /// Either every permitted route is added or none is.
    pub fn add_permitted_routes(
        &mut self,
        routes: &[RouteRecord],
        roles: &[String],
    ) -> Result<Vec<String>, RouterError> {
        let permitted = filter_dynamic_routes(routes, roles);
        self.validate(&permitted)?;

        let mut added = Vec::new();
        for route in permitted {
            added.extend(route.name().map(str::to_string));
            self.insert(route);
        }
        Ok(added)
    }

    /// Check naming rules for a batch against the registered routes and
    /// against each other.
    fn validate(&self, routes: &[RouteRecord]) -> Result<(), RouterError> {
        let mut incoming: Vec<&str> = Vec::new();
        let mut violation: Option<RouterError> = None;
        for route in routes {
            route.walk(&mut |r| {
                if violation.is_some() || !r.is_dynamic() {
                    return;
                }
                match r.name() {
                    None => {
                        violation = Some(RouterError::UnnamedDynamicRoute {
                            path: r.path.clone(),
                        })
                    }
                    Some(name) if incoming.contains(&name) || self.has_route(name) => {
                        violation = Some(RouterError::DuplicateName(name.to_string()))
                    }
                    Some(name) => incoming.push(name),
                }
            });
        }
        match violation {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn insert(&mut self, route: RouteRecord) {
        let route = if self.flatten {
            flatten_routes(std::slice::from_ref(&route), true)
                .into_iter()
                .next()
                .unwrap_or(route)
        } else {
            route
        };
        tracing::debug!(path = %route.path, name = ?route.name(), "Route added");
        self.routes.push(route);
    }

    /// Look up a route by its absolute path.
    pub fn find_by_path(&self, path: &str) -> Option<NormalizedRoute> {
        normalize_routes(&self.routes)
            .into_iter()
            .find(|r| r.path == path)
    }

    /// Remove every named, role-gated route. Falls back to [`reload`](Self::reload)
    /// if any removal fails.
    pub fn reset_dynamic_routes(&mut self) -> ResetOutcome {
        self.reset_dynamic_routes_with(|state, name| state.remove_route(name))
    }

    /// Like [`reset_dynamic_routes`](Self::reset_dynamic_routes), removing
    /// each route through `remove`.
    ///
    /// Hosts that mirror the table elsewhere pass a hook that removes from
    /// both. When it fails, routes removed before the failure are restored
    /// along with everything else by the reload.
    pub fn reset_dynamic_routes_with<F>(&mut self, remove: F) -> ResetOutcome
    where
        F: FnMut(&mut RouterState, &str) -> Result<(), RouterError>,
    {
        let signal = ReloadSignal::new();
        let outcome = reset_router(
            &mut HookedRegistry {
                state: &mut *self,
                remove,
            },
            &signal,
        );
        if signal.take() {
            self.reload();
        }
        outcome
    }

    /// Drop everything registered since construction.
    pub fn reload(&mut self) {
        tracing::info!("Reloading route table");
        self.routes = self.initial.clone();
    }
}

/// Registry view of a [`RouterState`] whose removals go through a hook.
struct HookedRegistry<'a, F> {
    state: &'a mut RouterState,
    remove: F,
}

impl<F> RouteRegistry for HookedRegistry<'_, F>
where
    F: FnMut(&mut RouterState, &str) -> Result<(), RouterError>,
{
    fn routes(&self) -> Vec<NormalizedRoute> {
        self.state.routes()
    }

    fn has_route(&self, name: &str) -> bool {
        self.state.has_route(name)
    }

    fn remove_route(&mut self, name: &str) -> Result<(), RouterError> {
        (self.remove)(&mut *self.state, name)
    }
}

fn contains_name(routes: &[RouteRecord], name: &str) -> bool {
    routes
        .iter()
        .any(|r| r.name() == Some(name) || contains_name(r.children(), name))
}

fn remove_named(routes: &mut Vec<RouteRecord>, name: &str) -> bool {
    if let Some(index) = routes.iter().position(|r| r.name() == Some(name)) {
        routes.remove(index);
        return true;
    }
    routes
        .iter_mut()
        .filter_map(RouteRecord::children_mut)
        .any(|children| remove_named(children, name))
}

impl RouteRegistry for RouterState {
    fn routes(&self) -> Vec<NormalizedRoute> {
        normalize_routes(&self.routes)
    }

    fn has_route(&self, name: &str) -> bool {
        contains_name(&self.routes, name)
    }

    fn remove_route(&mut self, name: &str) -> Result<(), RouterError> {
        if remove_named(&mut self.routes, name) {
            tracing::debug!(name, "Route removed");
            Ok(())
        } else {
            Err(RouterError::RouteNotFound(name.to_string()))
        }
    }
}
