//! Dashboard routing.
//!
//! The route table is plain data ([`RouteRecord`] trees). On top of it:
//!
//! | Piece | Purpose |
//! |-------|---------|
//! | [`constant_routes`] | Static table registered for every session |
//! | [`flatten_routes`] | Collapse single-child chains to at most two levels |
//! | [`filter_dynamic_routes`] | Keep the routes a role set may access |
//! | [`RouterState`] | Registered routes, with add/remove by name |
//! | [`reset_router`] | Drop dynamic routes, or reload if that fails |

mod flatten;
mod meta;
mod normalize;
mod permission;
mod record;
mod reset;
mod settings;
mod state;
mod table;

pub use flatten::flatten_routes;
pub use meta::RouteMeta;
pub use normalize::{normalize_routes, NormalizedRoute};
pub use permission::{filter_dynamic_routes, has_permission};
pub use record::{is_external, join_path, RouteNode, RouteRecord, ViewId, ViewRef};
pub use reset::{reset_router, ResetOutcome};
pub use settings::{RouteSettings, DEFAULT_ROLE};
pub use state::RouterState;
pub use table::{constant_routes, dynamic_routes};
