//! Client-side navigation: the route table, a history-stack router, and
//! the session-aware guard.
//!
//! Screens fall into three groups: the auth screens, the signed-in app
//! tabs, and ungrouped screens reachable from anywhere. The guard watches
//! the session and redirects whenever status and group disagree.

pub mod guard;
pub mod route;
pub mod router;

pub use guard::{redirect_for, NavigationGuard, SIGNED_IN_ENTRY, SIGNED_OUT_ENTRY};
pub use route::{Route, RouteGroup};
pub use router::Router;
