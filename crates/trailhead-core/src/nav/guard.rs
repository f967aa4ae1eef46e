use tracing::debug;

use crate::auth::session::{SessionStatus, SessionWatcher};

use super::route::{Route, RouteGroup};
use super::router::Router;

/// Entry screen for a signed-in session
pub const SIGNED_IN_ENTRY: Route = Route::Home;

/// Entry screen for a signed-out session
pub const SIGNED_OUT_ENTRY: Route = Route::Landing;

/// The redirect (if any) for a session status on a screen group.
///
/// While the session is loading there is no decision yet. A signed-in
/// session does not belong on the auth screens and a signed-out session
/// does not belong in the app tabs; ungrouped screens are never redirected.
pub fn redirect_for(status: SessionStatus, group: RouteGroup) -> Option<Route> {
    match (status, group) {
        (SessionStatus::Loading, _) => None,
        (SessionStatus::SignedIn, RouteGroup::Auth) => Some(SIGNED_IN_ENTRY),
        (SessionStatus::SignedOut, RouteGroup::App) => Some(SIGNED_OUT_ENTRY),
        _ => None,
    }
}

/// Watches the session and keeps a router inside the screens its status
/// allows.
pub struct NavigationGuard {
    watcher: SessionWatcher,
}

impl NavigationGuard {
    pub fn new(watcher: SessionWatcher) -> Self {
        Self { watcher }
    }

    /// Apply the redirect rule to `router` and return the target if a
    /// redirect happened.
    ///
    /// A redirect lands in a group consistent with the status, so calling
    /// this again immediately afterwards does nothing: at most one
    /// redirect per state change.
    pub fn enforce(&mut self, router: &mut Router) -> Option<Route> {
        let status = self.watcher.borrow_and_update().status();
        let target = redirect_for(status, router.group())?;
        debug!(%status, from = %router.current(), to = %target, "Guard redirect");
        router.replace(target);
        Some(target)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::session::{SessionManager, UserRecord};
    use crate::storage::MemoryStore;

    fn signed_out_manager() -> SessionManager {
        SessionManager::new(Arc::new(MemoryStore::new()))
    }

    async fn signed_in_manager() -> SessionManager {
        let manager = signed_out_manager();
        manager.restore().await;
        manager
            .sign_in("dev-token", UserRecord::new("hiker@example.com"))
            .await
            .unwrap();
        manager
    }

    #[test]
    fn test_loading_never_redirects() {
        for group in [RouteGroup::Auth, RouteGroup::App, RouteGroup::Ungrouped] {
            assert_eq!(redirect_for(SessionStatus::Loading, group), None);
        }
    }

    #[test]
    fn test_signed_in_is_redirected_out_of_the_auth_group() {
        assert_eq!(
            redirect_for(SessionStatus::SignedIn, RouteGroup::Auth),
            Some(Route::Home)
        );
        assert_eq!(redirect_for(SessionStatus::SignedIn, RouteGroup::App), None);
        assert_eq!(
            redirect_for(SessionStatus::SignedIn, RouteGroup::Ungrouped),
            None
        );
    }

    #[test]
    fn test_signed_out_is_redirected_out_of_the_app_group() {
        assert_eq!(
            redirect_for(SessionStatus::SignedOut, RouteGroup::App),
            Some(Route::Landing)
        );
        assert_eq!(
            redirect_for(SessionStatus::SignedOut, RouteGroup::Auth),
            None
        );
        assert_eq!(
            redirect_for(SessionStatus::SignedOut, RouteGroup::Ungrouped),
            None
        );
    }

    #[tokio::test]
    async fn test_enforce_redirects_signed_out_sessions_to_landing_once() {
        let manager = signed_out_manager();
        manager.restore().await;
        let mut guard = NavigationGuard::new(manager.subscribe());
        let mut router = Router::new(Route::Home);

        assert_eq!(guard.enforce(&mut router), Some(Route::Landing));
        assert_eq!(router.current(), Route::Landing);

        // The redirect already landed in an allowed group
        assert_eq!(guard.enforce(&mut router), None);
        assert_eq!(router.current(), Route::Landing);
    }

    #[tokio::test]
    async fn test_enforce_redirects_signed_in_sessions_to_home_once() {
        let manager = signed_in_manager().await;
        let mut guard = NavigationGuard::new(manager.subscribe());
        let mut router = Router::new(Route::Login);

        assert_eq!(guard.enforce(&mut router), Some(Route::Home));
        assert_eq!(router.current(), Route::Home);
        assert_eq!(guard.enforce(&mut router), None);
    }

    #[tokio::test]
    async fn test_enforce_does_nothing_while_loading() {
        let manager = signed_out_manager();
        let mut guard = NavigationGuard::new(manager.subscribe());
        let mut router = Router::new(Route::Home);

        assert_eq!(guard.enforce(&mut router), None);
        assert_eq!(router.current(), Route::Home);

        // Once the restore settles the same guard kicks in
        manager.restore().await;
        assert_eq!(guard.enforce(&mut router), Some(Route::Landing));
    }

    #[tokio::test]
    async fn test_enforce_leaves_ungrouped_screens_alone() {
        let manager = signed_out_manager();
        manager.restore().await;
        let mut guard = NavigationGuard::new(manager.subscribe());
        let mut router = Router::new(Route::Tasks);

        assert_eq!(guard.enforce(&mut router), None);
        assert_eq!(router.current(), Route::Tasks);
    }

    #[tokio::test]
    async fn test_enforce_follows_a_sign_out() {
        let manager = signed_in_manager().await;
        let mut guard = NavigationGuard::new(manager.subscribe());
        let mut router = Router::new(Route::Login);

        guard.enforce(&mut router);
        router.replace(Route::Profile);

        manager.sign_out().await.unwrap();
        assert_eq!(guard.enforce(&mut router), Some(Route::Landing));
        assert_eq!(router.current(), Route::Landing);
    }

    #[tokio::test]
    async fn test_enforce_redirects_via_replace_not_push() {
        let manager = signed_out_manager();
        manager.restore().await;
        let mut guard = NavigationGuard::new(manager.subscribe());

        let mut router = Router::new(Route::Landing);
        router.push(Route::Tasks);
        router.push(Route::Home);
        let depth_before = router.depth();

        guard.enforce(&mut router);
        assert_eq!(router.current(), Route::Landing);
        assert_eq!(router.depth(), depth_before);
    }
}
