use tracing::debug;

use super::route::{Route, RouteGroup};

/// Client-side router: the current screen plus a back stack.
///
/// `push` grows the stack, `replace` swaps the current screen without
/// touching it, and `back` pops. The guard only ever uses `replace`, so a
/// redirect never leaves the rejected screen reachable via `back`.
pub struct Router {
    current: Route,
    stack: Vec<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn group(&self) -> RouteGroup {
        self.current.group()
    }

    /// Navigate to `route`, pushing the current screen onto the back stack.
    pub fn push(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "push");
        self.stack.push(self.current);
        self.current = route;
    }

    /// Swap the current screen; the back stack is untouched.
    pub fn replace(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "replace");
        self.current = route;
    }

    /// Pop the previous screen. Returns false when the stack is empty.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(route) => {
                debug!(from = %self.current, to = %route, "back");
                self.current = route;
                true
            }
            None => false,
        }
    }

    /// Number of screens on the back stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_grows_the_stack_and_back_pops() {
        let mut router = Router::new(Route::Landing);
        assert_eq!(router.current(), Route::Landing);
        assert_eq!(router.depth(), 0);

        router.push(Route::Login);
        router.push(Route::Register);
        assert_eq!(router.current(), Route::Register);
        assert_eq!(router.depth(), 2);

        assert!(router.back());
        assert_eq!(router.current(), Route::Login);
        assert!(router.back());
        assert_eq!(router.current(), Route::Landing);
        assert!(!router.back());
        assert_eq!(router.current(), Route::Landing);
    }

    #[test]
    fn test_replace_leaves_the_stack_alone() {
        let mut router = Router::new(Route::Landing);
        router.push(Route::Login);

        router.replace(Route::Home);
        assert_eq!(router.current(), Route::Home);
        assert_eq!(router.depth(), 1);

        // Back skips the replaced screen entirely
        assert!(router.back());
        assert_eq!(router.current(), Route::Landing);
    }

    #[test]
    fn test_group_follows_the_current_route() {
        let mut router = Router::new(Route::Login);
        assert_eq!(router.group(), RouteGroup::Auth);

        router.replace(Route::Home);
        assert_eq!(router.group(), RouteGroup::App);

        router.push(Route::Tasks);
        assert_eq!(router.group(), RouteGroup::Ungrouped);
    }
}
