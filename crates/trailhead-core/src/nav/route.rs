use std::fmt;

/// Access grouping that drives the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    /// Screens for signed-out visitors (landing, login, register).
    Auth,
    /// The signed-in tab area (home, explore, profile).
    App,
    /// Screens in neither group; the guard leaves these alone.
    Ungrouped,
}

/// Every navigable screen in the starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Home,
    Explore,
    Profile,
    Tasks,
    Insights,
}

impl Route {
    /// All routes, in display order.
    pub const ALL: [Route; 8] = [
        Route::Landing,
        Route::Login,
        Route::Register,
        Route::Home,
        Route::Explore,
        Route::Profile,
        Route::Tasks,
        Route::Insights,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/home",
            Route::Explore => "/explore",
            Route::Profile => "/profile",
            Route::Tasks => "/tasks",
            Route::Insights => "/insights",
        }
    }

    pub fn group(&self) -> RouteGroup {
        match self {
            Route::Landing | Route::Login | Route::Register => RouteGroup::Auth,
            Route::Home | Route::Explore | Route::Profile => RouteGroup::App,
            Route::Tasks | Route::Insights => RouteGroup::Ungrouped,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Landing",
            Route::Login => "Log In",
            Route::Register => "Register",
            Route::Home => "Home",
            Route::Explore => "Explore",
            Route::Profile => "Profile",
            Route::Tasks => "Tasks",
            Route::Insights => "Insights",
        }
    }

    /// Parse a route from a screen name or path, case-insensitively.
    pub fn parse(input: &str) -> Option<Route> {
        let name = input.trim().trim_start_matches('/').to_ascii_lowercase();
        match name.as_str() {
            "" | "landing" => Some(Route::Landing),
            "login" => Some(Route::Login),
            "register" => Some(Route::Register),
            "home" => Some(Route::Home),
            "explore" => Some(Route::Explore),
            "profile" => Some(Route::Profile),
            "tasks" => Some(Route::Tasks),
            "insights" => Some(Route::Insights),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_match_the_screen_layout() {
        assert_eq!(Route::Landing.group(), RouteGroup::Auth);
        assert_eq!(Route::Login.group(), RouteGroup::Auth);
        assert_eq!(Route::Register.group(), RouteGroup::Auth);
        assert_eq!(Route::Home.group(), RouteGroup::App);
        assert_eq!(Route::Explore.group(), RouteGroup::App);
        assert_eq!(Route::Profile.group(), RouteGroup::App);
        assert_eq!(Route::Tasks.group(), RouteGroup::Ungrouped);
        assert_eq!(Route::Insights.group(), RouteGroup::Ungrouped);
    }

    #[test]
    fn test_parse_accepts_names_and_paths() {
        assert_eq!(Route::parse("home"), Some(Route::Home));
        assert_eq!(Route::parse("/home"), Some(Route::Home));
        assert_eq!(Route::parse("Profile"), Some(Route::Profile));
        assert_eq!(Route::parse("/"), Some(Route::Landing));
        assert_eq!(Route::parse("  insights "), Some(Route::Insights));
        assert_eq!(Route::parse("settings"), None);
    }

    #[test]
    fn test_every_route_parses_from_its_own_path() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }
}
