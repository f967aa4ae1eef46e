//! Shell state and the main command loop.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};
use trailhead_core::{
    Authenticator, NavigationGuard, Route, RouteGroup, Router, SessionManager,
};

use crate::config::Config;
use crate::screens;

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub session: SessionManager,
    pub authenticator: Arc<dyn Authenticator>,
    pub router: Router,
    pub guard: NavigationGuard,

    // Login form state
    pub login_email: String,
    pub login_error: Option<String>,

    // Register form state
    pub register_error: Option<String>,
}

impl App {
    /// Create an application instance over an already-wired session.
    pub fn new(
        config: Config,
        session: SessionManager,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        // Pre-fill the login form from the environment or the remembered
        // email
        let login_email = std::env::var("TRAILHEAD_EMAIL")
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();

        let guard = NavigationGuard::new(session.subscribe());

        Self {
            config,
            session,
            authenticator,
            router: Router::new(Route::Landing),
            guard,
            login_email,
            login_error: None,
            register_error: None,
        }
    }

    /// Run the shell until the user quits or stdin closes.
    pub async fn run(&mut self) -> Result<()> {
        println!("trailhead - sign in, look around, sign out.");
        println!("Type 'help' for commands.\n");

        println!("Restoring session...");
        let status = self.session.restore().await;
        debug!(%status, "Session restored");
        self.enforce_guard();

        let mut rendered = None;
        loop {
            let current = self.router.current();
            if rendered != Some(current) {
                screens::view(self);
                rendered = Some(current);
            }

            let line = match screens::prompt("> ")? {
                Some(line) => line,
                None => break,
            };
            if line.is_empty() {
                continue;
            }

            if self.dispatch(&line).await? {
                break;
            }
            self.enforce_guard();
        }

        info!("Shell exiting");
        Ok(())
    }

    /// Handle one command line. Returns true when the user quit.
    async fn dispatch(&mut self, input: &str) -> Result<bool> {
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "exit" | "q" => return Ok(true),
            "help" | "h" | "?" => screens::help(self),
            "back" | "b" => {
                if !self.router.back() {
                    println!("Nothing to go back to.");
                }
            }
            "go" => {
                if arg.is_empty() {
                    println!("Usage: go <screen>");
                } else {
                    match Route::parse(arg) {
                        Some(route) => self.navigate(route),
                        None => println!("Unknown screen: {:?}. Try 'help'.", arg),
                    }
                }
            }
            _ => screens::handle(self, command).await?,
        }

        Ok(false)
    }

    /// Navigate to `route`. Switching between the app tabs replaces the
    /// current screen; everything else pushes onto the back stack.
    pub fn navigate(&mut self, route: Route) {
        if route == self.router.current() {
            return;
        }

        let tab_switch = self.router.group() == RouteGroup::App && route.group() == RouteGroup::App;
        if tab_switch {
            self.router.replace(route);
        } else {
            self.router.push(route);
        }
    }

    /// Re-run the guard against the current screen and announce any
    /// redirect it applied.
    fn enforce_guard(&mut self) {
        if let Some(target) = self.guard.enforce(&mut self.router) {
            println!("Redirected to {}.", target);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
