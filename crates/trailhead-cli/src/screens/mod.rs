//! Screen modules for the interactive shell.
//!
//! Each screen mirrors one route: a short text view plus the commands
//! available there. Dispatch is by the router's current route; global
//! commands (go/back/help/quit) are handled in the app loop before a
//! screen sees anything.

pub mod explore;
pub mod home;
pub mod insights;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod tasks;

use std::io::{self, Write};

use anyhow::Result;
use trailhead_core::Route;

use crate::app::App;

/// Render the current screen.
pub fn view(app: &App) {
    let route = app.router.current();
    println!("\n=== {} ===", route.title());
    match route {
        Route::Landing => landing::view(app),
        Route::Login => login::view(app),
        Route::Register => register::view(app),
        Route::Home => home::view(app),
        Route::Explore => explore::view(app),
        Route::Profile => profile::view(app),
        Route::Tasks => tasks::view(app),
        Route::Insights => insights::view(app),
    }
}

/// Handle a screen-level command.
pub async fn handle(app: &mut App, command: &str) -> Result<()> {
    match app.router.current() {
        Route::Landing => landing::handle(app, command),
        Route::Login => login::handle(app, command).await,
        Route::Register => register::handle(app, command).await,
        Route::Profile => profile::handle(app, command).await,
        _ => unknown(command),
    }
}

/// Print global commands plus whatever the current screen offers.
pub fn help(app: &App) {
    println!("Global commands:");
    println!("  go <screen>   navigate (landing, login, register, home, explore, profile, tasks, insights)");
    println!("  back          previous screen");
    println!("  help          this message");
    println!("  quit          exit");
    match app.router.current() {
        Route::Landing => println!("This screen: login, register"),
        Route::Login => println!("This screen: sign-in"),
        Route::Register => println!("This screen: sign-up"),
        Route::Profile => println!("This screen: sign-out"),
        _ => {}
    }
}

/// Fallback for commands no screen claims.
pub(crate) fn unknown(command: &str) -> Result<()> {
    println!("Unknown command: {:?}. Type 'help' for commands.", command);
    Ok(())
}

/// Print `label`, flush, and read one trimmed line. None means stdin
/// closed.
pub(crate) fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
