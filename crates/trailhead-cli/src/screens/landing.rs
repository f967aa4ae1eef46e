//! Landing screen for signed-out visitors.

use anyhow::Result;
use trailhead_core::Route;

use crate::app::App;
use crate::screens;

pub fn view(_app: &App) {
    println!("Welcome to trailhead. Your trail starts here.");
    println!("Commands: login, register");
}

pub fn handle(app: &mut App, command: &str) -> Result<()> {
    match command {
        "login" => {
            app.navigate(Route::Login);
            Ok(())
        }
        "register" => {
            app.navigate(Route::Register);
            Ok(())
        }
        _ => screens::unknown(command),
    }
}
