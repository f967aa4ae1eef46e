//! Profile screen with the sign-out flow.

use anyhow::Result;
use tracing::error;

use crate::app::App;
use crate::screens;

pub fn view(app: &App) {
    match app.session.user() {
        Some(user) => {
            println!("Signed in as {}.", user.email);
            if let Some(ref name) = user.display_name {
                println!("Display name: {}", name);
            }
        }
        None => println!("Not signed in."),
    }
    println!("Commands: sign-out");
}

pub async fn handle(app: &mut App, command: &str) -> Result<()> {
    match command {
        "sign-out" | "signout" | "logout" => sign_out(app).await,
        _ => screens::unknown(command),
    }
}

/// Confirm, then end the session.
async fn sign_out(app: &mut App) -> Result<()> {
    let Some(answer) = screens::prompt("Sign out? [y/N]: ")? else {
        return Ok(());
    };
    if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
        println!("Cancelled.");
        return Ok(());
    }

    match app.session.sign_out().await {
        Ok(()) => println!("Signed out."),
        Err(e) => {
            error!(error = %e, "Sign-out failed");
            println!("Sign-out failed: {}", e);
        }
    }
    Ok(())
}
