//! Sign-in screen.

use anyhow::Result;
use tracing::{error, info, warn};

use crate::app::App;
use crate::screens;

pub fn view(app: &App) {
    println!("Welcome back. Sign in to continue.");
    if let Some(ref error) = app.login_error {
        println!("! {}", error);
    }
    println!("Commands: sign-in  (or 'go register', 'back')");
}

pub async fn handle(app: &mut App, command: &str) -> Result<()> {
    match command {
        "sign-in" | "signin" => attempt_sign_in(app).await,
        _ => screens::unknown(command),
    }
}

/// Prompt for credentials and run the sign-in flow against the backend
/// seam.
async fn attempt_sign_in(app: &mut App) -> Result<()> {
    let label = if app.login_email.is_empty() {
        "Email: ".to_string()
    } else {
        format!("Email [{}]: ", app.login_email)
    };
    let Some(input) = screens::prompt(&label)? else {
        return Ok(());
    };
    let email = if input.is_empty() {
        app.login_email.clone()
    } else {
        input
    };

    let password = rpassword::prompt_password("Password: ")?;

    if email.is_empty() || password.is_empty() {
        app.login_error = Some("Email and password required".to_string());
        println!("Email and password required.");
        return Ok(());
    }

    app.login_error = None;
    println!("Signing in...");

    let issued = match app.authenticator.authenticate(&email, &password).await {
        Ok(issued) => issued,
        Err(e) => {
            error!(error = %e, "Authentication failed");
            app.login_error = Some(format!("Sign-in failed: {}", e));
            println!("Sign-in failed: {}", e);
            return Ok(());
        }
    };

    if let Err(e) = app.session.sign_in(&issued.token, issued.user).await {
        error!(error = %e, "Failed to establish session");
        app.login_error = Some(format!("Sign-in failed: {}", e));
        println!("Sign-in failed: {}", e);
        return Ok(());
    }

    // Remember the email for next time
    app.login_email = email.clone();
    app.config.last_email = Some(email.clone());
    if let Err(e) = app.config.save() {
        warn!(error = %e, "Failed to save config");
    }

    info!("Sign-in complete");
    println!("Signed in as {}.", email);
    Ok(())
}
