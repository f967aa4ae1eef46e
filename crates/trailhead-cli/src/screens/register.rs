//! Account creation screen.

use anyhow::Result;
use tracing::{error, info, warn};
use trailhead_core::Registration;

use crate::app::App;
use crate::screens;

/// Length the password hint asks for. Display-only, like the other hints:
/// submission is not blocked when they are unmet.
const MIN_PASSWORD_LEN: usize = 8;

/// Which of the password hints a candidate password meets.
#[derive(Debug, PartialEq, Eq)]
struct PasswordHints {
    long_enough: bool,
    has_uppercase: bool,
    has_digit: bool,
}

fn password_hints(password: &str) -> PasswordHints {
    PasswordHints {
        long_enough: password.chars().count() >= MIN_PASSWORD_LEN,
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
    }
}

fn mark(met: bool) -> char {
    if met {
        'x'
    } else {
        ' '
    }
}

pub fn view(app: &App) {
    println!("Create an account.");
    if let Some(ref error) = app.register_error {
        println!("! {}", error);
    }
    println!("Commands: sign-up  (or 'go login', 'back')");
}

pub async fn handle(app: &mut App, command: &str) -> Result<()> {
    match command {
        "sign-up" | "signup" => attempt_sign_up(app).await,
        _ => screens::unknown(command),
    }
}

/// Prompt for the registration form and run the sign-up flow.
async fn attempt_sign_up(app: &mut App) -> Result<()> {
    let Some(email) = screens::prompt("Email: ")? else {
        return Ok(());
    };
    let Some(display_name) = screens::prompt("Display name (optional): ")? else {
        return Ok(());
    };

    let password = rpassword::prompt_password("Password: ")?;

    let hints = password_hints(&password);
    println!("Password hints (not enforced):");
    println!("  [{}] at least {} characters", mark(hints.long_enough), MIN_PASSWORD_LEN);
    println!("  [{}] an uppercase letter", mark(hints.has_uppercase));
    println!("  [{}] a number", mark(hints.has_digit));

    let confirm = rpassword::prompt_password("Confirm password: ")?;

    if email.is_empty() || password.is_empty() {
        app.register_error = Some("Email and password required".to_string());
        println!("Email and password required.");
        return Ok(());
    }
    if confirm != password {
        app.register_error = Some("Passwords do not match".to_string());
        println!("Passwords do not match.");
        return Ok(());
    }

    app.register_error = None;
    println!("Creating account...");

    let registration = Registration {
        email: email.clone(),
        display_name: (!display_name.is_empty()).then_some(display_name),
    };

    let issued = match app.authenticator.register(&registration, &password).await {
        Ok(issued) => issued,
        Err(e) => {
            error!(error = %e, "Registration failed");
            app.register_error = Some(format!("Registration failed: {}", e));
            println!("Registration failed: {}", e);
            return Ok(());
        }
    };

    if let Err(e) = app.session.sign_up(&issued.token, issued.user).await {
        error!(error = %e, "Failed to establish session");
        app.register_error = Some(format!("Registration failed: {}", e));
        println!("Registration failed: {}", e);
        return Ok(());
    }

    app.login_email = email.clone();
    app.config.last_email = Some(email.clone());
    if let Err(e) = app.config.save() {
        warn!(error = %e, "Failed to save config");
    }

    info!("Registration complete");
    println!("Account created. Signed in as {}.", email);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
