//! Tasks screen. Reachable signed in or out - it sits outside both
//! route groups, so the guard never redirects it.

use crate::app::App;

pub fn view(app: &App) {
    println!("Your tasks would live here.");
    if !app.session.is_signed_in() {
        println!("You are browsing signed out; this screen is reachable either way.");
    }
}
