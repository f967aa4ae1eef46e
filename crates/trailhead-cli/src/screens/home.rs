//! Home tab, the entry screen for a signed-in session.

use crate::app::App;

pub fn view(app: &App) {
    match app.session.user() {
        Some(user) => {
            let name = user.display_name.as_deref().unwrap_or(&user.email);
            println!("Welcome back, {}.", name);
        }
        None => println!("Welcome."),
    }
    println!("Tabs: home, explore, profile. Also around: tasks, insights.");
}
