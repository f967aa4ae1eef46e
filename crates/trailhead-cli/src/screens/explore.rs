//! Explore tab, a plain navigation target.

use crate::app::App;

pub fn view(_app: &App) {
    println!("Nothing to explore yet. This tab is yours to fill.");
    println!("Tabs: home, explore, profile.");
}
