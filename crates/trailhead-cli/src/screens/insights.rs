//! Insights screen, ungrouped like tasks.

use crate::app::App;

pub fn view(_app: &App) {
    println!("Charts and insights would live here.");
}
