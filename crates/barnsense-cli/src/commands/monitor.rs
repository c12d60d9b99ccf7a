use barnsense_core::sample_fleet;

use crate::tui::app::App;

pub fn run(refresh_secs: f64) {
    let fleet = sample_fleet();
    let mut app = App::new(fleet, refresh_secs);
    if let Err(e) = app.run() {
        eprintln!("Dashboard error: {e}");
        std::process::exit(1);
    }
}
