//! Square Dash entry point
//!
//! Sets up logging, reads settings and runs the game loop.

use square_dash::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Square Dash starting...");

    let settings = Settings::from_env();
    log::debug!("Settings: {:?}", settings);

    if let Err(e) = square_dash::platform::run(settings) {
        log::error!("{e:#}");
        std::process::exit(1);
    }

    log::info!("Square Dash exited cleanly");
}
