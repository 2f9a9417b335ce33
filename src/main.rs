//! Schedule Board Frontend Entry Point

mod app;
mod components;
mod config;
mod input;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use schedule_core::{seed, Board, ScheduleRepository};
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_problem) = AppConfig::load();
    let level = config.max_level().unwrap_or(Level::INFO);
    logging::init_logging(level);
    if let Some(e) = config_problem {
        tracing::warn!(error = %e, "using default configuration values");
    }

    let store = if config.load_seed {
        seed::load_seed().unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled seed is invalid, starting empty");
            ScheduleRepository::new()
        })
    } else {
        ScheduleRepository::new()
    };
    tracing::info!(items = store.len(), "starting schedule board");

    let board = Board::new(store);
    mount_to_body(move || view! { <App config=config board=board /> });
}
