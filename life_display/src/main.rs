// main.rs - Window setup for the toroidal Game of Life

use eframe::egui;
use life_engine::{LifeConfig, Simulation};
use tracing::{info, warn};

mod ui;

const WINDOW_TITLE: &str = "Conway's Game of Life";
const WINDOW_SIZE: [f32; 2] = [960.0, 720.0];

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let config = LifeConfig::from_env().unwrap_or_else(|err| {
        warn!(%err, "invalid configuration, using defaults");
        LifeConfig::default()
    });
    info!(
        cell_size = config.cell_size,
        density = config.density,
        speed = config.initial_speed,
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Box::new(ui::LifeApp::new(Simulation::new(config)))),
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
