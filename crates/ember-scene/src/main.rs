//! Demo: an articulated box figure driven by the ember window loop.
//!
//! Keys: `Escape` quits, `Space` pauses, `C` toggles the cursor, `P` logs
//! the latest frame metrics. The mouse wheel zooms.

mod camera;
mod figure;
mod renderer;
mod scene;
mod transform;

use ember_engine::logging::{LoggingConfig, init_logging};
use ember_engine::{Window, WindowConfig};

use crate::scene::Scene;

fn main() {
    init_logging(LoggingConfig::default());

    let config = WindowConfig::new("ember scene", 1280, 720)
        .msaa_samples(4)
        .context_version(4, 6)
        .update_frequency(144.0);

    let mut window = match Window::new(config, Scene::new()) {
        Ok(window) => window,
        Err(e) => {
            log::error!("failed to open window: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = window.run() {
        log::error!("scene stopped: {e}");
        std::process::exit(1);
    }
}
