use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::fleet::fixtures;
use simulation::sim_rng::SimRng;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "AP Live Bus Tracker".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Optional overrides for demos and debugging. A broken fixture file
    // is not fatal; the built-in fleet is used instead.
    if let Ok(path) = std::env::var("BUS_TRACKER_FLEET") {
        match fixtures::load_fleet_file(&path) {
            Ok(fleet) => {
                info!("loaded fleet fixture from {path}");
                app.insert_resource(fleet);
            }
            Err(e) => warn!("ignoring fleet fixture {path}: {e}"),
        }
    }
    if let Ok(seed) = std::env::var("BUS_TRACKER_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(SimRng::from_seed_u64(seed));
            }
            Err(_) => warn!("ignoring non-numeric BUS_TRACKER_SEED '{seed}'"),
        }
    }

    app.run();
}
