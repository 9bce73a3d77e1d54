use bevy::prelude::*;

pub mod config;
pub mod fleet;
pub mod selection;
pub mod sim_rng;
pub mod viewport;

/// System sets for the fixed-timestep simulation schedule.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// The per-tick fleet advance.
    Tick,
}

/// Global tick counter, incremented once per fleet advance (scheduled
/// or manual refresh).
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // One simulation tick every 3 seconds. Bevy's fixed timestep
        // fires serially relative to the frame loop; a slow frame means
        // catch-up ticks, never overlapping ones.
        app.insert_resource(Time::<Fixed>::from_seconds(config::TICK_SECONDS))
            .init_resource::<TickCounter>()
            .configure_sets(FixedUpdate, SimulationSet::Tick);

        app.add_plugins((
            sim_rng::SimRngPlugin,
            fleet::FleetPlugin,
            selection::SelectionPlugin,
            viewport::ViewportPlugin,
        ));
    }
}
