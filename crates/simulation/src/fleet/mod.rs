//! Simulated bus fleet.
//!
//! The fleet is a fixed set of buses on a fixed route table, seeded at
//! startup. Once per tick every bus is nudged toward its next stop and
//! its status, ETA, speed, and passenger count are jittered; the whole
//! bus collection is replaced with the freshly computed one.
//!
//! ## Data model
//! - `Stop`: a named coordinate on a route
//! - `Route`: an ordered sequence of stops plus a display color
//! - `Bus`: position, heading, speed, status, ETA, occupancy
//! - `FleetState`: top-level resource storing routes and buses

pub mod fixtures;
pub mod state;
pub mod systems;
pub mod types;

pub use systems::*;
pub use types::*;

use bevy::prelude::*;

pub struct FleetPlugin;

impl Plugin for FleetPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FleetState::seeded())
            .add_event::<RefreshRequested>()
            .add_systems(
                FixedUpdate,
                systems::scheduled_tick.in_set(crate::SimulationSet::Tick),
            )
            .add_systems(Update, systems::manual_refresh);
    }
}
