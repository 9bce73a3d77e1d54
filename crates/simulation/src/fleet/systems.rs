//! The per-tick fleet transformation and the systems that drive it.

use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    DEGREES_PER_KMH, ETA_MAX_MINUTES, ETA_MIN_MINUTES, SPEED_MAX, SPEED_MIN,
    STATUS_RESAMPLE_CHANCE,
};
use crate::sim_rng::SimRng;
use crate::TickCounter;

use super::types::*;

/// Sent by the UI when the user presses the refresh button. Each press
/// performs exactly one extra tick outside the fixed schedule, using
/// the same transformation as the scheduled tick.
#[derive(Event, Default)]
pub struct RefreshRequested;

/// The sampled randomness for advancing one bus by one tick.
///
/// All random decisions are drawn up front so the advance itself is a
/// pure function; tests construct exact jitter values and assert exact
/// outputs.
#[derive(Debug, Clone, Copy)]
pub struct TickJitter {
    /// Passenger count delta, one of -1, 0, +1.
    pub passenger_delta: i32,
    /// Replacement status, sampled with 5% probability per tick.
    pub status_resample: Option<BusStatus>,
    /// Speed delta in km/h, +1 or -1 (coin flip).
    pub speed_delta: f32,
}

impl TickJitter {
    /// Sample one tick's worth of jitter from the given RNG.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let passenger_delta = rng.gen_range(-1..=1);
        let status_resample = if rng.gen_bool(STATUS_RESAMPLE_CHANCE) {
            Some(match rng.gen_range(0..3) {
                0 => BusStatus::OnTime,
                1 => BusStatus::Delayed,
                _ => BusStatus::Early,
            })
        } else {
            None
        };
        let speed_delta = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            passenger_delta,
            status_resample,
            speed_delta,
        }
    }

    /// Jitter that changes nothing except position and timestamps.
    pub fn none() -> Self {
        Self {
            passenger_delta: 0,
            status_resample: None,
            speed_delta: 0.0,
        }
    }
}

/// Advance a single bus by one tick.
///
/// If the bus's route is missing, or its `next_stop` doesn't name a
/// stop on that route, the bus is returned unchanged: a recoverable
/// no-op, corrected whenever the reference data catches up.
///
/// The target stop is looked up by name and is never advanced to the
/// following stop on arrival, so a bus orbits its target indefinitely.
/// That matches the observed behavior of the system this replaces and
/// is preserved deliberately; see DESIGN.md.
pub fn advance_bus(bus: &Bus, routes: &[Route], jitter: TickJitter, now: f64) -> Bus {
    let Some(route) = routes.iter().find(|r| r.id == bus.route_id) else {
        return bus.clone();
    };
    let Some(target) = route.stops.iter().find(|s| s.name == bus.next_stop) else {
        return bus.clone();
    };

    // Bearing toward the target, degrees. Planar approximation.
    let heading = (target.latitude - bus.latitude)
        .atan2(target.longitude - bus.longitude)
        .to_degrees();

    let speed_factor = DEGREES_PER_KMH * f64::from(bus.speed);
    let latitude = bus.latitude + heading.to_radians().sin() * speed_factor;
    let longitude = bus.longitude + heading.to_radians().cos() * speed_factor;

    let passenger_count = (bus.passenger_count as i64 + i64::from(jitter.passenger_delta))
        .clamp(0, i64::from(bus.max_capacity)) as u32;

    let status = jitter.status_resample.unwrap_or(bus.status);
    let estimated_arrival = adjust_eta(&bus.estimated_arrival, status);
    let speed = (bus.speed + jitter.speed_delta).clamp(SPEED_MIN, SPEED_MAX);

    Bus {
        latitude,
        longitude,
        heading,
        speed,
        status,
        estimated_arrival,
        passenger_count,
        last_updated: now,
        ..bus.clone()
    }
}

/// Advance every bus by one tick. Pure: the input slice is never
/// mutated, and each bus is advanced independently.
pub fn advance_fleet(buses: &[Bus], routes: &[Route], rng: &mut impl Rng, now: f64) -> Vec<Bus> {
    buses
        .iter()
        .map(|bus| advance_bus(bus, routes, TickJitter::sample(rng), now))
        .collect()
}

/// Nudge the ETA text one minute in the direction of the status:
/// delayed buses drift up (capped at 30), early buses drift down
/// (floored at 1). Unparseable text is left untouched.
fn adjust_eta(eta: &str, status: BusStatus) -> String {
    let Some(minutes) = parse_eta_minutes(eta) else {
        return eta.to_string();
    };
    let adjusted = match status {
        BusStatus::Delayed if minutes < ETA_MAX_MINUTES => minutes + 1,
        BusStatus::Early if minutes > ETA_MIN_MINUTES => minutes - 1,
        _ => minutes,
    };
    format!("{adjusted} min")
}

/// System: scheduled tick. Runs on the 3-second fixed timestep and
/// replaces the bus collection wholesale.
pub fn scheduled_tick(
    mut fleet: ResMut<FleetState>,
    mut rng: ResMut<SimRng>,
    mut tick: ResMut<TickCounter>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs_f64();
    fleet.buses = advance_fleet(&fleet.buses, &fleet.routes, &mut rng.0, now);
    fleet.last_updated = now;
    tick.0 = tick.0.wrapping_add(1);
}

/// System: manual refresh. One extra tick per batch of refresh events,
/// no matter how many presses queued up in a frame.
pub fn manual_refresh(
    mut events: EventReader<RefreshRequested>,
    mut fleet: ResMut<FleetState>,
    mut rng: ResMut<SimRng>,
    mut tick: ResMut<TickCounter>,
    time: Res<Time>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let now = time.elapsed_secs_f64();
    fleet.buses = advance_fleet(&fleet.buses, &fleet.routes, &mut rng.0, now);
    fleet.last_updated = now;
    tick.0 = tick.0.wrapping_add(1);
}
