//! Data types for the bus fleet.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Unique identifier for a bus stop.
pub type StopId = u32;

/// Unique identifier for a bus route.
pub type RouteId = u32;

/// Unique identifier for a bus.
pub type BusId = u32;

/// Marker color used when a bus references a route that doesn't exist.
pub const FALLBACK_ROUTE_COLOR: [u8; 3] = [0x33, 0x33, 0x33];

/// Punctuality of a bus relative to its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusStatus {
    OnTime,
    Delayed,
    Early,
}

impl BusStatus {
    /// Human-readable label, matching the dashboard's badge text.
    pub fn label(&self) -> &'static str {
        match self {
            BusStatus::OnTime => "on time",
            BusStatus::Delayed => "delayed",
            BusStatus::Early => "early",
        }
    }

    /// Sort rank for the status list: delayed buses surface first
    /// within a route group, then on-time, then early.
    pub fn display_rank(&self) -> u8 {
        match self {
            BusStatus::Delayed => 0,
            BusStatus::OnTime => 1,
            BusStatus::Early => 2,
        }
    }
}

/// A named stop along a route. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// An ordered sequence of stops with a display color, traversed
/// first-to-last. Immutable for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    /// Display color as a `#RRGGBB` hex string.
    pub color: String,
    pub stops: Vec<Stop>,
}

impl Route {
    /// Parsed display color, or `None` if the hex string is malformed.
    pub fn color_rgb(&self) -> Option<[u8; 3]> {
        parse_hex_color(&self.color)
    }
}

/// A single vehicle in the simulated fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: BusId,
    pub route_id: RouteId,
    /// Denormalized route name, used for display sorting.
    pub route_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Bearing toward the next stop in degrees; recomputed each tick.
    pub heading: f64,
    /// Speed in km/h, kept within [SPEED_MIN, SPEED_MAX].
    pub speed: f32,
    pub status: BusStatus,
    /// Name of the stop currently being approached.
    pub next_stop: String,
    /// Free-text ETA, rendered as `"<minutes> min"`.
    pub estimated_arrival: String,
    /// Display identifier, e.g. a registration plate.
    pub bus_number: String,
    pub passenger_count: u32,
    pub max_capacity: u32,
    /// App-elapsed seconds at the last simulation tick.
    #[serde(default)]
    pub last_updated: f64,
}

impl Bus {
    /// The numeric portion of `estimated_arrival`, if it parses.
    pub fn eta_minutes(&self) -> Option<u32> {
        parse_eta_minutes(&self.estimated_arrival)
    }
}

/// Top-level resource holding the route table and the live bus set.
///
/// Both collections are seeded once at startup; buses are replaced
/// wholesale each tick, never partially mutated, so every reader
/// observes a complete snapshot.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetState {
    pub routes: Vec<Route>,
    pub buses: Vec<Bus>,
    /// App-elapsed seconds at the last tick (scheduled or manual).
    #[serde(default)]
    pub last_updated: f64,
}

/// Parse a `#RRGGBB` hex color string.
pub fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Parse the leading minutes out of an ETA string like `"15 min"`.
pub fn parse_eta_minutes(eta: &str) -> Option<u32> {
    eta.split_whitespace().next()?.parse().ok()
}
