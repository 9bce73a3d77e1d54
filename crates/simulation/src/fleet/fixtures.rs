//! Built-in fleet fixture and the optional fixture-file loader.
//!
//! The dashboard ships with a static table of three Andhra Pradesh
//! intercity routes and one bus per route. A JSON file with the same
//! shape (camelCase fields, kebab-case statuses) can be supplied via
//! the `BUS_TRACKER_FLEET` environment variable to replace it.

use std::fmt;
use std::path::Path;

use super::types::*;

/// The static route table: three intercity routes, three stops each.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route {
            id: 1,
            name: "Vijayawada - Guntur Express".to_string(),
            color: "#FF5733".to_string(),
            stops: vec![
                stop(1, "Vijayawada Bus Station", 16.5062, 80.6480),
                stop(2, "Mangalagiri", 16.4307, 80.5665),
                stop(3, "Guntur Bus Station", 16.3067, 80.4365),
            ],
        },
        Route {
            id: 2,
            name: "Visakhapatnam - Vizianagaram".to_string(),
            color: "#33A8FF".to_string(),
            stops: vec![
                stop(4, "Visakhapatnam RTC Complex", 17.7222, 83.3011),
                stop(5, "Pendurthi", 17.7799, 83.2067),
                stop(6, "Vizianagaram Bus Station", 18.1066, 83.3955),
            ],
        },
        Route {
            id: 3,
            name: "Tirupati - Nellore Express".to_string(),
            color: "#33FF57".to_string(),
            stops: vec![
                stop(7, "Tirupati Central Bus Station", 13.6288, 79.4192),
                stop(8, "Srikalahasti", 13.7513, 79.7025),
                stop(9, "Nellore Bus Station", 14.4426, 79.9865),
            ],
        },
    ]
}

/// The initial bus set: each bus starts at its route's first stop,
/// heading for the second.
pub fn default_buses() -> Vec<Bus> {
    vec![
        Bus {
            id: 1,
            route_id: 1,
            route_name: "Vijayawada - Guntur Express".to_string(),
            latitude: 16.5062,
            longitude: 80.6480,
            heading: 225.0,
            speed: 45.0,
            status: BusStatus::OnTime,
            next_stop: "Mangalagiri".to_string(),
            estimated_arrival: "15 min".to_string(),
            bus_number: "AP 07 Z 1234".to_string(),
            passenger_count: 32,
            max_capacity: 45,
            last_updated: 0.0,
        },
        Bus {
            id: 2,
            route_id: 2,
            route_name: "Visakhapatnam - Vizianagaram".to_string(),
            latitude: 17.7222,
            longitude: 83.3011,
            heading: 45.0,
            speed: 50.0,
            status: BusStatus::Delayed,
            next_stop: "Pendurthi".to_string(),
            estimated_arrival: "20 min".to_string(),
            bus_number: "AP 31 Y 5678".to_string(),
            passenger_count: 28,
            max_capacity: 45,
            last_updated: 0.0,
        },
        Bus {
            id: 3,
            route_id: 3,
            route_name: "Tirupati - Nellore Express".to_string(),
            latitude: 13.6288,
            longitude: 79.4192,
            heading: 90.0,
            speed: 55.0,
            status: BusStatus::Early,
            next_stop: "Srikalahasti".to_string(),
            estimated_arrival: "10 min".to_string(),
            bus_number: "AP 02 X 9012".to_string(),
            passenger_count: 35,
            max_capacity: 45,
            last_updated: 0.0,
        },
    ]
}

fn stop(id: StopId, name: &str, latitude: f64, longitude: f64) -> Stop {
    Stop {
        id,
        name: name.to_string(),
        latitude,
        longitude,
    }
}

impl FleetState {
    /// The built-in fixture fleet.
    pub fn seeded() -> Self {
        Self {
            routes: default_routes(),
            buses: default_buses(),
            last_updated: 0.0,
        }
    }
}

/// Errors from loading a fleet fixture file. All of them are handled
/// by falling back to the built-in fixture with a warning.
#[derive(Debug)]
pub enum FixtureError {
    /// File could not be read.
    Io(std::io::Error),
    /// File is not valid fleet JSON.
    Parse(serde_json::Error),
    /// File parsed but contains no routes or no buses.
    Empty,
    /// A bus references a route id that isn't in the route table.
    BadRouteRef { bus: BusId, route: RouteId },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "I/O error: {e}"),
            FixtureError::Parse(e) => write!(f, "Invalid fleet JSON: {e}"),
            FixtureError::Empty => write!(f, "Fleet fixture has no routes or no buses"),
            FixtureError::BadRouteRef { bus, route } => {
                write!(f, "Bus {bus} references unknown route {route}")
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(e) => Some(e),
            FixtureError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FixtureError {
    fn from(e: std::io::Error) -> Self {
        FixtureError::Io(e)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(e: serde_json::Error) -> Self {
        FixtureError::Parse(e)
    }
}

/// Load a fleet fixture from a JSON file and validate its references.
///
/// A bus whose `next_stop` doesn't name a stop on its route is allowed
/// through (it simply never moves, same as at runtime), but a dangling
/// route id is rejected: it means the file itself is inconsistent.
pub fn load_fleet_file(path: impl AsRef<Path>) -> Result<FleetState, FixtureError> {
    let text = std::fs::read_to_string(path)?;
    let fleet: FleetState = serde_json::from_str(&text)?;
    if fleet.routes.is_empty() || fleet.buses.is_empty() {
        return Err(FixtureError::Empty);
    }
    for bus in &fleet.buses {
        if fleet.route_by_id(bus.route_id).is_none() {
            return Err(FixtureError::BadRouteRef {
                bus: bus.id,
                route: bus.route_id,
            });
        }
    }
    Ok(fleet)
}
