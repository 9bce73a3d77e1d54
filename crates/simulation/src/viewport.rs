//! Viewport bounds over the visible fleet.
//!
//! The map viewport frames every visible bus and stop with a fixed
//! padding. Recomputation happens only when the visible bus set
//! changes by value or the route selection changes; recomputing every
//! tick regardless would make the map jitter.

use bevy::prelude::*;

use crate::config::BOUNDS_PADDING_DEG;
use crate::fleet::{Bus, FleetState, RouteId, Stop};
use crate::selection::SelectedRoute;

/// A lat/lng rectangle, already padded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// (lat span, lng span) in degrees.
    pub fn span(&self) -> (f64, f64) {
        (self.max_lat - self.min_lat, self.max_lng - self.min_lng)
    }
}

/// Bounding box over the given buses and stops, expanded by the fixed
/// padding on every side. `None` when there is nothing to frame.
pub fn compute_bounds(buses: &[&Bus], stops: &[&Stop]) -> Option<GeoBounds> {
    let coords = buses
        .iter()
        .map(|b| (b.latitude, b.longitude))
        .chain(stops.iter().map(|s| (s.latitude, s.longitude)));

    let mut bounds: Option<GeoBounds> = None;
    for (lat, lng) in coords {
        let b = bounds.get_or_insert(GeoBounds {
            min_lat: lat,
            min_lng: lng,
            max_lat: lat,
            max_lng: lng,
        });
        b.min_lat = b.min_lat.min(lat);
        b.min_lng = b.min_lng.min(lng);
        b.max_lat = b.max_lat.max(lat);
        b.max_lng = b.max_lng.max(lng);
    }

    bounds.map(|b| GeoBounds {
        min_lat: b.min_lat - BOUNDS_PADDING_DEG,
        min_lng: b.min_lng - BOUNDS_PADDING_DEG,
        max_lat: b.max_lat + BOUNDS_PADDING_DEG,
        max_lng: b.max_lng + BOUNDS_PADDING_DEG,
    })
}

/// Cached viewport bounds.
///
/// Consumers watch `generation`: it only moves when the bounds were
/// actually recomputed, so an unchanged fleet never disturbs the
/// camera. The previous bounds are left standing when the visible set
/// goes empty.
#[derive(Resource, Debug, Default)]
pub struct ViewportBounds {
    pub bounds: Option<GeoBounds>,
    pub generation: u64,
    last_buses: Vec<Bus>,
    last_selection: Option<RouteId>,
}

impl ViewportBounds {
    /// Recompute if (and only if) the visible bus set or the selection
    /// changed value since the last recompute and the bus set is
    /// non-empty. Returns whether a recompute happened.
    pub fn refresh(
        &mut self,
        visible_buses: &[&Bus],
        visible_stops: &[&Stop],
        selection: Option<RouteId>,
    ) -> bool {
        let buses_changed = !same_buses(&self.last_buses, visible_buses);
        let selection_changed = selection != self.last_selection;
        if (!buses_changed && !selection_changed) || visible_buses.is_empty() {
            return false;
        }

        self.last_buses = visible_buses.iter().map(|b| (*b).clone()).collect();
        self.last_selection = selection;

        if let Some(b) = compute_bounds(visible_buses, visible_stops) {
            self.bounds = Some(b);
            self.generation += 1;
            return true;
        }
        false
    }
}

/// Content equality between the cached snapshot and the current
/// borrowed view, without allocating.
fn same_buses(prev: &[Bus], current: &[&Bus]) -> bool {
    prev.len() == current.len() && prev.iter().zip(current).all(|(a, b)| a == *b)
}

/// System: keep `ViewportBounds` in sync with the visible fleet.
pub fn update_viewport_bounds(
    fleet: Res<FleetState>,
    selection: Res<SelectedRoute>,
    mut viewport: ResMut<ViewportBounds>,
) {
    let buses = fleet.visible_buses(selection.0);
    let stops = fleet.visible_stops(selection.0);
    viewport.refresh(&buses, &stops, selection.0);
}

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportBounds>()
            .add_systems(Update, update_viewport_bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::fixtures::{default_buses, default_routes};
    use crate::fleet::BusStatus;

    fn bus_at(id: u32, lat: f64, lng: f64) -> Bus {
        let mut bus = default_buses().remove(0);
        bus.id = id;
        bus.latitude = lat;
        bus.longitude = lng;
        bus
    }

    #[test]
    fn test_bounds_pad_every_side() {
        let b1 = bus_at(1, 10.0, 30.0);
        let b2 = bus_at(2, 20.0, 40.0);
        let bounds = compute_bounds(&[&b1, &b2], &[]).expect("two buses give bounds");
        assert_eq!(bounds.min_lat, 9.99);
        assert_eq!(bounds.min_lng, 29.99);
        assert_eq!(bounds.max_lat, 20.01);
        assert_eq!(bounds.max_lng, 40.01);
    }

    #[test]
    fn test_bounds_include_stops() {
        let b1 = bus_at(1, 10.0, 30.0);
        let routes = default_routes();
        let northmost = &routes[1].stops[2]; // Vizianagaram, lat 18.1066
        let bounds = compute_bounds(&[&b1], &[northmost]).expect("bounds");
        assert_eq!(bounds.max_lat, 18.1066 + 0.01);
        assert_eq!(bounds.min_lat, 10.0 - 0.01);
    }

    #[test]
    fn test_bounds_empty_input_is_none() {
        assert!(compute_bounds(&[], &[]).is_none());
    }

    #[test]
    fn test_refresh_skips_unchanged_input() {
        let b1 = bus_at(1, 10.0, 30.0);
        let mut viewport = ViewportBounds::default();

        assert!(viewport.refresh(&[&b1], &[], None));
        let gen_after_first = viewport.generation;
        let bounds_after_first = viewport.bounds;

        // Same content again: no recompute, generation untouched.
        let b1_copy = b1.clone();
        assert!(!viewport.refresh(&[&b1_copy], &[], None));
        assert_eq!(viewport.generation, gen_after_first);
        assert_eq!(viewport.bounds, bounds_after_first);
    }

    #[test]
    fn test_refresh_recomputes_on_moved_bus() {
        let b1 = bus_at(1, 10.0, 30.0);
        let mut viewport = ViewportBounds::default();
        assert!(viewport.refresh(&[&b1], &[], None));

        let moved = bus_at(1, 11.0, 30.0);
        assert!(viewport.refresh(&[&moved], &[], None));
        assert_eq!(viewport.generation, 2);
    }

    #[test]
    fn test_refresh_recomputes_on_selection_change() {
        let b1 = bus_at(1, 10.0, 30.0);
        let mut viewport = ViewportBounds::default();
        assert!(viewport.refresh(&[&b1], &[], None));
        // Same buses, different selection value.
        assert!(viewport.refresh(&[&b1], &[], Some(1)));
        assert_eq!(viewport.generation, 2);
    }

    #[test]
    fn test_status_flip_counts_as_content_change() {
        // A status flip is a value change and must recompute; this
        // guards the comparison being content equality, not position
        // equality.
        let b1 = bus_at(1, 10.0, 30.0);
        let mut viewport = ViewportBounds::default();
        assert!(viewport.refresh(&[&b1], &[], None));

        let mut flipped = b1.clone();
        flipped.status = BusStatus::Delayed;
        assert!(viewport.refresh(&[&flipped], &[], None));
    }

    #[test]
    fn test_empty_visible_set_keeps_prior_viewport() {
        let b1 = bus_at(1, 10.0, 30.0);
        let mut viewport = ViewportBounds::default();
        assert!(viewport.refresh(&[&b1], &[], None));
        let prior = viewport.bounds;

        // Selection narrowed to a route with no buses: nothing happens.
        assert!(!viewport.refresh(&[], &[], Some(2)));
        assert_eq!(viewport.bounds, prior);
        assert_eq!(viewport.generation, 1);
    }

    #[test]
    fn test_center_and_span() {
        let bounds = GeoBounds {
            min_lat: 9.99,
            min_lng: 29.99,
            max_lat: 20.01,
            max_lng: 40.01,
        };
        let (lat, lng) = bounds.center();
        assert!((lat - 15.0).abs() < 1e-9);
        assert!((lng - 35.0).abs() < 1e-9);
        let (lat_span, lng_span) = bounds.span();
        assert!((lat_span - 10.02).abs() < 1e-9);
        assert!((lng_span - 10.02).abs() < 1e-9);
    }
}
