//! Lookup, filtering, and display-ordering methods on `FleetState`.

use super::types::*;

impl FleetState {
    /// Look up a route by id.
    pub fn route_by_id(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Look up a bus by id.
    pub fn bus_by_id(&self, id: BusId) -> Option<&Bus> {
        self.buses.iter().find(|b| b.id == id)
    }

    /// Display color for a bus, falling back to neutral gray when the
    /// bus references a missing route or a malformed color string.
    pub fn bus_color(&self, bus: &Bus) -> [u8; 3] {
        self.route_by_id(bus.route_id)
            .and_then(Route::color_rgb)
            .unwrap_or(FALLBACK_ROUTE_COLOR)
    }

    /// Buses visible under the given route selection, original order
    /// preserved. `None` means all routes.
    pub fn visible_buses(&self, selection: Option<RouteId>) -> Vec<&Bus> {
        self.buses
            .iter()
            .filter(|b| selection.is_none_or(|id| b.route_id == id))
            .collect()
    }

    /// Stops visible under the given route selection: the selected
    /// route's stops, or every route's stops when nothing is selected.
    /// An unknown selected route yields no stops.
    pub fn visible_stops(&self, selection: Option<RouteId>) -> Vec<&Stop> {
        match selection {
            Some(id) => self
                .route_by_id(id)
                .map(|r| r.stops.iter().collect())
                .unwrap_or_default(),
            None => self.routes.iter().flat_map(|r| r.stops.iter()).collect(),
        }
    }

    /// Routes visible under the given selection, for map drawing.
    pub fn visible_routes(&self, selection: Option<RouteId>) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| selection.is_none_or(|id| r.id == id))
            .collect()
    }

    /// Visible buses in status-list order: route name ascending, then
    /// status (delayed, on-time, early). The sort is stable, so buses
    /// that tie on both keys keep their fleet order.
    pub fn display_order(&self, selection: Option<RouteId>) -> Vec<&Bus> {
        let mut buses = self.visible_buses(selection);
        buses.sort_by(|a, b| {
            a.route_name
                .cmp(&b.route_name)
                .then_with(|| a.status.display_rank().cmp(&b.status.display_rank()))
        });
        buses
    }
}
