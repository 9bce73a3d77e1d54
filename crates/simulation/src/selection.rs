//! User selection state: the active route filter and the highlighted bus.

use bevy::prelude::*;

use crate::fleet::{BusId, RouteId};

/// The route filter chosen in the UI. `None` means "all routes".
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedRoute(pub Option<RouteId>);

/// Bus highlighted on the map after its status card was clicked.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedBus(pub Option<BusId>);

impl SelectedBus {
    /// Toggle the highlight: clicking the highlighted bus's card again
    /// clears it.
    pub fn toggle(&mut self, id: BusId) {
        self.0 = if self.0 == Some(id) { None } else { Some(id) };
    }
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedRoute>()
            .init_resource::<SelectedBus>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_bus_toggle() {
        let mut sel = SelectedBus::default();
        sel.toggle(3);
        assert_eq!(sel.0, Some(3));
        sel.toggle(3);
        assert_eq!(sel.0, None);
        sel.toggle(1);
        sel.toggle(2);
        assert_eq!(sel.0, Some(2));
    }
}
