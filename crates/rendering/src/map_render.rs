//! Map drawing: bus markers, route polylines, stop markers.
//!
//! Each bus gets one sprite entity, spawned at startup (the fleet size
//! is fixed for the session) and re-posed every frame from the current
//! `FleetState`. Routes and stops are immutable but their visibility
//! follows the selection, so they are drawn with gizmos each frame
//! instead of being baked into entities.

use bevy::prelude::*;

use simulation::fleet::{BusId, FleetState};
use simulation::selection::{SelectedBus, SelectedRoute};

use crate::projection::geo_to_world;

/// Marker sprite for one bus; the payload is the bus id it tracks.
#[derive(Component)]
pub struct BusMarker(pub BusId);

/// Bus marker sprite size in world units (longer than wide, so the
/// heading rotation reads as a direction).
const BUS_MARKER_SIZE: Vec2 = Vec2::new(18.0, 10.0);

/// Stop marker radius in world units.
const STOP_RADIUS: f32 = 6.0;

/// Highlight ring radius around the selected bus.
const HIGHLIGHT_RADIUS: f32 = 16.0;

/// Z layers: routes under stops under buses.
const BUS_Z: f32 = 2.0;

pub fn spawn_bus_markers(mut commands: Commands, fleet: Res<FleetState>) {
    for bus in &fleet.buses {
        let [r, g, b] = fleet.bus_color(bus);
        commands.spawn((
            BusMarker(bus.id),
            Sprite::from_color(Color::srgb_u8(r, g, b), BUS_MARKER_SIZE),
            Transform::from_translation(geo_to_world(bus.latitude, bus.longitude).extend(BUS_Z)),
        ));
    }
}

/// System: re-pose every bus marker from the current fleet snapshot.
pub fn update_bus_markers(
    fleet: Res<FleetState>,
    selection: Res<SelectedRoute>,
    mut markers: Query<(&BusMarker, &mut Sprite, &mut Transform, &mut Visibility)>,
) {
    for (marker, mut sprite, mut transform, mut visibility) in &mut markers {
        let Some(bus) = fleet.bus_by_id(marker.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        *visibility = match selection.0 {
            Some(route_id) if bus.route_id != route_id => Visibility::Hidden,
            _ => Visibility::Visible,
        };

        let pos = geo_to_world(bus.latitude, bus.longitude);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        // Heading is the bearing in the lng/lat plane, which is exactly
        // the world X/Y plane, so the sprite's +X axis faces travel.
        transform.rotation = Quat::from_rotation_z(bus.heading.to_radians() as f32);

        let [r, g, b] = fleet.bus_color(bus);
        sprite.color = Color::srgb_u8(r, g, b);
    }
}

/// System: draw the visible routes' polylines and stop markers, plus
/// the highlight ring for the selected bus.
pub fn draw_map_gizmos(
    mut gizmos: Gizmos,
    fleet: Res<FleetState>,
    selection: Res<SelectedRoute>,
    selected_bus: Res<SelectedBus>,
) {
    for route in fleet.visible_routes(selection.0) {
        let [r, g, b] = route
            .color_rgb()
            .unwrap_or(simulation::fleet::FALLBACK_ROUTE_COLOR);
        let color = Color::srgb_u8(r, g, b);

        for pair in route.stops.windows(2) {
            gizmos.line_2d(
                geo_to_world(pair[0].latitude, pair[0].longitude),
                geo_to_world(pair[1].latitude, pair[1].longitude),
                color.with_alpha(0.6),
            );
        }
        for stop in &route.stops {
            let center = geo_to_world(stop.latitude, stop.longitude);
            gizmos.circle_2d(center, STOP_RADIUS, color);
            gizmos.circle_2d(center, STOP_RADIUS * 0.4, Color::WHITE);
        }
    }

    if let Some(bus) = selected_bus.0.and_then(|id| fleet.bus_by_id(id)) {
        let visible = selection.0.is_none_or(|route_id| bus.route_id == route_id);
        if visible {
            let center = geo_to_world(bus.latitude, bus.longitude);
            gizmos.circle_2d(center, HIGHLIGHT_RADIUS, Color::WHITE);
        }
    }
}
