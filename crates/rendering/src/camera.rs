//! Map camera: a 2D orthographic camera that frames the viewport
//! bounds published by the simulation.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::viewport::ViewportBounds;

use crate::projection::geo_to_world;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System: re-center and re-scale the camera whenever the viewport
/// bounds generation moves. Bounds that didn't actually change never
/// reach this point, which is what keeps the map from jittering while
/// the fleet idles.
pub fn fit_camera_to_bounds(
    viewport: Res<ViewportBounds>,
    mut applied: Local<u64>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut camera: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if viewport.generation == *applied {
        return;
    }
    let Some(bounds) = viewport.bounds else {
        return;
    };
    let Ok(window) = window.get_single() else {
        return;
    };
    let Ok((mut transform, mut projection)) = camera.get_single_mut() else {
        return;
    };
    *applied = viewport.generation;

    let (center_lat, center_lng) = bounds.center();
    let center = geo_to_world(center_lat, center_lng);
    transform.translation.x = center.x;
    transform.translation.y = center.y;

    // Pick the scale that fits the padded bounds into the window on
    // both axes.
    let min = geo_to_world(bounds.min_lat, bounds.min_lng);
    let max = geo_to_world(bounds.max_lat, bounds.max_lng);
    let span = max - min;
    if window.width() > 0.0 && window.height() > 0.0 {
        projection.scale = (span.x / window.width()).max(span.y / window.height());
    }
}
