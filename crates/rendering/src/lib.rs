use bevy::prelude::*;

pub mod camera;
pub mod map_render;
pub mod projection;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (camera::setup_camera, map_render::spawn_bus_markers))
            .add_systems(
                Update,
                (
                    camera::fit_camera_to_bounds
                        .after(simulation::viewport::update_viewport_bounds),
                    map_render::update_bus_markers,
                    map_render::draw_map_gizmos,
                ),
            );
    }
}
