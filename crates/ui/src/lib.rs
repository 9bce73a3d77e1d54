use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod header;
pub mod loading_screen;
pub mod route_selector;
pub mod status_list;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<loading_screen::LoadingScreen>()
            .add_systems(Startup, theme::apply_dashboard_theme)
            // Chained so the panels claim screen space in a stable
            // order every frame: splash, header, selector, cards.
            .add_systems(
                Update,
                (
                    loading_screen::loading_screen_ui,
                    header::header_ui,
                    route_selector::route_selector_ui,
                    status_list::status_list_ui,
                )
                    .chain(),
            );
    }
}
