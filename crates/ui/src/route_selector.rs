//! Route filter buttons: "All Routes" plus one button per route.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::fleet::{parse_hex_color, FleetState};
use simulation::selection::{SelectedBus, SelectedRoute};

use crate::loading_screen::LoadingScreen;

pub fn route_selector_ui(
    mut contexts: EguiContexts,
    fleet: Res<FleetState>,
    mut selection: ResMut<SelectedRoute>,
    mut selected_bus: ResMut<SelectedBus>,
    splash: Res<LoadingScreen>,
) {
    if splash.active() {
        return;
    }

    egui::TopBottomPanel::top("route_selector").show(contexts.ctx_mut(), |ui| {
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Bus Routes").strong());
        ui.horizontal_wrapped(|ui| {
            let mut next = selection.0;

            if ui
                .selectable_label(selection.0.is_none(), "All Routes")
                .clicked()
            {
                next = None;
            }

            for route in &fleet.routes {
                let text = match parse_hex_color(&route.color) {
                    Some([r, g, b]) => egui::RichText::new(&route.name)
                        .color(egui::Color32::from_rgb(r, g, b)),
                    None => egui::RichText::new(&route.name),
                };
                if ui
                    .selectable_label(selection.0 == Some(route.id), text)
                    .clicked()
                {
                    next = Some(route.id);
                }
            }

            if next != selection.0 {
                selection.0 = next;
                // The highlight belongs to the previous filter view.
                selected_bus.0 = None;
            }
        });
        ui.add_space(4.0);
    });
}
