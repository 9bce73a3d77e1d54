//! The per-bus status card list.
//!
//! Cards are rebuilt every frame from the current fleet snapshot in
//! display order (route name, then delayed < on-time < early). Nothing
//! here is persisted; clicking a card toggles the map highlight.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::fleet::{Bus, BusStatus, FleetState};
use simulation::selection::{SelectedBus, SelectedRoute};

use crate::loading_screen::LoadingScreen;

pub fn status_list_ui(
    mut contexts: EguiContexts,
    fleet: Res<FleetState>,
    selection: Res<SelectedRoute>,
    mut selected_bus: ResMut<SelectedBus>,
    splash: Res<LoadingScreen>,
) {
    if splash.active() {
        return;
    }

    egui::SidePanel::right("bus_status")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(6.0);
            ui.heading("Bus Status");
            ui.add_space(6.0);

            let buses = fleet.display_order(selection.0);
            if buses.is_empty() {
                ui.label("No buses currently available for the selected route.");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for bus in buses {
                    let [r, g, b] = fleet.bus_color(bus);
                    let color = egui::Color32::from_rgb(r, g, b);
                    let highlighted = selected_bus.0 == Some(bus.id);
                    if bus_card(ui, bus, color, highlighted) {
                        selected_bus.toggle(bus.id);
                    }
                    ui.add_space(8.0);
                }
            });
        });
}

/// Draw one status card. Returns true when the card was clicked.
fn bus_card(ui: &mut egui::Ui, bus: &Bus, route_color: egui::Color32, highlighted: bool) -> bool {
    let stroke_color = if highlighted {
        egui::Color32::WHITE
    } else {
        route_color
    };

    let response = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&bus.route_name).strong());
                    ui.label(egui::RichText::new(&bus.bus_number).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    status_badge(ui, bus.status);
                });
            });

            ui.add_space(4.0);
            ui.label(format!("Next: {}", bus.next_stop));
            ui.label(format!("ETA: {}", bus.estimated_arrival));
            ui.label(format!("{:.0} km/h", bus.speed));

            let fraction = if bus.max_capacity > 0 {
                bus.passenger_count as f32 / bus.max_capacity as f32
            } else {
                0.0
            };
            ui.add(
                egui::ProgressBar::new(fraction)
                    .fill(route_color)
                    .text(format!(
                        "Passengers {}/{}",
                        bus.passenger_count, bus.max_capacity
                    )),
            );
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}

/// Colored status pill, matching the original dashboard's badge colors:
/// green for on-time, red for delayed, blue for early.
fn status_badge(ui: &mut egui::Ui, status: BusStatus) {
    let (bg, fg) = badge_colors(status);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.label()).color(fg).small());
        });
}

fn badge_colors(status: BusStatus) -> (egui::Color32, egui::Color32) {
    match status {
        BusStatus::OnTime => (
            egui::Color32::from_rgb(27, 94, 32),
            egui::Color32::from_rgb(200, 230, 201),
        ),
        BusStatus::Delayed => (
            egui::Color32::from_rgb(130, 30, 30),
            egui::Color32::from_rgb(255, 205, 210),
        ),
        BusStatus::Early => (
            egui::Color32::from_rgb(21, 60, 120),
            egui::Color32::from_rgb(187, 222, 251),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_colors_distinct() {
        let on_time = badge_colors(BusStatus::OnTime);
        let delayed = badge_colors(BusStatus::Delayed);
        let early = badge_colors(BusStatus::Early);
        assert_ne!(on_time.0, delayed.0);
        assert_ne!(delayed.0, early.0);
        assert_ne!(early.0, on_time.0);
    }
}
