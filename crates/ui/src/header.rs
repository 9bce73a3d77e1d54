//! Dashboard header: title, last-updated readout, refresh button.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::fleet::{FleetState, RefreshRequested};
use simulation::TickCounter;

use crate::loading_screen::LoadingScreen;

/// System: the top header panel. The refresh button performs exactly
/// one extra simulation tick, same transformation as the scheduled one.
pub fn header_ui(
    mut contexts: EguiContexts,
    fleet: Res<FleetState>,
    tick: Res<TickCounter>,
    time: Res<Time>,
    splash: Res<LoadingScreen>,
    mut refresh: EventWriter<RefreshRequested>,
) {
    if splash.active() {
        return;
    }

    egui::TopBottomPanel::top("header").show(contexts.ctx_mut(), |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("AP Live Bus Tracker");
            ui.label(
                egui::RichText::new("simulated fleet")
                    .small()
                    .weak(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Refresh").clicked() {
                    refresh.send(RefreshRequested);
                }
                let ago = time.elapsed_secs_f64() - fleet.last_updated;
                ui.label(egui::RichText::new(updated_label(ago)).weak());
                ui.label(
                    egui::RichText::new(format!("tick {}", tick.0))
                        .small()
                        .monospace()
                        .weak(),
                );
            });
        });
        ui.add_space(4.0);
    });
}

/// Human-readable "how stale is this" label for the header.
fn updated_label(seconds_ago: f64) -> String {
    if seconds_ago < 1.0 {
        "updated just now".to_string()
    } else {
        format!("updated {}s ago", seconds_ago as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updated_label() {
        assert_eq!(updated_label(0.0), "updated just now");
        assert_eq!(updated_label(0.9), "updated just now");
        assert_eq!(updated_label(1.0), "updated 1s ago");
        assert_eq!(updated_label(2.7), "updated 2s ago");
        assert_eq!(updated_label(59.9), "updated 59s ago");
    }
}
