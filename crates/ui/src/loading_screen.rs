//! Startup loading splash.
//!
//! The dashboard shows a short splash with an animated dots effect
//! before the map and panels appear. Purely cosmetic; the simulation
//! starts ticking underneath it right away.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// How long the splash stays up.
const SPLASH_SECONDS: f32 = 1.5;

/// Tracks the splash lifetime and the animated dots state.
#[derive(Resource)]
pub struct LoadingScreen {
    timer: Timer,
    /// Number of dots currently shown (cycles 1 -> 2 -> 3 -> 1 ...).
    dots: usize,
    dot_timer: Timer,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(SPLASH_SECONDS, TimerMode::Once),
            dots: 1,
            dot_timer: Timer::from_seconds(0.4, TimerMode::Repeating),
        }
    }
}

impl LoadingScreen {
    /// Whether the splash is still covering the dashboard. The other
    /// panels skip drawing while this is true.
    pub fn active(&self) -> bool {
        !self.timer.finished()
    }
}

/// System: advance the splash timers and draw the overlay while it is
/// active.
pub fn loading_screen_ui(
    mut contexts: EguiContexts,
    mut splash: ResMut<LoadingScreen>,
    time: Res<Time>,
) {
    splash.timer.tick(time.delta());
    if !splash.active() {
        return;
    }

    splash.dot_timer.tick(time.delta());
    if splash.dot_timer.just_finished() {
        splash.dots = splash.dots % 3 + 1;
    }

    let label = format!("Loading Bus Tracker{}", ".".repeat(splash.dots));
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.add(egui::Spinner::new().size(48.0));
                ui.add_space(12.0);
                ui.heading(label);
            });
        });
    });
}
