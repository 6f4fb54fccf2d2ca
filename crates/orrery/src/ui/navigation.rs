//! Planet navigation panel

use egui::{Align2, Color32, RichText};
use orrery_core::camera::OVERVIEW;
use orrery_core::SceneState;

use super::{preset_label, UiAction};

const ACTIVE_COLOUR: Color32 = Color32::from_rgb(255, 215, 0);

/// Show the navigation panel: overview, one button per preset, tour and
/// orbit toggles and a reset.
pub fn show_navigation(ctx: &egui::Context, state: &SceneState, actions: &mut Vec<UiAction>) {
    let controller = state.controller();
    let current = controller.current_target();

    egui::Window::new("Navigation")
        .anchor(Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            let overview_active = current == Some(OVERVIEW);
            if ui
                .selectable_label(overview_active, preset_label(state, OVERVIEW))
                .clicked()
            {
                actions.push(UiAction::Overview);
            }
            ui.separator();

            for preset in controller.presets().navigable() {
                let active = current == Some(preset.id.as_str());
                let label = preset_label(state, &preset.id);
                let text = if active {
                    RichText::new(label).color(ACTIVE_COLOUR)
                } else {
                    RichText::new(label)
                };
                if ui.selectable_label(active, text).clicked() {
                    actions.push(UiAction::TransitionTo(preset.id.clone()));
                }
            }
            ui.separator();

            let tour_label = if controller.is_touring() {
                "Stop Tour"
            } else {
                "Start Tour"
            };
            if ui.button(tour_label).clicked() {
                actions.push(UiAction::ToggleTour);
            }

            let orbit_label = if controller.is_orbiting() {
                "Stop Orbit"
            } else {
                "Orbit Target"
            };
            let can_orbit = controller.is_orbiting() || current.is_some();
            if ui
                .add_enabled(can_orbit, egui::Button::new(orbit_label))
                .clicked()
            {
                actions.push(UiAction::ToggleOrbit);
            }

            if ui.button("Reset View").clicked() {
                actions.push(UiAction::ResetView);
            }

            ui.label(
                RichText::new(format!("Camera: {}", controller.mode().name()))
                    .small()
                    .weak(),
            );
        });
}
