//! Simulation speed controls

use egui::Align2;
use orrery_core::SceneState;

use super::UiAction;

/// Quick-pick speeds under the slider
pub const SPEED_PRESETS: [f32; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];

pub fn show_time_controls(ctx: &egui::Context, state: &SceneState, actions: &mut Vec<UiAction>) {
    let clock = state.clock();

    egui::Window::new("Time")
        .anchor(Align2::LEFT_BOTTOM, [10.0, -10.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if clock.is_paused() { "▶ Play" } else { "⏸ Pause" };
                if ui.button(label).clicked() {
                    actions.push(UiAction::TogglePause);
                }

                let mut scale = clock.time_scale();
                let slider = egui::Slider::new(&mut scale, 0.0..=clock.max_scale())
                    .step_by(0.1)
                    .suffix("x")
                    .text("Speed");
                if ui.add(slider).changed() {
                    actions.push(UiAction::SetTimeScale(scale));
                }
            });

            ui.horizontal(|ui| {
                for preset in SPEED_PRESETS {
                    let active = (clock.time_scale() - preset).abs() < f32::EPSILON;
                    if ui.selectable_label(active, format!("{preset}x")).clicked() {
                        actions.push(UiAction::SetTimeScale(preset));
                    }
                }
            });
        });
}
