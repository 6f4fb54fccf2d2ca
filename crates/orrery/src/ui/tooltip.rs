//! Name tooltip that follows the cursor over a hovered body

use egui::{Color32, Pos2, Stroke};
use orrery_core::SceneState;

pub fn show_hover_tooltip(ctx: &egui::Context, state: &SceneState, cursor: Option<Pos2>) {
    let (Some(cursor), Some(id)) = (cursor, state.selection().hovered) else {
        return;
    };
    let Some(body) = state.system().body(id) else {
        return;
    };

    egui::Area::new(egui::Id::new("hover_tooltip"))
        .fixed_pos(cursor + egui::vec2(20.0, -30.0))
        .interactable(false)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 230))
                .stroke(Stroke::new(1.0, Color32::from_rgb(255, 215, 0)))
                .inner_margin(6.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.strong(&body.name);
                });
        });
}
