//! Detail panel for the selected body

use egui::{Align2, Color32, RichText};
use orrery_core::facts::BodyInfo;
use orrery_core::SceneState;

use super::UiAction;

const HEADING_COLOUR: Color32 = Color32::from_rgb(255, 215, 0);

pub fn show_info_panel(ctx: &egui::Context, state: &SceneState, actions: &mut Vec<UiAction>) {
    let Some(id) = state.selection().selected else {
        return;
    };
    let Some(info) = state.info(id) else {
        return;
    };

    let title = match info {
        BodyInfo::Sheet(sheet) => sheet.name.as_str(),
        BodyInfo::Summary { name, .. } => name,
    };

    let mut open = true;
    egui::Window::new(RichText::new(title).color(HEADING_COLOUR))
        .id(egui::Id::new("body_info"))
        .anchor(Align2::RIGHT_CENTER, [-10.0, 0.0])
        .default_width(300.0)
        .resizable(false)
        .collapsible(false)
        .open(&mut open)
        .show(ctx, |ui| match info {
            BodyInfo::Sheet(sheet) => {
                egui::Grid::new("fact_rows")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for (label, value) in sheet.rows() {
                            ui.label(RichText::new(label).strong());
                            ui.label(value);
                            ui.end_row();
                        }
                    });

                if !sheet.facts.is_empty() {
                    ui.separator();
                    ui.label(RichText::new("Did you know?").strong());
                    for fact in &sheet.facts {
                        ui.label(format!("• {fact}"));
                    }
                }
            }
            BodyInfo::Summary {
                kind, description, ..
            } => {
                ui.label(RichText::new(kind).italics());
                ui.label(description);
            }
        });

    if !open {
        actions.push(UiAction::CloseInfo);
    }
}
