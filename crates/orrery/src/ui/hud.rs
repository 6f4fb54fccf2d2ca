//! HUD overlay

use egui::{Align2, Color32};

/// Stats for the HUD display
pub struct HudStats<'a> {
    pub fps: f32,
    /// Simulated seconds since start
    pub sim_time: f64,
    pub time_scale: f32,
    pub camera_mode: &'a str,
    pub target: Option<&'a str>,
    pub flight: Option<Flight<'a>>,
    pub paused: bool,
}

/// Camera move in progress
pub struct Flight<'a> {
    pub destination: &'a str,
    /// Linear progress in `[0, 1]`
    pub progress: f32,
    pub remaining_ms: f64,
}

impl Flight<'_> {
    pub fn label(&self) -> String {
        format!(
            "Flying to {}: {:.0}% ({:.1}s left)",
            self.destination,
            self.progress * 100.0,
            self.remaining_ms / 1000.0
        )
    }
}

/// Show the HUD overlay
pub fn show_hud(ctx: &egui::Context, stats: &HudStats) {
    egui::Area::new(egui::Id::new("orrery_hud"))
        .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .inner_margin(8.0)
                .outer_margin(0.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(format!("FPS: {:.0}", stats.fps));
                    ui.label(format!(
                        "Sim time: {:.1}s ({}x)",
                        stats.sim_time, stats.time_scale
                    ));
                    ui.label(format!("Camera: {}", stats.camera_mode));
                    if let Some(target) = stats.target {
                        ui.label(format!("Target: {target}"));
                    }
                    if let Some(flight) = &stats.flight {
                        ui.label(flight.label());
                    }
                    if stats.paused {
                        ui.colored_label(Color32::YELLOW, "PAUSED");
                    }
                });
        });
}
