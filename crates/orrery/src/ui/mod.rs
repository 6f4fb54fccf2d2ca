//! egui panels for the viewer
//!
//! Panels only read the scene. Anything they want changed comes back as a
//! [`UiAction`] that the app applies after the egui pass.

mod hud;
mod info_panel;
mod navigation;
mod time_controls;
mod tooltip;

pub use hud::{show_hud, Flight, HudStats};
pub use info_panel::show_info_panel;
pub use navigation::show_navigation;
pub use time_controls::{show_time_controls, SPEED_PRESETS};
pub use tooltip::show_hover_tooltip;

use orrery_core::{CameraError, SceneState, Simulation};

/// Something the user asked for through a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    TransitionTo(String),
    Overview,
    ResetView,
    ToggleTour,
    ToggleOrbit,
    SetTimeScale(f32),
    TogglePause,
    CloseInfo,
}

impl UiAction {
    /// Apply to the simulation. Rejected camera requests are logged and
    /// otherwise ignored.
    pub fn apply(self, sim: &mut Simulation) {
        let result = match self {
            UiAction::TransitionTo(id) => sim.transition_to(&id),
            UiAction::Overview => sim.transition_to_overview(),
            UiAction::ResetView => sim.reset_to_default(),
            UiAction::ToggleTour => {
                if sim.state().controller().is_touring() {
                    sim.stop_tour();
                    Ok(())
                } else {
                    sim.start_tour()
                }
            }
            UiAction::ToggleOrbit => {
                if sim.state().controller().is_orbiting() {
                    sim.stop_orbit();
                    Ok(())
                } else {
                    sim.orbit_current()
                }
            }
            UiAction::SetTimeScale(scale) => {
                sim.set_time_scale(scale);
                Ok(())
            }
            UiAction::TogglePause => {
                sim.toggle_pause();
                Ok(())
            }
            UiAction::CloseInfo => {
                sim.select(None);
                Ok(())
            }
        };

        if let Err(err) = result {
            log_rejection(&err);
        }
    }
}

fn log_rejection(err: &CameraError) {
    match err {
        CameraError::Busy(_) => log::debug!("Camera request ignored: {err}"),
        _ => log::info!("Camera request ignored: {err}"),
    }
}

/// Panel visibility
#[derive(Debug, Clone)]
pub struct UiState {
    pub show_hud: bool,
    pub show_navigation: bool,
    pub show_time_controls: bool,
}

impl UiState {
    pub fn new(show_hud: bool) -> Self {
        Self {
            show_hud,
            show_navigation: true,
            show_time_controls: true,
        }
    }

    pub fn toggle_hud(&mut self) {
        self.show_hud = !self.show_hud;
    }

    pub fn toggle_panels(&mut self) {
        self.show_navigation = !self.show_navigation;
        self.show_time_controls = !self.show_time_controls;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Display name for a preset: the matching body's name, or the id itself.
fn preset_label(state: &SceneState, id: &str) -> String {
    state
        .system()
        .find(id)
        .and_then(|body| state.system().body(body))
        .map(|body| body.name.clone())
        .unwrap_or_else(|| {
            let mut chars = id.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        })
}
