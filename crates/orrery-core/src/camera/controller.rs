//! Camera mode state machine.
//!
//! Exactly one [`CameraMode`] drives the camera on any frame. Requests that
//! conflict with the active mode are refused without touching state.

use std::collections::VecDeque;

use glam::Vec2;

use super::events::CameraEvent;
use super::free_look::{self, FreeLook};
use super::orbit::OrbitState;
use super::presets::{PresetTable, OVERVIEW};
use super::tour::TourState;
use super::transition::{capture_view, TransitionState, ViewTarget};
use super::view::{Camera, ViewPoint};
use crate::error::CameraError;
use crate::settings::CameraSettings;

/// What is moving the camera.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CameraMode {
    /// Pointer free-look, unless the camera is locked
    #[default]
    Free,
    Transitioning(TransitionState),
    Orbiting(OrbitState),
    Touring(TourState),
}

impl CameraMode {
    pub fn name(&self) -> &'static str {
        match self {
            CameraMode::Free => "free",
            CameraMode::Transitioning(_) => "transitioning",
            CameraMode::Orbiting(_) => "orbiting",
            CameraMode::Touring(_) => "touring",
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, CameraMode::Transitioning(_))
    }

    /// The transition currently in flight, including a tour leg.
    pub fn active_transition(&self) -> Option<&TransitionState> {
        match self {
            CameraMode::Transitioning(transition) => Some(transition),
            CameraMode::Touring(tour) => tour.leg(),
            _ => None,
        }
    }

    fn is_moving(&self) -> bool {
        self.active_transition().is_some()
    }
}

pub struct CameraController {
    presets: PresetTable,
    settings: CameraSettings,
    mode: CameraMode,
    /// Set when the camera rests on a named preset. Suppresses free-look.
    locked: bool,
    current_target: Option<String>,
    free_look: FreeLook,
    events: VecDeque<CameraEvent>,
}

impl CameraController {
    pub fn new(presets: PresetTable, settings: CameraSettings) -> Self {
        Self {
            presets,
            settings,
            mode: CameraMode::Free,
            locked: false,
            current_target: None,
            free_look: FreeLook::new(),
            events: VecDeque::new(),
        }
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn mode(&self) -> &CameraMode {
        &self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.mode.is_transitioning()
    }

    pub fn is_orbiting(&self) -> bool {
        matches!(self.mode, CameraMode::Orbiting(_))
    }

    pub fn is_touring(&self) -> bool {
        matches!(self.mode, CameraMode::Touring(_))
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn current_target(&self) -> Option<&str> {
        self.current_target.as_deref()
    }

    /// Begin a transition to a named preset.
    pub fn transition_to(
        &mut self,
        id: &str,
        camera: &Camera,
        now_ms: f64,
    ) -> Result<(), CameraError> {
        let Some(preset) = self.presets.get(id) else {
            log::warn!("Ignoring transition to unknown preset `{id}`");
            return Err(CameraError::UnknownPreset(id.to_string()));
        };
        let destination = preset.view();
        self.begin_transition(ViewTarget::Preset(id.to_string()), destination, camera, now_ms)
    }

    /// Unlock and head to the overview.
    pub fn transition_to_overview(
        &mut self,
        camera: &Camera,
        now_ms: f64,
    ) -> Result<(), CameraError> {
        self.transition_to(OVERVIEW, camera, now_ms)?;
        self.locked = false;
        Ok(())
    }

    /// Head back to the startup view, dropping any lock and target.
    pub fn reset_to_default(&mut self, camera: &Camera, now_ms: f64) -> Result<(), CameraError> {
        let destination = self.presets.default_view();
        self.begin_transition(ViewTarget::Default, destination, camera, now_ms)?;
        self.locked = false;
        self.current_target = None;
        Ok(())
    }

    fn begin_transition(
        &mut self,
        target: ViewTarget,
        destination: ViewPoint,
        camera: &Camera,
        now_ms: f64,
    ) -> Result<(), CameraError> {
        if self.mode.is_moving() {
            log::debug!(
                "Ignoring transition to `{}`: already transitioning",
                target.label()
            );
            return Err(CameraError::Busy("transition in progress"));
        }

        let transition = TransitionState::new(
            target,
            capture_view(camera, self.settings.look_at_capture),
            destination,
            now_ms,
            self.settings.transition_ms,
            self.settings.easing,
        );
        log::info!(
            "Camera transition to `{}` ({} ms)",
            transition.target().label(),
            transition.duration_ms()
        );
        self.set_mode(CameraMode::Transitioning(transition));
        Ok(())
    }

    /// Circle the look-at point of preset `id`.
    pub fn start_orbit(&mut self, id: &str, radius: f32, angular_speed: f32) -> Result<(), CameraError> {
        match self.mode {
            CameraMode::Transitioning(_) => {
                log::debug!("Ignoring orbit of `{id}`: transition in progress");
                return Err(CameraError::Busy("transition in progress"));
            }
            CameraMode::Touring(_) => {
                log::debug!("Ignoring orbit of `{id}`: tour in progress");
                return Err(CameraError::Busy("tour in progress"));
            }
            CameraMode::Free | CameraMode::Orbiting(_) => {}
        }
        let Some(preset) = self.presets.get(id) else {
            log::warn!("Ignoring orbit of unknown preset `{id}`");
            return Err(CameraError::UnknownPreset(id.to_string()));
        };

        let orbit = OrbitState::new(id, preset.look_at, radius, angular_speed);
        log::info!("Camera orbiting `{id}` (radius {radius}, {angular_speed} rad/s)");
        self.set_mode(CameraMode::Orbiting(orbit));
        Ok(())
    }

    /// Orbit the current target with the configured radius and speed.
    pub fn orbit_current(&mut self) -> Result<(), CameraError> {
        let Some(id) = self.current_target.clone() else {
            log::debug!("Ignoring orbit request: no current target");
            return Err(CameraError::NoTarget);
        };
        self.start_orbit(&id, self.settings.orbit_radius, self.settings.orbit_speed)
    }

    /// Leave the camera where the orbit last put it.
    pub fn stop_orbit(&mut self) {
        if self.is_orbiting() {
            self.set_mode(CameraMode::Free);
        }
    }

    pub fn start_tour(&mut self, camera: &Camera, now_ms: f64) -> Result<(), CameraError> {
        match self.mode {
            CameraMode::Transitioning(_) => {
                log::debug!("Ignoring tour start: transition in progress");
                return Err(CameraError::Busy("transition in progress"));
            }
            CameraMode::Touring(_) => {
                log::debug!("Ignoring tour start: tour already running");
                return Err(CameraError::Busy("tour already running"));
            }
            CameraMode::Free | CameraMode::Orbiting(_) => {}
        }
        if self.presets.tour().is_empty() {
            return Err(CameraError::EmptyTour);
        }

        let tour = TourState::new(
            self.presets.tour().to_vec(),
            self.settings.tour_dwell_ms,
            now_ms,
        );
        log::info!("Guided tour started ({} stops)", tour.playlist().len());
        self.set_mode(CameraMode::Touring(tour));
        self.advance_tour(camera, now_ms);
        Ok(())
    }

    /// End the tour. A leg in flight keeps going as a plain transition.
    pub fn stop_tour(&mut self) {
        if !self.is_touring() {
            return;
        }
        let CameraMode::Touring(tour) = std::mem::take(&mut self.mode) else {
            return;
        };
        log::info!("Guided tour stopped");
        match tour.into_leg() {
            Some(leg) => self.set_mode(CameraMode::Transitioning(leg)),
            None => self.set_mode(CameraMode::Free),
        }
    }

    pub fn lock_camera(&mut self) {
        self.locked = true;
    }

    pub fn unlock_camera(&mut self) {
        self.locked = false;
        self.current_target = None;
    }

    /// Pointer offset from the viewport center, see [`FreeLook::offset_from_pixels`].
    pub fn pointer_moved(&mut self, offset: Vec2) {
        self.free_look.pointer_moved(offset);
    }

    /// Wheel zoom. Only the unlocked free camera zooms; returns whether
    /// the camera moved.
    pub fn zoom(&self, camera: &mut Camera, steps: f32) -> bool {
        if self.locked || !matches!(self.mode, CameraMode::Free) {
            return false;
        }
        free_look::zoom(camera, steps, &self.settings)
    }

    /// Drive the camera for one frame.
    ///
    /// `now_ms` is the frame timestamp in milliseconds, `dt` the real frame
    /// delta in seconds.
    pub fn update(&mut self, camera: &mut Camera, now_ms: f64, dt: f32) {
        match &mut self.mode {
            CameraMode::Free => {
                if !self.locked {
                    self.free_look.apply(camera, dt, &self.settings);
                }
            }
            CameraMode::Transitioning(transition) => {
                if transition.apply(camera, now_ms) {
                    let target = transition.target().clone();
                    self.set_mode(CameraMode::Free);
                    self.arrive(target);
                }
            }
            CameraMode::Orbiting(orbit) => {
                orbit.advance(dt);
                orbit.apply(camera);
            }
            CameraMode::Touring(tour) => {
                let arrived = tour.leg().is_some_and(|leg| leg.apply(camera, now_ms));
                if arrived {
                    if let Some(leg) = tour.take_leg() {
                        self.arrive(leg.target().clone());
                    }
                }
                self.advance_tour(camera, now_ms);
            }
        }
    }

    fn advance_tour(&mut self, camera: &Camera, now_ms: f64) {
        let CameraMode::Touring(tour) = &mut self.mode else {
            return;
        };
        if !tour.due(now_ms) {
            return;
        }
        if let Some(step) = tour.step(camera, &self.presets, &self.settings, now_ms) {
            log::debug!("Tour leg {} -> `{}`", step.index, step.preset_id);
            self.events.push_back(CameraEvent::TourAdvanced {
                preset_id: step.preset_id,
                index: step.index,
            });
        }
    }

    /// Bookkeeping for a finished transition.
    fn arrive(&mut self, target: ViewTarget) {
        self.locked = target.locks();
        self.current_target = target.preset_id().map(str::to_string);
        log::debug!(
            "Camera arrived at `{}` (locked: {})",
            target.label(),
            self.locked
        );
        self.events
            .push_back(CameraEvent::TransitionCompleted { target });
    }

    /// Take every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        self.events.drain(..).collect()
    }

    fn set_mode(&mut self, mode: CameraMode) {
        if self.mode.name() != mode.name() {
            log::debug!("Camera mode {} -> {}", self.mode.name(), mode.name());
        }
        self.free_look.clear();
        self.mode = mode;
    }
}
