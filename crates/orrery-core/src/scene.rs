//! Scene state and the simulation that owns it.
//!
//! [`Simulation`] is the single mutable entry point. The render loop calls
//! [`Simulation::tick`] once per frame and the UI goes through the verbs.

use glam::Vec2;

use crate::appearance::{Appearance, Rgb};
use crate::bodies::{build_solar_system, Body, BodyId, SolarSystem};
use crate::camera::{Camera, CameraController, CameraEvent, CameraMode, PresetTable};
use crate::clock::SimClock;
use crate::error::{CameraError, CatalogError};
use crate::facts::{BodyInfo, FactBook};
use crate::lighting::Lighting;
use crate::settings::{CameraSettings, SceneSettings};
use crate::starfield::Starfield;

/// Per-frame input from the render loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Monotonic frame timestamp in milliseconds
    pub now_ms: f64,
    /// Real time since the previous frame in seconds
    pub dt: f32,
}

/// Selected and hovered bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected: Option<BodyId>,
    pub hovered: Option<BodyId>,
}

/// Everything the frame needs, owned in one place.
pub struct SceneState {
    camera: Camera,
    controller: CameraController,
    clock: SimClock,
    system: SolarSystem,
    selection: Selection,
    appearances: Vec<Appearance>,
    starfield: Starfield,
    facts: FactBook,
    lighting: Lighting,
    /// Timestamp of the most recent tick
    now_ms: f64,
}

impl SceneState {
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn facts(&self) -> &FactBook {
        &self.facts
    }

    pub fn lighting(&self) -> Lighting {
        self.lighting
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn appearance(&self, id: BodyId) -> Option<Appearance> {
        self.appearances.get(id.index()).copied()
    }

    /// Bodies still waiting on a texture, with the path to load.
    pub fn pending_textures(&self) -> impl Iterator<Item = (BodyId, &str)> {
        self.system.iter().filter_map(|(id, body, _)| {
            let path = body.texture.as_deref()?;
            self.appearances
                .get(id.index())
                .filter(|appearance| appearance.is_pending())
                .map(|_| (id, path))
        })
    }

    pub fn info(&self, id: BodyId) -> Option<BodyInfo<'_>> {
        self.system.body(id).map(|body| self.facts.describe(body))
    }
}

pub struct Simulation {
    state: SceneState,
}

impl Simulation {
    /// Build the scene with the built-in presets, catalog and fact sheets.
    pub fn new(camera: CameraSettings, scene: SceneSettings) -> Result<Self, CatalogError> {
        let presets = PresetTable::builtin()?;
        let facts = FactBook::builtin()?;
        let system = build_solar_system(&scene)?;
        Ok(Self::with_parts(presets, system, facts, camera, scene))
    }

    pub fn with_parts(
        presets: PresetTable,
        system: SolarSystem,
        facts: FactBook,
        camera_settings: CameraSettings,
        scene: SceneSettings,
    ) -> Self {
        let default_view = presets.default_view();
        let appearances = system
            .iter()
            .map(|(_, body, _)| initial_appearance(body))
            .collect();

        Self {
            state: SceneState {
                camera: Camera::new(default_view.eye, default_view.look_at),
                controller: CameraController::new(presets, camera_settings),
                clock: SimClock::new(scene.initial_time_scale, scene.max_time_scale),
                system,
                selection: Selection::default(),
                appearances,
                starfield: Starfield::from_settings(&scene),
                facts,
                lighting: Lighting::at(0.0),
                now_ms: 0.0,
            },
        }
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Advance one frame: simulated time first, then the camera.
    pub fn tick(&mut self, input: FrameInput) {
        let state = &mut self.state;
        state.now_ms = input.now_ms;

        let t = state.clock.tick(input.dt);
        state.system.update(t);
        state.lighting = Lighting::at(t);

        state
            .controller
            .update(&mut state.camera, input.now_ms, input.dt);
    }

    pub fn transition_to(&mut self, id: &str) -> Result<(), CameraError> {
        let state = &mut self.state;
        state
            .controller
            .transition_to(id, &state.camera, state.now_ms)
    }

    pub fn transition_to_overview(&mut self) -> Result<(), CameraError> {
        let state = &mut self.state;
        state
            .controller
            .transition_to_overview(&state.camera, state.now_ms)
    }

    pub fn reset_to_default(&mut self) -> Result<(), CameraError> {
        let state = &mut self.state;
        state
            .controller
            .reset_to_default(&state.camera, state.now_ms)
    }

    pub fn start_orbit(
        &mut self,
        id: &str,
        radius: f32,
        angular_speed: f32,
    ) -> Result<(), CameraError> {
        self.state.controller.start_orbit(id, radius, angular_speed)
    }

    pub fn orbit_current(&mut self) -> Result<(), CameraError> {
        self.state.controller.orbit_current()
    }

    pub fn stop_orbit(&mut self) {
        self.state.controller.stop_orbit();
    }

    pub fn start_tour(&mut self) -> Result<(), CameraError> {
        let state = &mut self.state;
        state.controller.start_tour(&state.camera, state.now_ms)
    }

    pub fn stop_tour(&mut self) {
        self.state.controller.stop_tour();
    }

    pub fn lock_camera(&mut self) {
        self.state.controller.lock_camera();
    }

    pub fn unlock_camera(&mut self) {
        self.state.controller.unlock_camera();
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.state.clock.set_time_scale(scale);
    }

    pub fn pause(&mut self) {
        self.state.clock.pause();
    }

    pub fn resume(&mut self) {
        self.state.clock.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.state.clock.toggle_pause();
    }

    /// Select a body for the detail panel, or clear the selection.
    ///
    /// Returns `false` for ids that do not name a body.
    pub fn select(&mut self, id: Option<BodyId>) -> bool {
        if !self.is_known(id) {
            log::warn!("Ignoring selection of unknown body {id:?}");
            return false;
        }
        if let Some(body) = id.and_then(|id| self.state.system.body(id)) {
            log::debug!("Selected {}", body.name);
        }
        self.state.selection.selected = id;
        true
    }

    pub fn hover(&mut self, id: Option<BodyId>) -> bool {
        if !self.is_known(id) {
            return false;
        }
        self.state.selection.hovered = id;
        true
    }

    fn is_known(&self, id: Option<BodyId>) -> bool {
        id.is_none_or(|id| self.state.system.body(id).is_some())
    }

    /// Pointer offset from the viewport center, for free-look.
    pub fn pointer_moved(&mut self, offset: Vec2) {
        self.state.controller.pointer_moved(offset);
    }

    pub fn zoom(&mut self, steps: f32) -> bool {
        let state = &mut self.state;
        state.controller.zoom(&mut state.camera, steps)
    }

    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        self.state.controller.drain_events()
    }

    /// Settle a body's texture load. Failures fall back to the catalog
    /// colour and are logged here; they never reach the caller.
    pub fn resolve_appearance<E: std::fmt::Display>(&mut self, id: BodyId, outcome: Result<Rgb, E>) {
        let Some(appearance) = self.state.appearances.get_mut(id.index()) else {
            log::warn!("Texture resolved for unknown body {id:?}");
            return;
        };
        if let Err(err) = appearance.resolve(outcome) {
            let name = self
                .state
                .system
                .body(id)
                .map_or("?", |body| body.name.as_str());
            log::error!("Texture for {name} failed, using fallback colour: {err}");
        }
    }

    /// Settle the sky backdrop texture. On failure only the point stars remain.
    pub fn resolve_backdrop<E: std::fmt::Display>(&mut self, outcome: Result<Rgb, E>) {
        if let Err(err) = self.state.starfield.resolve(outcome) {
            log::error!("Star map failed, using point stars only: {err}");
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.state.camera
    }

    pub fn mode(&self) -> &CameraMode {
        self.state.controller.mode()
    }
}

fn initial_appearance(body: &Body) -> Appearance {
    if body.texture.is_some() {
        Appearance::Pending {
            fallback: body.colour,
        }
    } else {
        Appearance::Fallback {
            colour: body.colour,
        }
    }
}
