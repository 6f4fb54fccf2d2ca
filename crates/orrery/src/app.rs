//! Application state and event loop

use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec2;
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use orrery_core::camera::FreeLook;
use orrery_core::{CameraEvent, FrameInput, Simulation};

use crate::config::OrreryConfig;
use crate::picking::{pick, PickTarget, Ray};
use crate::render::{paint_scene, Projector, Renderer};
use crate::textures::{self, TextureLoader};
use crate::ui::{
    show_hover_tooltip, show_hud, show_info_panel, show_navigation, show_time_controls, Flight,
    HudStats, UiAction, UiState,
};

/// Longest frame delta fed to the simulation, so a stalled window does not
/// fling every body forward at once.
const MAX_FRAME_DT: f32 = 0.25;

/// Main application state
pub struct App {
    // Window and rendering
    window: Arc<Window>,
    renderer: Renderer,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,

    // Simulation
    sim: Simulation,
    textures: TextureLoader,

    ui_state: UiState,

    /// Cursor in physical pixels
    cursor: Option<Vec2>,

    // Timing
    started: Instant,
    last_frame: Instant,
    frame_count: u64,
    fps_update_time: Instant,
    fps: f32,
}

impl App {
    pub async fn new(config: OrreryConfig) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new()?;

        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let web_window =
                web_sys::window().ok_or_else(|| anyhow::anyhow!("Failed to get web window"))?;
            let document = web_window
                .document()
                .ok_or_else(|| anyhow::anyhow!("Failed to get document"))?;
            let canvas = document
                .get_element_by_id("canvas")
                .ok_or_else(|| anyhow::anyhow!("Failed to find canvas element with id='canvas'"))?
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .map_err(|_| anyhow::anyhow!("Element 'canvas' is not an HTMLCanvasElement"))?;

            log::info!("Found canvas element, binding to window");

            WindowAttributes::default()
                .with_title("Orrery")
                .with_canvas(Some(canvas))
        };

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = WindowAttributes::default()
            .with_title("Orrery")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.ui.window_width,
                config.ui.window_height,
            ));

        // The surface and renderer are built before the loop starts, so the
        // window has to exist before `resumed`. EventLoop::create_window is
        // deprecated in winit 0.30 but still supported.
        #[allow(deprecated)]
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = Renderer::new(window.clone()).await?;

        let sim = Simulation::new(config.camera.clone(), config.scene_settings())
            .context("Failed to build the solar system")?;
        log::info!("Scene ready with {} bodies", sim.state().system().len());

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let now = Instant::now();
        Ok((
            Self {
                window,
                renderer,
                egui_ctx,
                egui_state,
                sim,
                textures: TextureLoader::default(),
                ui_state: UiState::new(config.ui.show_hud),
                cursor: None,
                started: now,
                last_frame: now,
                frame_count: 0,
                fps_update_time: now,
                fps: 0.0,
            },
            event_loop,
        ))
    }

    /// Run the event loop
    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    fn viewport(&self) -> Vec2 {
        let size = self.renderer.size();
        Vec2::new(size.width as f32, size.height as f32)
    }

    /// Advance the simulation by one frame
    fn update(&mut self) {
        let now = Instant::now();

        self.frame_count += 1;
        if now.duration_since(self.fps_update_time).as_secs_f32() >= 1.0 {
            self.fps = self.frame_count as f32;
            self.frame_count = 0;
            self.fps_update_time = now;
        }

        let dt = now
            .duration_since(self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame = now;

        self.sim.tick(FrameInput {
            now_ms: now.duration_since(self.started).as_secs_f64() * 1000.0,
            dt,
        });

        for event in self.sim.drain_events() {
            match event {
                CameraEvent::TransitionCompleted { target } => {
                    log::info!("Arrived at {}", target.label());
                }
                CameraEvent::TourAdvanced { preset_id, index } => {
                    log::info!("Tour stop {}: {preset_id}", index + 1);
                }
            }
        }

        textures::resolve_next(&mut self.sim, &self.textures);
    }

    /// Render frame
    fn render(&mut self) -> Result<()> {
        let fps = self.fps;
        let pixels_per_point = self.egui_ctx.pixels_per_point();
        let cursor = self
            .cursor
            .map(|c| egui::pos2(c.x / pixels_per_point, c.y / pixels_per_point));
        let mut actions = Vec::new();

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let mut full_output = self.egui_ctx.run(raw_input, |ctx| {
            let state = self.sim.state();

            let painter = ctx.layer_painter(egui::LayerId::background());
            let projector = Projector::new(state.camera(), ctx.content_rect());
            paint_scene(&painter, state, &projector);

            if self.ui_state.show_navigation {
                show_navigation(ctx, state, &mut actions);
            }
            if self.ui_state.show_time_controls {
                show_time_controls(ctx, state, &mut actions);
            }
            show_info_panel(ctx, state, &mut actions);
            show_hover_tooltip(ctx, state, cursor);

            if self.ui_state.show_hud {
                let controller = state.controller();
                let now_ms = state.now_ms();
                let flight = controller.mode().active_transition().map(|leg| Flight {
                    destination: leg.target().label(),
                    progress: leg.progress(now_ms),
                    remaining_ms: leg.remaining_ms(now_ms),
                });
                let stats = HudStats {
                    fps,
                    sim_time: state.clock().sim_time(),
                    time_scale: state.clock().time_scale(),
                    camera_mode: controller.mode().name(),
                    target: controller.current_target(),
                    flight,
                    paused: state.clock().is_paused(),
                };
                show_hud(ctx, &stats);
            }
        });

        let platform_output = std::mem::take(&mut full_output.platform_output);
        self.egui_state
            .handle_platform_output(&self.window, platform_output);
        self.renderer.render(full_output, &self.egui_ctx)?;

        for action in actions {
            action.apply(&mut self.sim);
        }
        Ok(())
    }

    fn pick_at(&self, cursor: Vec2, target: PickTarget) -> Option<orrery_core::BodyId> {
        let ray = Ray::from_screen(self.sim.camera(), cursor, self.viewport())?;
        pick(self.sim.state().system(), &ray, target)
    }

    fn cursor_moved(&mut self, cursor: Vec2) {
        self.cursor = Some(cursor);
        self.sim
            .pointer_moved(FreeLook::offset_from_pixels(cursor, self.viewport()));
        let hovered = self.pick_at(cursor, PickTarget::Hover);
        self.sim.hover(hovered);
    }

    fn clicked(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        // Clicking empty space closes the detail panel
        let hit = self.pick_at(cursor, PickTarget::Select);
        self.sim.select(hit);
    }

    fn key_pressed(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        let action = match key {
            KeyCode::Space => Some(UiAction::TogglePause),
            KeyCode::KeyO => Some(UiAction::Overview),
            KeyCode::KeyR => Some(UiAction::ResetView),
            KeyCode::KeyT => Some(UiAction::ToggleTour),
            KeyCode::KeyF => Some(UiAction::ToggleOrbit),
            KeyCode::KeyH => {
                self.ui_state.toggle_hud();
                None
            }
            KeyCode::Tab => {
                self.ui_state.toggle_panels();
                None
            }
            KeyCode::Escape => {
                event_loop.exit();
                None
            }
            _ => None,
        };
        if let Some(action) = action {
            action.apply(&mut self.sim);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        self.window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle events first
        let egui_response = self.egui_state.on_window_event(&self.window, &event);
        if egui_response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Err(e) = self.render() {
                    log::error!("Render error: {e:#}");
                }
                self.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.sim.hover(None);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.clicked();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                // One fixed step per notch; scrolling up moves in
                if scroll != 0.0 {
                    self.sim.zoom(scroll.signum());
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && let PhysicalKey::Code(key) = event.physical_key
                {
                    self.key_pressed(key, event_loop);
                }
            }
            _ => {}
        }
    }
}
