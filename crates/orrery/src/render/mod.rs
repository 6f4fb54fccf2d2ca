//! Rendering: wgpu surface plus the egui-painted scene

mod projection;
mod renderer;
mod scene_painter;

pub use projection::{Projected, Projector};
pub use renderer::Renderer;
pub use scene_painter::paint_scene;
