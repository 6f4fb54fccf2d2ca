//! Camera navigation: presets, transitions, orbit, guided tour and free-look.

mod controller;
mod events;
mod free_look;
mod orbit;
mod presets;
mod tour;
mod transition;
mod view;

pub use controller::{CameraController, CameraMode};
pub use events::CameraEvent;
pub use free_look::{FreeLook, POINTER_SCALE};
pub use orbit::{OrbitState, ORBIT_HEIGHT};
pub use presets::{CameraPreset, PresetTable, OVERVIEW};
pub use tour::{TourState, TourStep};
pub use transition::{capture_view, TransitionState, ViewTarget};
pub use view::{Camera, ViewPoint};
