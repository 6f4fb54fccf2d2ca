//! Core of the Orrery solar system viewer: camera navigation between named
//! viewpoints and a closed-form orbital time-stepper. No GPU or windowing.

pub mod animation;
pub mod appearance;
pub mod bodies;
pub mod camera;
pub mod clock;
pub mod error;
pub mod facts;
pub mod lighting;
pub mod scene;
pub mod settings;
pub mod starfield;

pub use appearance::{Appearance, Rgb};
pub use bodies::{Body, BodyId, BodyKind, SolarSystem};
pub use camera::{Camera, CameraController, CameraEvent, CameraMode, ViewTarget};
pub use clock::SimClock;
pub use error::{CameraError, CatalogError};
pub use scene::{FrameInput, SceneState, Selection, Simulation};
pub use settings::{CameraSettings, LookAtCapture, SceneSettings};
pub use starfield::Starfield;
