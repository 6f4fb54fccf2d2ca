//! Celestial bodies and the orbital time-stepper.

mod belts;
mod body;
mod catalog;
mod motion;
mod rng;
mod system;

pub use belts::{comets, BeltSpec, ASTEROID_BELT, KUIPER_BELT};
pub use body::{Atmosphere, Body, BodyId, BodyKind, BodyTransform, Clouds, Rings};
pub use catalog::{build_solar_system, PlanetSpec, DWARF_PLANETS, PLANETS, SUN_ROTATION, SUN_SIZE};
pub use motion::{spin_angle, Elevation, OrbitalMotion};
pub use rng::SceneRng;
pub use system::{SolarSystem, ORBIT_PATH_SEGMENTS};
