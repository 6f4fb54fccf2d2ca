use glam::{Affine3A, Vec3};

use super::motion::OrbitalMotion;
use crate::appearance::Rgb;

/// Index of a body in its [`SolarSystem`](super::SolarSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Asteroid,
    KuiperObject,
    Comet,
}

impl BodyKind {
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::DwarfPlanet => "Dwarf Planet",
            BodyKind::Moon => "Moon",
            BodyKind::Asteroid => "Asteroid",
            BodyKind::KuiperObject => "Kuiper Belt Object",
            BodyKind::Comet => "Comet",
        }
    }

    /// Belt members are numerous and tiny; the UI skips them for hover labels.
    pub fn is_belt_member(self) -> bool {
        matches!(self, BodyKind::Asteroid | BodyKind::KuiperObject)
    }
}

/// Flat ring system in the body's equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rings {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub colour: Rgb,
}

/// Cloud shell rotating independently of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clouds {
    /// Shell radius as a multiple of the body size
    pub scale: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
}

/// Thin glowing shell around the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Shell radius as a multiple of the body size
    pub scale: f32,
    pub colour: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Stable lookup key, e.g. `"earth"` or `"asteroid_17"`
    pub key: String,
    pub name: String,
    pub kind: BodyKind,
    /// Sphere radius in scene units
    pub size: f32,
    pub motion: OrbitalMotion,
    /// Self-rotation in radians per simulated second
    pub rotation_speed: f32,
    pub parent: Option<BodyId>,
    pub colour: Rgb,
    /// One-line catalog description
    pub description: String,
    /// Texture to request, relative to the asset root
    pub texture: Option<String>,
    pub rings: Option<Rings>,
    pub clouds: Option<Clouds>,
    pub atmosphere: Option<Atmosphere>,
}

impl Body {
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: BodyKind, size: f32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            size,
            motion: OrbitalMotion::STATIONARY,
            rotation_speed: 0.0,
            parent: None,
            colour: Rgb::WHITE,
            description: String::new(),
            texture: None,
            rings: None,
            clouds: None,
            atmosphere: None,
        }
    }

    pub fn with_motion(mut self, motion: OrbitalMotion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_rotation(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_colour(mut self, colour: Rgb) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture = Some(path.into());
        self
    }

    pub fn with_rings(mut self, rings: Rings) -> Self {
        self.rings = Some(rings);
        self
    }

    pub fn with_clouds(mut self, clouds: Clouds) -> Self {
        self.clouds = Some(clouds);
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }
}

/// Where a body is this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// Orbit frame in world space, without self-rotation
    pub frame: Affine3A,
    /// World-space center
    pub position: Vec3,
    /// Orbital angle relative to the parent, `[0, 2π)`
    pub orbit_angle: f32,
    /// Self-rotation about +Y, `[0, 2π)`
    pub spin: f32,
}

impl Default for BodyTransform {
    fn default() -> Self {
        Self {
            frame: Affine3A::IDENTITY,
            position: Vec3::ZERO,
            orbit_angle: 0.0,
            spin: 0.0,
        }
    }
}

impl BodyTransform {
    /// Full world transform including self-rotation.
    pub fn world(&self) -> Affine3A {
        self.frame * Affine3A::from_rotation_y(self.spin)
    }
}
