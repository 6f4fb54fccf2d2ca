//! Named bodies and the full scene layout.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::belts::{comets, ASTEROID_BELT, KUIPER_BELT};
use super::body::{Atmosphere, Body, BodyId, BodyKind, Clouds, Rings};
use super::motion::OrbitalMotion;
use super::system::SolarSystem;
use crate::appearance::Rgb;
use crate::error::CatalogError;
use crate::settings::SceneSettings;

/// A body orbiting the Sun directly.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub size: f32,
    pub distance: f32,
    /// Orbital speed in rad/s
    pub speed: f32,
    pub colour: u32,
    pub info: &'static str,
}

pub const SUN_SIZE: f32 = 2.5;
pub const SUN_ROTATION: f32 = 0.5;

#[rustfmt::skip]
pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { key: "mercury", name: "Mercury", size: 0.4, distance: 5.0, speed: 4.0, colour: 0x8c7853, info: "Closest to the Sun, fastest orbit" },
    PlanetSpec { key: "venus", name: "Venus", size: 0.6, distance: 7.0, speed: 1.6, colour: 0xffc649, info: "Hottest planet, thick atmosphere" },
    PlanetSpec { key: "earth", name: "Earth", size: 0.7, distance: 9.0, speed: 1.0, colour: 0x4a90e2, info: "Our home planet, has water and life" },
    PlanetSpec { key: "mars", name: "Mars", size: 0.5, distance: 12.0, speed: 0.5, colour: 0xcd5c5c, info: "The Red Planet, has polar ice caps" },
    PlanetSpec { key: "jupiter", name: "Jupiter", size: 1.8, distance: 16.0, speed: 0.2, colour: 0xd8ca9d, info: "Largest planet, has Great Red Spot" },
    PlanetSpec { key: "saturn", name: "Saturn", size: 1.5, distance: 20.0, speed: 0.1, colour: 0xfad5a5, info: "Has beautiful rings" },
    PlanetSpec { key: "uranus", name: "Uranus", size: 1.0, distance: 24.0, speed: 0.05, colour: 0x4fd0e4, info: "Ice giant, rotates on its side" },
    PlanetSpec { key: "neptune", name: "Neptune", size: 1.0, distance: 28.0, speed: 0.03, colour: 0x4b70dd, info: "Windiest planet, deep blue color" },
];

#[rustfmt::skip]
pub const DWARF_PLANETS: [PlanetSpec; 5] = [
    PlanetSpec { key: "pluto", name: "Pluto", size: 0.3, distance: 32.0, speed: 0.02, colour: 0xc0c0c0, info: "Former 9th planet, now classified as dwarf planet" },
    PlanetSpec { key: "ceres", name: "Ceres", size: 0.15, distance: 14.0, speed: 0.3, colour: 0x8c7853, info: "Largest object in asteroid belt" },
    PlanetSpec { key: "eris", name: "Eris", size: 0.32, distance: 45.0, speed: 0.015, colour: 0xf0f0f0, info: "Most massive dwarf planet, beyond Pluto" },
    PlanetSpec { key: "makemake", name: "Makemake", size: 0.2, distance: 38.0, speed: 0.018, colour: 0xd2691e, info: "Kuiper belt object with no known moons" },
    PlanetSpec { key: "haumea", name: "Haumea", size: 0.25, distance: 35.0, speed: 0.019, colour: 0xffd700, info: "Elongated dwarf planet with rings" },
];

/// Planets spin this many times faster than they orbit.
const PLANET_SPIN_FACTOR: f32 = 10.0;
const DWARF_SPIN_FACTOR: f32 = 5.0;

const MOON_DISTANCE: f32 = 2.0;
const MOON_SPEED: f32 = 8.0;
const CHARON_DISTANCE: f32 = 1.5;
const CHARON_SPEED_FACTOR: f32 = 10.0;

fn texture_path(key: &str) -> String {
    format!("textures/{key}.jpg")
}

fn planet(spec: &PlanetSpec, kind: BodyKind, spin_factor: f32) -> Body {
    Body::new(spec.key, spec.name, kind, spec.size)
        .with_motion(OrbitalMotion::circular(spec.distance, spec.speed))
        .with_rotation(spec.speed * spin_factor)
        .with_colour(Rgb::from_hex(spec.colour))
        .with_description(spec.info)
}

/// Build the complete scene: Sun, planets and moons, dwarf planets, comets
/// and both belts. Belt and comet placement is seeded from `settings`.
pub fn build_solar_system(settings: &SceneSettings) -> Result<SolarSystem, CatalogError> {
    let mut bodies = Vec::with_capacity(
        1 + PLANETS.len() + 2 + DWARF_PLANETS.len()
            + settings.comet_count
            + settings.asteroid_count
            + settings.kuiper_count,
    );
    let next_id = |bodies: &[Body]| BodyId(bodies.len() as u32);

    bodies.push(
        Body::new("sun", "Sun", BodyKind::Star, SUN_SIZE)
            .with_rotation(SUN_ROTATION)
            .with_colour(Rgb::from_hex(0xffd700))
            .with_description("The center of our solar system, a massive star")
            .with_texture(texture_path("sun")),
    );

    for spec in &PLANETS {
        let parent = next_id(&bodies);
        let mut body = planet(spec, BodyKind::Planet, PLANET_SPIN_FACTOR)
            .with_texture(texture_path(spec.key));
        match spec.key {
            "earth" => {
                body = body
                    .with_clouds(Clouds {
                        scale: 1.01,
                        rotation_speed: 1.2,
                        opacity: 0.3,
                    })
                    .with_atmosphere(Atmosphere {
                        scale: 1.1,
                        colour: Rgb([77, 153, 255]),
                    });
            }
            "saturn" => {
                body = body.with_rings(Rings {
                    inner_radius: spec.size * 1.3,
                    outer_radius: spec.size * 2.0,
                    colour: Rgb::from_hex(0xd2b48c),
                });
            }
            _ => {}
        }
        bodies.push(body);

        if spec.key == "earth" {
            // Tidally locked: spins once per orbit
            bodies.push(
                Body::new("moon", "Moon", BodyKind::Moon, 0.5)
                    .with_motion(OrbitalMotion::circular(MOON_DISTANCE, MOON_SPEED))
                    .with_rotation(MOON_SPEED)
                    .with_parent(parent)
                    .with_colour(Rgb::from_hex(0xc0c0c0))
                    .with_description("Earth's natural satellite, formed 4.5 billion years ago")
                    .with_texture(texture_path("moon")),
            );
        }
    }

    for spec in &DWARF_PLANETS {
        let parent = next_id(&bodies);
        bodies.push(planet(spec, BodyKind::DwarfPlanet, DWARF_SPIN_FACTOR));

        if spec.key == "pluto" {
            bodies.push(
                Body::new("charon", "Charon", BodyKind::Moon, 0.12)
                    .with_motion(OrbitalMotion::circular(
                        CHARON_DISTANCE,
                        spec.speed * CHARON_SPEED_FACTOR,
                    ))
                    .with_parent(parent)
                    .with_colour(Rgb::from_hex(0x696969))
                    .with_description("Pluto's largest moon, unusually large relative to Pluto"),
            );
        }
    }

    let mut rng = Xoshiro256StarStar::seed_from_u64(settings.seed);
    bodies.extend(comets(settings.comet_count, &mut rng));
    bodies.extend(
        ASTEROID_BELT
            .with_count(settings.asteroid_count)
            .populate(&mut rng),
    );
    bodies.extend(KUIPER_BELT.with_count(settings.kuiper_count).populate(&mut rng));

    let system = SolarSystem::new(bodies)?;
    log::info!(
        "Built solar system: {} bodies ({} asteroids, {} Kuiper belt objects, {} comets)",
        system.len(),
        settings.asteroid_count,
        settings.kuiper_count,
        settings.comet_count
    );
    Ok(system)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn small_settings() -> SceneSettings {
        SceneSettings {
            asteroid_count: 10,
            kuiper_count: 5,
            ..SceneSettings::default()
        }
    }

    #[test]
    fn test_default_population() {
        let system = build_solar_system(&SceneSettings::default()).unwrap();
        // Sun, 8 planets, Moon, 5 dwarfs, Charon, 3 comets, 800 + 200 belt members
        assert_eq!(system.len(), 1 + 8 + 1 + 5 + 1 + 3 + 800 + 200);
    }

    #[test]
    fn test_named_bodies_present() {
        let system = build_solar_system(&small_settings()).unwrap();
        for key in ["sun", "mercury", "earth", "moon", "saturn", "pluto", "charon", "haumea"] {
            assert!(system.find(key).is_some(), "{key} missing");
        }
        let saturn = system.body(system.find("saturn").unwrap()).unwrap();
        let rings = saturn.rings.unwrap();
        assert!((rings.inner_radius - 1.95).abs() < 1e-5);
        assert!((rings.outer_radius - 3.0).abs() < 1e-5);

        let earth = system.body(system.find("earth").unwrap()).unwrap();
        assert_eq!(earth.rotation_speed, 10.0);
        assert_eq!(earth.clouds.unwrap().rotation_speed, 1.2);
        assert_eq!(earth.atmosphere.unwrap().scale, 1.1);
        let mars = system.body(system.find("mars").unwrap()).unwrap();
        assert!(mars.atmosphere.is_none());
    }

    #[test]
    fn test_satellites_have_parents() {
        let system = build_solar_system(&small_settings()).unwrap();
        let moon = system.body(system.find("moon").unwrap()).unwrap();
        assert_eq!(moon.parent, system.find("earth"));
        let charon = system.body(system.find("charon").unwrap()).unwrap();
        assert_eq!(charon.parent, system.find("pluto"));
        assert!((charon.motion.angular_speed - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_initial_layout_on_x_axis() {
        let system = build_solar_system(&small_settings()).unwrap();
        let mars = system.position(system.find("mars").unwrap()).unwrap();
        assert!((mars - Vec3::new(12.0, 0.0, 0.0)).length() < 1e-5);
        let moon = system.position(system.find("moon").unwrap()).unwrap();
        assert!((moon - Vec3::new(11.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_seed_controls_belts() {
        let a = build_solar_system(&small_settings()).unwrap();
        let b = build_solar_system(&small_settings()).unwrap();
        let key = "asteroid_4";
        assert_eq!(
            a.position(a.find(key).unwrap()),
            b.position(b.find(key).unwrap())
        );

        let other = build_solar_system(&SceneSettings {
            seed: 1,
            ..small_settings()
        })
        .unwrap();
        assert_ne!(
            a.position(a.find(key).unwrap()),
            other.position(other.find(key).unwrap())
        );
    }
}
