//! Orbital time-stepper properties over the full catalog

use glam::Vec3;
use orrery_core::bodies::{build_solar_system, BodyKind, OrbitalMotion};
use orrery_core::{CameraSettings, FrameInput, SceneSettings, SimClock, Simulation};

fn settings() -> SceneSettings {
    SceneSettings {
        asteroid_count: 50,
        kuiper_count: 20,
        ..SceneSettings::default()
    }
}

fn positions(sim: &Simulation) -> Vec<Vec3> {
    sim.state()
        .system()
        .iter()
        .map(|(_, _, transform)| transform.position)
        .collect()
}

#[test]
fn test_pause_freezes_every_body() {
    let mut sim = Simulation::new(CameraSettings::default(), settings()).unwrap();
    sim.tick(FrameInput {
        now_ms: 16.0,
        dt: 0.016,
    });

    sim.set_time_scale(0.0);
    sim.tick(FrameInput {
        now_ms: 32.0,
        dt: 0.016,
    });
    let first = positions(&sim);
    sim.tick(FrameInput {
        now_ms: 532.0,
        dt: 0.5,
    });
    assert_eq!(positions(&sim), first);
}

#[test]
fn test_pause_resume_continues_from_same_time() {
    let mut sim = Simulation::new(CameraSettings::default(), settings()).unwrap();
    sim.tick(FrameInput {
        now_ms: 1000.0,
        dt: 1.0,
    });
    sim.pause();
    sim.tick(FrameInput {
        now_ms: 5000.0,
        dt: 4.0,
    });
    assert_eq!(sim.state().clock().sim_time(), 1.0);

    sim.resume();
    sim.tick(FrameInput {
        now_ms: 6000.0,
        dt: 1.0,
    });
    assert!((sim.state().clock().sim_time() - 2.0).abs() < 1e-9);
}

#[test]
fn test_every_body_is_periodic() {
    let mut system = build_solar_system(&settings()).unwrap();
    let bodies: Vec<_> = system
        .iter()
        .filter(|(_, body, _)| body.parent.is_none() && body.kind != BodyKind::Comet)
        .filter_map(|(id, body, _)| body.motion.period().map(|p| (id, p)))
        .collect();
    assert!(!bodies.is_empty());

    let t = 12.5;
    for (id, period) in bodies {
        system.update(t);
        let a = system.position(id).unwrap();
        system.update(t + period);
        let b = system.position(id).unwrap();
        assert!((a - b).length() < 1e-3, "{id:?}: {a} vs {b}");
    }
}

#[test]
fn test_periodicity_of_single_orbit() {
    let motion = OrbitalMotion::circular(10.0, 0.5);
    let period = std::f64::consts::TAU / 0.5;
    for t in [0.0, 1.0, 77.7] {
        let a = motion.local_position(t);
        let b = motion.local_position(t + period);
        assert!((a - b).length() < 1e-4);
    }
}

#[test]
fn test_scale_change_has_no_jump() {
    let mut sim = Simulation::new(CameraSettings::default(), settings()).unwrap();
    let earth = sim.state().system().find("earth").unwrap();
    sim.tick(FrameInput {
        now_ms: 16.0,
        dt: 0.016,
    });
    let before = sim.state().system().position(earth).unwrap();

    sim.set_time_scale(10.0);
    sim.tick(FrameInput {
        now_ms: 17.0,
        dt: 0.001,
    });
    let after = sim.state().system().position(earth).unwrap();
    // 0.01 simulated seconds at 1 rad/s on a radius of 9
    assert!((after - before).length() < 0.1);
}

#[test]
fn test_satellites_follow_their_primaries() {
    let mut system = build_solar_system(&settings()).unwrap();
    let pairs = [("earth", "moon", 2.0), ("pluto", "charon", 1.5)];

    for step in 0..100 {
        system.update(step as f64 * 0.77);
        for (primary, satellite, distance) in pairs {
            let p = system.position(system.find(primary).unwrap()).unwrap();
            let s = system.position(system.find(satellite).unwrap()).unwrap();
            assert!(((s - p).length() - distance).abs() < 1e-3);
        }
    }
}

#[test]
fn test_comet_tails_point_away_from_sun() {
    let mut system = build_solar_system(&settings()).unwrap();
    system.update(42.0);
    let comets: Vec<_> = system
        .iter()
        .filter(|(_, body, _)| body.kind == BodyKind::Comet)
        .map(|(id, _, _)| id)
        .collect();
    assert_eq!(comets.len(), 3);

    for id in comets {
        let position = system.position(id).unwrap();
        let tail = system.tail_direction(id).unwrap();
        assert!(tail.dot(position) > 0.0);
    }
}

#[test]
fn test_negative_scale_is_clamped() {
    let mut clock = SimClock::default();
    clock.set_time_scale(-1.0);
    clock.tick(5.0);
    assert_eq!(clock.sim_time(), 0.0);
}
