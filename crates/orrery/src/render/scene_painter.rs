//! Draws the solar system into an egui painter
//!
//! Bodies are shaded discs sorted back to front, over a backdrop of point
//! stars. Orbit paths, Saturn's rings, Earth's cloud shell and atmosphere,
//! comet tails and the sun glow are layered on with simple strokes.

use egui::{Color32, Painter, Shape, Stroke};
use glam::Vec3;
use orrery_core::bodies::ORBIT_PATH_SEGMENTS;
use orrery_core::{Body, BodyId, BodyKind, Rgb, SceneState};

use super::projection::{Projected, Projector};

const ORBIT_COLOUR: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 77);
const SELECTED_COLOUR: Color32 = Color32::from_rgb(255, 215, 0);
const TAIL_COLOUR: [u8; 3] = [204, 204, 255];
const STAR_RADIUS: f32 = 0.8;
const STAR_ALPHA: f32 = 0.85;
/// Atmosphere halo opacity at the body's limb
const ATMOSPHERE_ALPHA: f32 = 0.35;

const TAIL_POINTS: usize = 50;
const TAIL_SPACING: f32 = 0.2;
const TAIL_POINT_SIZE: f32 = 0.1;

/// Rings are drawn as this many concentric bands.
const RING_BANDS: usize = 4;
const RING_SEGMENTS: usize = 48;

/// Keep belt members visible as specks at any distance.
const MIN_BELT_RADIUS: f32 = 0.75;
const MIN_BODY_RADIUS: f32 = 1.5;

fn to_colour32(rgb: Rgb, brightness: f32) -> Color32 {
    let [r, g, b] = rgb.0.map(|c| (c as f32 * brightness).round().clamp(0.0, 255.0) as u8);
    Color32::from_rgb(r, g, b)
}

fn with_alpha(rgb: [u8; 3], alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

struct DrawItem<'a> {
    id: BodyId,
    body: &'a Body,
    world: Vec3,
    screen: Projected,
}

/// Paint the whole scene for this frame.
pub fn paint_scene(painter: &Painter, state: &SceneState, projector: &Projector) {
    paint_starfield(painter, state, projector);
    paint_orbit_paths(painter, state, projector);

    let mut items: Vec<DrawItem> = state
        .system()
        .iter()
        .filter_map(|(id, body, transform)| {
            projector.project(transform.position).map(|screen| DrawItem {
                id,
                body,
                world: transform.position,
                screen,
            })
        })
        .collect();
    // Far to near
    items.sort_by(|a, b| b.screen.depth.total_cmp(&a.screen.depth));

    let selection = state.selection();
    for item in &items {
        paint_body(painter, state, projector, item);

        let radius = projector.screen_radius(item.body.size, item.screen.depth);
        if selection.selected == Some(item.id) {
            painter.circle_stroke(item.screen.pos, radius + 3.0, Stroke::new(1.5, SELECTED_COLOUR));
        } else if selection.hovered == Some(item.id) {
            painter.circle_stroke(item.screen.pos, radius + 2.0, Stroke::new(1.0, Color32::WHITE));
        }
    }
}

fn paint_starfield(painter: &Painter, state: &SceneState, projector: &Projector) {
    let starfield = state.starfield();
    if let Some(tint) = starfield.sky_tint() {
        painter.rect_filled(projector.viewport(), 0.0, to_colour32(tint, 1.0));
    }

    let colour = with_alpha([255, 255, 255], STAR_ALPHA);
    let stars = starfield
        .stars()
        .iter()
        .filter_map(|star| projector.project(*star))
        .map(|p| Shape::circle_filled(p.pos, STAR_RADIUS, colour));
    painter.extend(stars);
}

fn paint_orbit_paths(painter: &Painter, state: &SceneState, projector: &Projector) {
    let system = state.system();
    let orbiting_sun = system.iter().filter(|(_, body, _)| {
        body.parent.is_none() && matches!(body.kind, BodyKind::Planet | BodyKind::DwarfPlanet)
    });

    for (id, _, _) in orbiting_sun {
        let Some(path) = system.orbit_path(id, ORBIT_PATH_SEGMENTS) else {
            continue;
        };
        paint_polyline(painter, projector, &path, Stroke::new(1.0, ORBIT_COLOUR));
    }
}

/// Stroke consecutive pairs, skipping segments that cross behind the camera.
fn paint_polyline(painter: &Painter, projector: &Projector, points: &[Vec3], stroke: Stroke) {
    let projected: Vec<_> = points.iter().map(|p| projector.project(*p)).collect();
    for pair in projected.windows(2) {
        if let [Some(a), Some(b)] = pair {
            painter.line_segment([a.pos, b.pos], stroke);
        }
    }
}

fn paint_body(painter: &Painter, state: &SceneState, projector: &Projector, item: &DrawItem) {
    let body = item.body;
    let min_radius = if body.kind.is_belt_member() {
        MIN_BELT_RADIUS
    } else {
        MIN_BODY_RADIUS
    };
    let radius = projector
        .screen_radius(body.size, item.screen.depth)
        .max(min_radius);
    let colour = state
        .appearance(item.id)
        .map_or(body.colour, |appearance| appearance.colour());
    let lighting = state.lighting();

    if let Some(atmosphere) = body.atmosphere {
        let halo = radius * atmosphere.scale;
        painter.circle_filled(
            item.screen.pos,
            halo,
            with_alpha(atmosphere.colour.0, ATMOSPHERE_ALPHA * 0.5),
        );
        painter.circle_stroke(
            item.screen.pos,
            halo,
            Stroke::new((halo - radius).max(1.0), with_alpha(atmosphere.colour.0, ATMOSPHERE_ALPHA)),
        );
    }

    match body.kind {
        BodyKind::Star => {
            // Glow grows with the pulsing sun intensity
            let glow = lighting.sun_intensity / 3.0;
            for ring in (1..=3).rev() {
                let scale = 1.0 + 0.35 * ring as f32 * glow;
                let alpha = 0.12 / ring as f32;
                painter.circle_filled(item.screen.pos, radius * scale, with_alpha(colour.0, alpha));
            }
            painter.circle_filled(item.screen.pos, radius, to_colour32(colour, 1.0));
        }
        BodyKind::Comet => {
            paint_comet_tail(painter, state, projector, item);
            let shade = lighting.shade(item.world.length());
            painter.circle_filled(item.screen.pos, radius, to_colour32(colour, shade));
        }
        _ => {
            let shade = lighting.shade(item.world.length());
            painter.circle_filled(item.screen.pos, radius, to_colour32(colour, shade));
        }
    }

    if let Some(clouds) = body.clouds {
        painter.circle_filled(
            item.screen.pos,
            radius * clouds.scale,
            with_alpha([255, 255, 255], clouds.opacity),
        );
    }

    if let Some(rings) = body.rings
        && let Some(transform) = state.system().transform(item.id)
    {
        let world = transform.world();
        let band_width = (rings.outer_radius - rings.inner_radius) / RING_BANDS as f32;
        let stroke_width = projector
            .screen_radius(band_width, item.screen.depth)
            .max(1.0);
        let stroke = Stroke::new(stroke_width, with_alpha(rings.colour.0, 0.8));

        for band in 0..RING_BANDS {
            let r = rings.inner_radius + band_width * (band as f32 + 0.5);
            let circle: Vec<Vec3> = (0..=RING_SEGMENTS)
                .map(|i| {
                    let angle = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
                    world.transform_point3(Vec3::new(angle.cos() * r, 0.0, angle.sin() * r))
                })
                .collect();
            paint_polyline(painter, projector, &circle, stroke);
        }
    }
}

fn paint_comet_tail(painter: &Painter, state: &SceneState, projector: &Projector, item: &DrawItem) {
    let Some(direction) = state.system().tail_direction(item.id) else {
        return;
    };
    let dots = (0..TAIL_POINTS).filter_map(|i| {
        let point = item.world + direction * (i as f32 * TAIL_SPACING);
        let alpha = 1.0 - i as f32 / TAIL_POINTS as f32;
        projector.project(point).map(|p| {
            let size = projector.screen_radius(TAIL_POINT_SIZE, p.depth).max(0.5);
            Shape::circle_filled(p.pos, size, with_alpha(TAIL_COLOUR, alpha))
        })
    });
    painter.extend(dots);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_scales_and_clamps() {
        let rgb = Rgb([100, 200, 50]);
        assert_eq!(to_colour32(rgb, 1.0), Color32::from_rgb(100, 200, 50));
        assert_eq!(to_colour32(rgb, 0.5), Color32::from_rgb(50, 100, 25));
        assert_eq!(to_colour32(rgb, 2.0), Color32::from_rgb(200, 255, 100));
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(with_alpha([1, 2, 3], 1.5).a(), 255);
        assert_eq!(with_alpha([1, 2, 3], -1.0).a(), 0);
    }
}
