//! Lit pseudo-3D routines.
//!
//! Faces carry a geometric tilt that drives both the light shading of the
//! pattern color and, scaled by depth intensity, the normal channel. Top
//! faces stay flat and high; side faces tilt outward and sit lower.

use kurbo::{Circle, Point, Rect, Vec2};

use super::{lattice, mix8, shade8, Finish, Light, RoutineContext};
use crate::color::Rgb8;
use crate::paint::{polygon_path, Painter};

/// Finish of a planar face with geometric tilt `tilt`.
fn face(light: &Light, base: Rgb8, tilt: Vec2, depth: f64, height: f64) -> Finish {
    let k = light.shade(tilt.x, tilt.y);
    Finish::flat(shade8(base, k), k)
        .tilted(tilt * depth)
        .raised(height)
        .exposed(0.5 + 0.5 * height)
}

/// Rounded-surface color: Lambert shade plus a tight specular spot.
fn lit(light: &Light, base: Rgb8, highlight: Rgb8, tilt: Vec2) -> Rgb8 {
    let k = light.shade(tilt.x, tilt.y);
    let spec = k.powi(16);
    mix8(shade8(base, k), highlight, spec * 0.6)
}

/// The three visible rhombi of an isometric cube whose front vertex is `c`.
fn cube_faces(c: Point, a: f64, w: f64) -> [[Point; 4]; 3] {
    let top = [
        c,
        Point::new(c.x - w, c.y - a / 2.0),
        Point::new(c.x, c.y - a),
        Point::new(c.x + w, c.y - a / 2.0),
    ];
    let left = [
        c,
        Point::new(c.x - w, c.y - a / 2.0),
        Point::new(c.x - w, c.y + a / 2.0),
        Point::new(c.x, c.y + a),
    ];
    let right = [
        c,
        Point::new(c.x + w, c.y - a / 2.0),
        Point::new(c.x + w, c.y + a / 2.0),
        Point::new(c.x, c.y + a),
    ];
    [top, left, right]
}

const FACE_TILTS: [Vec2; 3] = [Vec2::new(0.0, 0.0), Vec2::new(-0.8, 0.4), Vec2::new(0.8, 0.4)];
const FACE_HEIGHTS: [f64; 3] = [1.0, 0.55, 0.55];

/// Isometric cube stacks (cubes, blocks).
pub(crate) fn cubes(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let a = s.element_size.max(8.0);
    let w = a * 30f64.to_radians().cos();
    let keep = 0.5 + 0.5 * ctx.fill();
    let light = ctx.light();
    let depth = ctx.depth();
    let edges = s.complexity > 30.0;
    let b = painter.user_bounds();

    for j in lattice(b.y0 - 2.0 * a, b.y1 + 2.0 * a, 1.5 * a) {
        let shift = if j.rem_euclid(2) == 1 { w } else { 0.0 };
        for i in lattice(b.x0 - 2.0 * w, b.x1 + 2.0 * w, 2.0 * w) {
            if !ctx.rng.chance(keep) {
                continue;
            }
            let c = Point::new(i as f64 * 2.0 * w + shift, j as f64 * 1.5 * a);
            let base = ctx.pick_color();
            for (k, points) in cube_faces(c, a, w).iter().enumerate() {
                let finish = face(&light, base, FACE_TILTS[k], depth, FACE_HEIGHTS[k]);
                let paint = ctx.paint(&finish, c);
                painter.fill_polygon(points, &paint);
            }
            if edges {
                let highlight = ctx.palette.highlight;
                let paint = ctx.paint(&Finish::flat(highlight, 0.9), c);
                let [top, left, right] = cube_faces(c, a, w);
                let width = (s.line_width * 0.5).max(0.5);
                painter.stroke_polyline(&[top[1], top[2], top[3], c, top[1]], width, &paint);
                painter.stroke_polyline(&[left[1], left[2], left[3], right[2], right[1]], width, &paint);
            }
        }
    }
}

/// Four-sided pyramids on a square lattice (pyramids, studs).
pub(crate) fn pyramids(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let cell = (s.element_size + s.element_spacing * 0.5).max(8.0);
    let half = cell * 0.5 * (0.6 + 0.4 * ctx.fill());
    let light = ctx.light();
    let depth = ctx.depth();
    let b = painter.user_bounds();
    let tilts = [
        Vec2::new(0.0, -1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, 0.0),
    ];

    for j in lattice(b.y0 - cell, b.y1, cell) {
        for i in lattice(b.x0 - cell, b.x1, cell) {
            let c = Point::new((i as f64 + 0.5) * cell, (j as f64 + 0.5) * cell);
            let corners = [
                Point::new(c.x - half, c.y - half),
                Point::new(c.x + half, c.y - half),
                Point::new(c.x + half, c.y + half),
                Point::new(c.x - half, c.y + half),
            ];
            let base = ctx.pick_color();
            for (k, tilt) in tilts.iter().enumerate() {
                let Some(path) = polygon_path(&[corners[k], corners[(k + 1) % 4], c]) else {
                    continue;
                };
                let shaded = shade8(base, light.shade(tilt.x, tilt.y));
                let jitter = ctx.rng.next_f64();
                let colors = ctx.colors;
                let tilt = *tilt * depth;
                painter.fill_shaded(&path, |p| {
                    let d = p - c;
                    let h = (1.0 - d.x.abs().max(d.y.abs()) / half).clamp(0.0, 1.0);
                    let finish = Finish::flat(shaded, 0.5 + 0.5 * h)
                        .tilted(tilt)
                        .raised(h)
                        .exposed(0.4 + 0.6 * h);
                    colors.paint_with(&finish, p, jitter)
                });
            }
        }
    }
}

/// Lit spheres, jittered off the lattice by complexity (spheres, bubbles).
pub(crate) fn spheres(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let pitch = (s.element_size + s.element_spacing * 0.5).max(8.0);
    let r = pitch * 0.5 * (0.5 + 0.5 * ctx.fill());
    let wobble = s.complexity / 100.0 * pitch * 0.25;
    let light = ctx.light();
    let depth = ctx.depth();
    let highlight = ctx.palette.highlight;
    let b = painter.user_bounds();

    for j in lattice(b.y0 - pitch, b.y1, pitch) {
        for i in lattice(b.x0 - pitch, b.x1, pitch) {
            let c = Point::new(
                (i as f64 + 0.5) * pitch + ctx.rng.next_signed() * wobble,
                (j as f64 + 0.5) * pitch + ctx.rng.next_signed() * wobble,
            );
            let base = ctx.pick_color();
            let jitter = ctx.rng.next_f64();
            let colors = ctx.colors;
            painter.fill_shaded(&Circle::new(c, r), |p| {
                let d = (p - c) / r;
                let z = (1.0 - d.hypot2()).max(0.0).sqrt();
                let color = lit(&light, base, highlight, d / z.max(0.05));
                let finish = Finish::flat(color, 0.5 + 0.5 * z)
                    .tilted(d * depth)
                    .raised(z)
                    .exposed(0.4 + 0.6 * z);
                colors.paint_with(&finish, p, jitter)
            });
        }
    }
}

/// Horizontal cylinders; complexity adds pipe collars (cylinders, pipes).
pub(crate) fn cylinders(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let diameter = s.element_size.max(6.0);
    let pitch = diameter + s.element_spacing * 0.2;
    let collar_chance = s.complexity / 100.0;
    let light = ctx.light();
    let depth = ctx.depth();
    let highlight = ctx.palette.highlight;
    let b = painter.user_bounds();

    for j in lattice(b.y0 - pitch, b.y1, pitch) {
        let y0 = j as f64 * pitch;
        let base = ctx.palette.element(j.rem_euclid(4) as usize);
        let jitter = ctx.rng.next_f64();
        let colors = ctx.colors;
        let shade = move |p: Point, y0: f64, d: f64| {
            let t = ((p.y - y0) / d * 2.0 - 1.0).clamp(-1.0, 1.0);
            let z = (1.0 - t * t).sqrt();
            let color = lit(&light, base, highlight, Vec2::new(0.0, t / z.max(0.05)));
            let finish = Finish::flat(color, 0.4 + 0.6 * z)
                .tilted(Vec2::new(0.0, t) * depth)
                .raised(z)
                .exposed(0.3 + 0.7 * z);
            colors.paint_with(&finish, p, jitter)
        };

        let body = Rect::new(b.x0, y0, b.x1, y0 + diameter);
        painter.fill_shaded(&body, |p| shade(p, y0, diameter));

        let segment = diameter * 4.0;
        for k in lattice(b.x0, b.x1, segment) {
            if !ctx.rng.chance(collar_chance) {
                continue;
            }
            let x = k as f64 * segment;
            let grow = diameter * 0.1;
            let collar = Rect::new(x, y0 - grow, x + diameter * 0.5, y0 + diameter + grow);
            let span = diameter + 2.0 * grow;
            painter.fill_shaded(&collar, |p| shade(p, y0 - grow, span));
        }
    }
}

/// Isometric lattice outlines with randomly filled faces.
pub(crate) fn isometric(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let a = s.element_size.max(8.0);
    let w = a * 30f64.to_radians().cos();
    let face_chance = ctx.fill() * 0.5;
    let light = ctx.light();
    let depth = ctx.depth();
    let width = (s.line_width * 0.5).max(0.5);
    let b = painter.user_bounds();

    for j in lattice(b.y0 - 2.0 * a, b.y1 + 2.0 * a, 1.5 * a) {
        let shift = if j.rem_euclid(2) == 1 { w } else { 0.0 };
        for i in lattice(b.x0 - 2.0 * w, b.x1 + 2.0 * w, 2.0 * w) {
            let c = Point::new(i as f64 * 2.0 * w + shift, j as f64 * 1.5 * a);
            let faces = cube_faces(c, a, w);
            for (k, points) in faces.iter().enumerate() {
                if ctx.rng.chance(face_chance) {
                    let base = ctx.pick_color();
                    let finish = face(&light, base, FACE_TILTS[k], depth, FACE_HEIGHTS[k]);
                    let paint = ctx.paint(&finish, c);
                    painter.fill_polygon(points, &paint);
                }
            }
            let line = ctx.palette.element(0);
            let paint = ctx.paint(&Finish::flat(line, 0.8).raised(0.6), c);
            for points in &faces {
                painter.stroke_polyline(&[points[0], points[1], points[2], points[3], points[0]], width, &paint);
            }
        }
    }
}

/// Perspective floor grid converging on a vanishing point (wireframe, mesh).
pub(crate) fn wireframe(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let size = painter.size();
    let horizon = size * (0.15 + 0.35 * s.perspective / 100.0);
    let vanish = Point::new(size / 2.0, horizon);
    let spacing = (s.element_size + s.element_spacing).max(6.0);
    let b = painter.user_bounds();
    let floor = b.y1.max(size);
    let line = ctx.palette.element(0);

    // Rays fan out from the vanishing point to the bottom edge.
    let spread = size * 2.0;
    for k in lattice(b.x0 - spread, b.x1 + spread, spacing) {
        let x = k as f64 * spacing;
        let paint = ctx.paint(&Finish::flat(line, 0.8).raised(0.5), Point::new(x, floor));
        painter.stroke_line(Point::new(x, floor), vanish, s.line_width, &paint);
    }

    // Cross lines crowd toward the horizon.
    let rows = (s.layer_count * 6).max(2);
    let near = floor - horizon;
    for n in 0..rows {
        let y = horizon + near / (1.0 + n as f64 * 0.35);
        let closeness = (y - horizon) / near.max(1.0);
        let paint = ctx
            .paint(&Finish::flat(line, closeness).raised(closeness), Point::new(b.x0, y))
            .with_alpha(0.3 + 0.7 * closeness);
        painter.stroke_line(
            Point::new(b.x0 - spread, y),
            Point::new(b.x1 + spread, y),
            s.line_width,
            &paint,
        );
    }

    // Dense meshes get diagonal bracing across the floor.
    if s.complexity > 50.0 {
        let highlight = ctx.palette.highlight;
        for k in lattice(b.x0 - spread, b.x1 + spread, spacing * 2.0) {
            let x = k as f64 * spacing * 2.0;
            let paint = ctx
                .paint(&Finish::flat(highlight, 0.5).raised(0.3), Point::new(x, floor))
                .with_alpha(0.5);
            let top = Point::new(vanish.x + (x - vanish.x) * 0.2, horizon + near * 0.2);
            painter.stroke_line(Point::new(x + spacing, floor), top, s.line_width * 0.5, &paint);
        }
    }
}

/// Raised slabs with a stepped side wall cast away from the light
/// (extruded, embossed).
pub(crate) fn extruded(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let size = painter.size();
    let count = 4 + (s.complexity / 100.0 * 20.0) as usize;
    let (sin, cos) = s.light_angle.to_radians().sin_cos();
    let away = Vec2::new(-cos, -sin) * s.extrude_depth;
    let steps = s.extrude_depth.ceil().clamp(1.0, 64.0) as usize;
    let light = ctx.light();
    let depth = ctx.depth();

    for _ in 0..count {
        let w = s.element_size * ctx.rng.range(1.0, 4.0);
        let h = s.element_size * ctx.rng.range(1.0, 4.0);
        let x = ctx.rng.range(0.0, size);
        let y = ctx.rng.range(0.0, size);
        let top = Rect::new(x, y, x + w, y + h);
        let base = ctx.pick_color();

        let wall_tilt = if away.hypot() > 0.0 {
            away.normalize()
        } else {
            Vec2::ZERO
        };
        for step in (1..=steps).rev() {
            let t = step as f64 / steps as f64;
            let finish = face(&light, shade8(base, 0.7), wall_tilt, depth, 0.3 + 0.6 * (1.0 - t));
            let paint = ctx.paint(&finish, top.center());
            painter.fill_rect(top + away * t, &paint);
        }
        let paint = ctx.paint(&face(&light, base, Vec2::ZERO, depth, 1.0), top.center());
        painter.fill_rect(top, &paint);
    }
}

/// Stacked layers of shapes, nearer layers larger and brighter
/// (parallax, layers).
pub(crate) fn parallax(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let size = painter.size();
    let layers = s.layer_count.max(1);
    let per_layer = 6 + (s.density / 100.0 * 20.0) as usize;
    let background = ctx.palette.background;

    for l in 0..layers {
        let t = if layers > 1 {
            l as f64 / (layers - 1) as f64
        } else {
            1.0
        };
        let shift = Vec2::new(s.perspective / 100.0 * t * s.element_size, 0.0);
        let grow = 0.5 + t;
        for _ in 0..per_layer {
            let c = Point::new(ctx.rng.range(0.0, size), ctx.rng.range(0.0, size)) + shift;
            let r = s.element_size * 0.5 * grow * ctx.rng.range(0.6, 1.4);
            let round = ctx.rng.chance(0.5);
            let tint = ctx.pick_color();
            let finish = Finish::flat(mix8(background, tint, 0.3 + 0.7 * t), 0.3 + 0.7 * t)
                .raised(t)
                .exposed(0.5 + 0.5 * t);
            let paint = ctx.paint(&finish, c);
            if round {
                painter.fill_circle(c, r, &paint);
            } else {
                painter.fill_rect(Rect::new(c.x - r, c.y - r, c.x + r, c.y + r), &paint);
            }
        }
    }
}
