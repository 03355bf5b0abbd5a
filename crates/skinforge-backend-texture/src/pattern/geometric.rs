//! Flat geometric routines: tilings, stripes, and rings.

use std::f64::consts::PI;

use kurbo::{Circle, Point, Rect, Vec2};

use super::{lattice, mix8, Finish, RoutineContext};
use crate::paint::{polygon_path, Painter};

fn hex_corners(centre: Point, radius: f64) -> [Point; 6] {
    let mut corners = [Point::ORIGIN; 6];
    for (k, corner) in corners.iter_mut().enumerate() {
        let a = (60.0 * k as f64 - 30.0).to_radians();
        *corner = Point::new(centre.x + radius * a.cos(), centre.y + radius * a.sin());
    }
    corners
}

/// Bevelled hexagon tiling; unfilled cells are drawn as outlines.
pub(crate) fn hexagon(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let r = s.element_size.max(6.0);
    let inner = (r - s.element_spacing * 0.1 - s.line_width * 0.5).max(1.0);
    let w = 3f64.sqrt() * r;
    let h = 1.5 * r;
    let b = painter.user_bounds();
    let depth = ctx.depth();
    let fill = ctx.fill();

    for j in lattice(b.y0 - r, b.y1 + r, h) {
        let shift = if j.rem_euclid(2) == 1 { w / 2.0 } else { 0.0 };
        for i in lattice(b.x0 - w, b.x1 + w, w) {
            let c = Point::new(i as f64 * w + shift, j as f64 * h);
            let corners = hex_corners(c, inner);

            if ctx.rng.chance(fill) {
                let Some(path) = polygon_path(&corners) else {
                    continue;
                };
                let color = ctx.pick_color();
                let jitter = ctx.rng.next_f64();
                let colors = ctx.colors;
                painter.fill_shaded(&path, |p| {
                    let d = (p - c) / inner;
                    let bevel = ((d.hypot() - 0.7) / 0.3).clamp(0.0, 1.0);
                    let finish = Finish::flat(color, 1.0 - 0.3 * bevel)
                        .tilted(d * bevel * depth)
                        .raised(1.0 - 0.4 * bevel)
                        .exposed(1.0 - 0.5 * bevel);
                    colors.paint_with(&finish, p, jitter)
                });
            } else {
                let line = ctx.palette.element(0);
                let paint = ctx.paint(&Finish::flat(line, 0.7).raised(0.5), c);
                let mut outline = corners.to_vec();
                outline.push(corners[0]);
                painter.stroke_polyline(&outline, s.line_width, &paint);
            }
        }
    }
}

/// Domed dots on a square lattice. Complexity randomizes their radius.
pub(crate) fn dots(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let pitch = (s.element_size + s.element_spacing * 0.5).max(6.0);
    let base_radius = (pitch * 0.5 * (0.3 + 0.7 * ctx.fill())).max(1.0);
    let b = painter.user_bounds();
    let depth = ctx.depth();

    for j in lattice(b.y0 - pitch, b.y1, pitch) {
        for i in lattice(b.x0 - pitch, b.x1, pitch) {
            let c = Point::new((i as f64 + 0.5) * pitch, (j as f64 + 0.5) * pitch);
            let shrink = 1.0 - s.complexity / 100.0 * 0.6 * ctx.rng.next_f64();
            let r = (base_radius * shrink).max(1.0);
            let color = ctx.pick_color();
            let jitter = ctx.rng.next_f64();
            let colors = ctx.colors;
            painter.fill_shaded(&Circle::new(c, r), |p| {
                let d = (p - c) / r;
                let z = (1.0 - d.hypot2()).max(0.0).sqrt();
                let finish = Finish::flat(color, 0.6 + 0.4 * z)
                    .tilted(d * depth)
                    .raised(z)
                    .exposed(0.5 + 0.5 * z);
                colors.paint_with(&finish, p, jitter)
            });
        }
    }
}

/// Vertical bands; above half complexity a pinstripe runs in each gap.
pub(crate) fn stripes(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let period = (s.element_size + s.element_spacing).max(4.0);
    let width = (period * ctx.fill()).max(s.line_width.min(period));
    let b = painter.user_bounds();
    let pinstripes = s.complexity > 50.0;

    for i in lattice(b.x0 - period, b.x1, period) {
        let x = i as f64 * period;
        let color = ctx.palette.element(i.rem_euclid(4) as usize);
        let paint = ctx.paint(&Finish::flat(color, 0.9), Point::new(x, b.y0));
        painter.fill_rect(Rect::new(x, b.y0, x + width, b.y1), &paint);

        if pinstripes && width < period {
            let mid = x + width + (period - width) / 2.0;
            let half = (s.line_width * 0.25).max(0.5);
            let highlight = ctx.palette.highlight;
            let paint = ctx.paint(&Finish::flat(highlight, 0.6).raised(0.4), Point::new(mid, b.y0));
            painter.fill_rect(Rect::new(mid - half, b.y0, mid + half, b.y1), &paint);
        }
    }
}

/// Parallel sine polylines; complexity shifts each row's phase.
pub(crate) fn waves(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let spacing = (s.element_size * 0.5 + s.element_spacing).max(4.0);
    let amplitude = s.element_size * 0.5;
    let wavelength = (200.0 - s.density * 1.5).max(8.0);
    let b = painter.user_bounds();
    let step = 2.0;
    let samples = ((b.width() / step).ceil() as usize).max(1) + 1;

    for j in lattice(b.y0 - amplitude, b.y1 + amplitude, spacing) {
        let y0 = j as f64 * spacing;
        let phase = j as f64 * s.complexity / 100.0 * PI * 0.5;
        let points: Vec<Point> = (0..samples)
            .map(|k| {
                let x = b.x0 + k as f64 * step;
                Point::new(x, y0 + amplitude * (2.0 * PI * x / wavelength + phase).sin())
            })
            .collect();
        let color = ctx.palette.element(j.rem_euclid(4) as usize);
        let paint = ctx.paint(&Finish::flat(color, 0.9).raised(0.7), Point::new(b.x0, y0));
        painter.stroke_polyline(&points, s.line_width, &paint);
    }
}

/// Zig-zag bands.
pub(crate) fn chevron(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let period = (s.element_size + s.element_spacing).max(6.0);
    let amp = period * 0.5;
    let thick = (period * ctx.fill() * 0.5).max(s.line_width);
    let b = painter.user_bounds();
    let depth = ctx.depth();

    for j in lattice(b.y0 - period, b.y1 + period, period) {
        let y = j as f64 * period;
        let points: Vec<Point> = lattice(b.x0 - amp, b.x1 + amp, amp)
            .map(|k| {
                let lift = if k.rem_euclid(2) == 1 { amp } else { 0.0 };
                Point::new(k as f64 * amp, y + lift)
            })
            .collect();
        let color = ctx.palette.element(j.rem_euclid(4) as usize);
        let tilt = Vec2::new(0.0, if j.rem_euclid(2) == 0 { 0.4 } else { -0.4 }) * depth;
        let paint = ctx.paint(&Finish::flat(color, 0.85).tilted(tilt), Point::new(b.x0, y));
        painter.stroke_polyline(&points, thick, &paint);
    }
}

/// Faceted diamonds in a checker arrangement, with argyle cross lines
/// above half complexity.
pub(crate) fn diamonds(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let cell = (s.element_size + s.element_spacing * 0.5).max(8.0);
    let half = cell * 0.5 * (0.4 + 0.6 * ctx.fill());
    let b = painter.user_bounds();
    let depth = ctx.depth();

    for j in lattice(b.y0 - cell, b.y1 + cell, cell) {
        for i in lattice(b.x0 - cell, b.x1 + cell, cell) {
            let c = Point::new(i as f64 * cell, j as f64 * cell);
            let points = [
                Point::new(c.x, c.y - half),
                Point::new(c.x + half, c.y),
                Point::new(c.x, c.y + half),
                Point::new(c.x - half, c.y),
            ];
            let Some(path) = polygon_path(&points) else {
                continue;
            };
            let color = ctx.palette.element((i + j).rem_euclid(2) as usize);
            let jitter = ctx.rng.next_f64();
            let colors = ctx.colors;
            painter.fill_shaded(&path, |p| {
                let d = p - c;
                let h = (1.0 - (d.x.abs() + d.y.abs()) / half).clamp(0.0, 1.0);
                let facet = Vec2::new(d.x.signum(), d.y.signum()) * 0.5 * depth;
                let finish = Finish::flat(color, 0.7 + 0.3 * h)
                    .tilted(facet)
                    .raised(h)
                    .exposed(0.6 + 0.4 * h);
                colors.paint_with(&finish, p, jitter)
            });
        }
    }

    if s.complexity > 50.0 {
        let highlight = ctx.palette.highlight;
        let span = b.width().max(b.height()) * 2.0;
        for k in lattice(b.x0 - span, b.x1 + span, cell * 2.0) {
            let x = k as f64 * cell * 2.0;
            let paint = ctx.paint(&Finish::flat(highlight, 0.5).raised(0.2), Point::new(x, b.y0));
            let width = (s.line_width * 0.5).max(0.5);
            painter.stroke_line(
                Point::new(x, b.y0),
                Point::new(x + span, b.y0 + span),
                width,
                &paint,
            );
            painter.stroke_line(
                Point::new(x, b.y0),
                Point::new(x - span, b.y0 + span),
                width,
                &paint,
            );
        }
    }
}

/// Alternating up/down triangles with random facet tilt.
pub(crate) fn triangles(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let side = (s.element_size + s.element_spacing * 0.5).max(8.0);
    let h = side * 3f64.sqrt() / 2.0;
    let shrink = 1.0 - s.element_spacing / 200.0;
    let keep = 0.3 + 0.7 * ctx.fill();
    let b = painter.user_bounds();
    let depth = ctx.depth();

    for j in lattice(b.y0 - h, b.y1 + h, h) {
        let y = j as f64 * h;
        for i in lattice(b.x0 - side, b.x1 + side, side * 0.5) {
            let x = i as f64 * side * 0.5;
            let up = (i + j).rem_euclid(2) == 0;
            let raw = if up {
                [
                    Point::new(x, y + h),
                    Point::new(x + side / 2.0, y),
                    Point::new(x + side, y + h),
                ]
            } else {
                [
                    Point::new(x, y),
                    Point::new(x + side, y),
                    Point::new(x + side / 2.0, y + h),
                ]
            };
            if !ctx.rng.chance(keep) {
                continue;
            }
            let centroid = Point::new(
                (raw[0].x + raw[1].x + raw[2].x) / 3.0,
                (raw[0].y + raw[1].y + raw[2].y) / 3.0,
            );
            let points = raw.map(|p| centroid + (p - centroid) * shrink);

            let color = ctx.pick_color();
            let tilt = Vec2::new(ctx.rng.next_signed(), ctx.rng.next_signed()) * 0.4 * depth;
            let height = 0.3 + 0.7 * ctx.rng.next_f64();
            let paint = ctx.paint(
                &Finish::flat(color, 0.8).tilted(tilt).raised(height),
                centroid,
            );
            painter.fill_polygon(&points, &paint);
        }
    }
}

/// Concentric rings about the canvas centre plus random ring clusters.
pub(crate) fn rings(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let spacing = (s.element_size * 0.5 + s.element_spacing * 0.5).max(3.0);
    let size = painter.size();
    let centre = Point::new(size / 2.0, size / 2.0);
    let b = painter.user_bounds();
    let reach = [
        Point::new(b.x0, b.y0),
        Point::new(b.x1, b.y0),
        Point::new(b.x0, b.y1),
        Point::new(b.x1, b.y1),
    ]
    .iter()
    .map(|p| (*p - centre).hypot())
    .fold(0.0, f64::max);
    let count = ((reach / spacing).ceil() as usize).max(1);

    let highlight = ctx.palette.highlight;
    let bullseye = ctx.paint(&Finish::flat(highlight, 1.0), centre);
    painter.fill_circle(centre, spacing * 0.5, &bullseye);

    for k in 1..=count {
        let t = k as f64 / count as f64;
        let color = ctx.palette.element(k);
        let paint = ctx.paint(&Finish::flat(color, 1.0 - 0.5 * t).raised(1.0 - t), centre);
        painter.stroke_circle(centre, k as f64 * spacing, s.line_width, &paint);
    }

    let clusters = (s.complexity / 100.0 * 8.0).round() as usize;
    for _ in 0..clusters {
        let c = Point::new(ctx.rng.range(0.0, size), ctx.rng.range(0.0, size));
        let color = ctx.pick_color();
        for k in 1..=3 {
            let paint = ctx.paint(&Finish::flat(color, 0.7).raised(0.5), c);
            painter.stroke_circle(c, k as f64 * spacing * 0.5, s.line_width, &paint);
        }
    }
}

/// Woven fibre tiles: each tile is a half-cylinder running across or
/// along, alternating like a twill.
pub(crate) fn carbon(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let cell = (s.element_size * 0.5).max(4.0);
    let b = painter.user_bounds();
    let depth = ctx.depth();
    let dark = ctx.palette.background;
    let fibre = mix8(dark, ctx.palette.element(0), 0.45);

    for j in lattice(b.y0 - cell, b.y1, cell) {
        for i in lattice(b.x0 - cell, b.x1, cell) {
            let rect = Rect::new(
                i as f64 * cell,
                j as f64 * cell,
                (i + 1) as f64 * cell,
                (j + 1) as f64 * cell,
            );
            let across = (i + j).rem_euclid(2) == 0;
            let jitter = ctx.rng.next_f64();
            let colors = ctx.colors;
            painter.fill_shaded(&rect, |p| {
                let t = if across {
                    (p.y - rect.y0) / cell
                } else {
                    (p.x - rect.x0) / cell
                };
                let arc = (PI * t).sin();
                let slope = (PI * t).cos() * depth;
                let tilt = if across {
                    Vec2::new(0.0, -slope)
                } else {
                    Vec2::new(-slope, 0.0)
                };
                let lift = if across { 0.4 } else { 0.2 };
                let finish = Finish::flat(mix8(dark, fibre, 0.2 + 0.8 * arc), 0.3 + 0.5 * arc)
                    .tilted(tilt)
                    .raised(lift + 0.6 * arc)
                    .exposed(0.5 + 0.5 * arc);
                colors.paint_with(&finish, p, jitter)
            });
        }
    }
}
