//! Per-texel field routines built on the noise library.
//!
//! In seamless mode every field snaps its lattice so a whole number of
//! cells spans the canvas and samples the periodic noise variants, which
//! makes column `size - 1` continue into column 0.

use kurbo::{Point, Vec2};

use super::{field_rect, mix8, texel_jitter, Finish, RoutineContext};
use crate::noise::{fbm, fbm_periodic, voronoi, voronoi_periodic, VoronoiSample};
use crate::paint::Painter;

/// Lattice cells per canvas when the field must tile.
///
/// `span` is the canvas size measured in lattice units.
fn wrap_period(seamless: bool, span: f64) -> Option<u32> {
    seamless.then(|| span.round().clamp(1.0, u32::MAX as f64) as u32)
}

/// Cellular field (voronoi, cells, crackle, scales).
pub(crate) fn voronoi_cells(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let mut cell = (s.element_size * 1.5 + s.element_spacing).max(8.0);
    let period = wrap_period(s.seamless, painter.size() / cell);
    if let Some(n) = period {
        cell = painter.size() / n as f64;
    }
    let randomness = 0.4 + 0.6 * s.complexity / 100.0;
    let seed = s.seed;
    let depth = ctx.depth();
    let palette = ctx.palette;
    let colors = ctx.colors;
    let step = 1.0 / cell;
    let cellular = move |u: f64, v: f64| -> VoronoiSample {
        match period {
            Some(n) => voronoi_periodic(u, v, seed, randomness, n),
            None => voronoi(u, v, seed, randomness),
        }
    };

    let rect = field_rect(s, painter);
    painter.fill_shaded(&rect, |p| {
        let u = p.x / cell;
        let v = p.y / cell;
        let here = cellular(u, v);
        let gx = cellular(u + step, v).distance - here.distance;
        let gy = cellular(u, v + step).distance - here.distance;

        let body = 1.0 - here.distance;
        let tint = palette.element((here.cell_id * 4.0) as usize);
        let finish = Finish::flat(mix8(palette.background, tint, 0.3 + 0.7 * body), body)
            .tilted(Vec2::new(gx, gy) * cell * depth)
            .exposed(0.4 + 0.6 * body);
        colors.paint_with(&finish, p, texel_jitter(p, seed))
    });
}

/// Fractal noise field mapped through the palette ramp.
pub(crate) fn noise(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let mut scale = 1.0 / (s.element_size * 2.0).max(4.0);
    let period = wrap_period(s.seamless, painter.size() * scale);
    if let Some(n) = period {
        scale = n as f64 / painter.size();
    }
    let octaves = 1 + (s.complexity / 100.0 * 7.0).round() as u32;
    let persistence = 0.35 + 0.3 * s.density / 100.0;
    let seed = s.seed;
    let depth = ctx.depth();
    let palette = ctx.palette;
    let colors = ctx.colors;
    let sample = move |x: f64, y: f64| match period {
        Some(n) => fbm_periodic(x * scale, y * scale, octaves, persistence, seed, n),
        None => fbm(x * scale, y * scale, octaves, persistence, 2.0, seed),
    };

    let rect = field_rect(s, painter);
    painter.fill_shaded(&rect, |p| {
        let h = sample(p.x, p.y);
        let dx = h - sample(p.x + 1.0, p.y);
        let dy = h - sample(p.x, p.y + 1.0);
        let finish = Finish::flat(palette.ramp(h), h)
            .tilted(Vec2::new(dx, dy) / scale * 0.4 * depth)
            .exposed(0.5 + 0.5 * h);
        colors.paint_with(&finish, p, texel_jitter(p, seed))
    });
}

/// Height-banded terrain with contour lines.
///
/// Slope comes from central differences of the fbm height between
/// neighbouring texels.
pub(crate) fn terrain(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let mut scale = 1.0 / (s.element_size * 4.0).max(8.0);
    let period = wrap_period(s.seamless, painter.size() * scale);
    if let Some(n) = period {
        scale = n as f64 / painter.size();
    }
    let octaves = 3 + (s.complexity / 100.0 * 5.0).round() as u32;
    let seed = s.seed;
    let depth = ctx.depth();
    let contours = (s.layer_count * 3) as f64;
    let palette = ctx.palette;
    let colors = ctx.colors;
    let height = move |p: Point| match period {
        Some(n) => fbm_periodic(p.x * scale, p.y * scale, octaves, 0.5, seed, n),
        None => fbm(p.x * scale, p.y * scale, octaves, 0.5, 2.0, seed),
    };

    let rect = field_rect(s, painter);
    painter.fill_shaded(&rect, |p| {
        let h = height(p);
        let left = height(Point::new(p.x - 1.0, p.y));
        let right = height(Point::new(p.x + 1.0, p.y));
        let up = height(Point::new(p.x, p.y - 1.0));
        let down = height(Point::new(p.x, p.y + 1.0));
        let slope = Vec2::new(left - right, up - down) * 20.0 * depth;

        let band = if h < 0.35 {
            palette.element(3)
        } else if h < 0.5 {
            palette.element(0)
        } else if h < 0.7 {
            palette.element(1)
        } else {
            palette.element(2)
        };
        let contour = (h * contours).fract() < 0.06;
        let (color, intensity) = if contour {
            (palette.highlight, 1.0)
        } else {
            (band, h)
        };
        let finish = Finish::flat(color, intensity)
            .tilted(slope)
            .raised(h)
            .exposed(0.3 + 0.7 * h);
        colors.paint_with(&finish, p, texel_jitter(p, seed))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_period_only_applies_to_seamless_fields() {
        assert_eq!(wrap_period(false, 3.4), None);
        assert_eq!(wrap_period(true, 3.4), Some(3));
        assert_eq!(wrap_period(true, 3.6), Some(4));
    }

    #[test]
    fn wrap_period_keeps_at_least_one_cell() {
        assert_eq!(wrap_period(true, 0.02), Some(1));
        assert_eq!(wrap_period(true, 0.0), Some(1));
    }
}
