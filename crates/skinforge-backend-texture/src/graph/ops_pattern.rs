//! Closed-form pattern nodes.
//!
//! Every pattern works in cell space `uv * scale` and returns a value in
//! `[0, 1]`. Hard-edged patterns return exactly 0 or 1.

use std::f64::consts::{PI, TAU};

fn fract(v: f64) -> f64 {
    v - v.floor()
}

fn mask(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

pub(super) fn checker(uv: (f64, f64), scale: f64) -> f64 {
    let cx = (uv.0 * scale).floor() as i64;
    let cy = (uv.1 * scale).floor() as i64;
    mask((cx + cy).rem_euclid(2) == 1)
}

/// Bands across the direction `angle` (radians); `width` is the lit
/// fraction of each period.
pub(super) fn stripes(uv: (f64, f64), scale: f64, angle: f64, width: f64) -> f64 {
    let t = uv.0 * angle.cos() + uv.1 * angle.sin();
    mask(fract(t * scale) < width)
}

/// One disc per cell; `radius` is in cell units.
pub(super) fn dots(uv: (f64, f64), scale: f64, radius: f64) -> f64 {
    let fx = fract(uv.0 * scale) - 0.5;
    let fy = fract(uv.1 * scale) - 0.5;
    mask(fx.hypot(fy) < radius)
}

/// Hexagon outlines. `thickness` is the outline width relative to the
/// centre-to-edge distance.
pub(super) fn hexagon(uv: (f64, f64), scale: f64, thickness: f64) -> f64 {
    const ROW: f64 = 1.732_050_807_568_877_2;
    let (x, y) = (uv.0 * scale, uv.1 * scale);

    // Nearest of the two interleaved lattices of hexagon centres.
    let a = (x.rem_euclid(1.0) - 0.5, y.rem_euclid(ROW) - ROW * 0.5);
    let b = ((x - 0.5).rem_euclid(1.0) - 0.5, (y - ROW * 0.5).rem_euclid(ROW) - ROW * 0.5);
    let local = if a.0 * a.0 + a.1 * a.1 < b.0 * b.0 + b.1 * b.1 {
        a
    } else {
        b
    };

    // 0 at the centre, 0.5 on the edge.
    let (ax, ay) = (local.0.abs(), local.1.abs());
    let edge = (ax * 0.5 + ay * ROW * 0.5).max(ax);
    mask(0.5 - edge < thickness * 0.5)
}

/// Running-bond bricks: 1 on bricks, 0 in the mortar. Odd rows shift by
/// `offset` of a brick.
pub(super) fn brick(uv: (f64, f64), scale: f64, mortar: f64, offset: f64) -> f64 {
    let y = uv.1 * scale * 2.0;
    let row = y.floor() as i64;
    let shift = if row.rem_euclid(2) == 1 { offset } else { 0.0 };
    let fx = fract(uv.0 * scale + shift);
    let fy = fract(y);
    let half = mortar * 0.5;
    mask(fx > half && fx < 1.0 - half && fy > half && fy < 1.0 - half)
}

/// Smooth concentric rings about the canvas centre.
pub(super) fn rings(uv: (f64, f64), scale: f64) -> f64 {
    let d = (uv.0 - 0.5).hypot(uv.1 - 0.5);
    0.5 + 0.5 * (d * scale * TAU).cos()
}

/// Smooth spiral arms about the canvas centre.
pub(super) fn spiral(uv: (f64, f64), arms: u32, tightness: f64) -> f64 {
    let (x, y) = (uv.0 - 0.5, uv.1 - 0.5);
    let angle = y.atan2(x);
    let radius = x.hypot(y);
    0.5 + 0.5 * (angle * arms as f64 + radius * tightness * PI).sin()
}

/// Grid lines of `thickness` (cell units) along every cell boundary.
pub(super) fn grid(uv: (f64, f64), scale: f64, thickness: f64) -> f64 {
    let fx = fract(uv.0 * scale);
    let fy = fract(uv.1 * scale);
    let half = thickness * 0.5;
    mask(fx < half || fx > 1.0 - half || fy < half || fy > 1.0 - half)
}

/// Each cell split along its diagonal: 1 in the upper-left half.
pub(super) fn triangle(uv: (f64, f64), scale: f64) -> f64 {
    mask(fract(uv.0 * scale) + fract(uv.1 * scale) < 1.0)
}
