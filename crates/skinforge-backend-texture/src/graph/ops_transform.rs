//! UV transform nodes.

use crate::noise::value_noise_2d;

/// Which half-plane `transform-mirror` reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    Horizontal,
    Vertical,
    Both,
}

impl MirrorAxis {
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => MirrorAxis::Vertical,
            2 => MirrorAxis::Both,
            _ => MirrorAxis::Horizontal,
        }
    }
}

/// Rotate about `centre`.
pub(super) fn rotate(uv: (f64, f64), radians: f64, centre: (f64, f64)) -> (f64, f64) {
    let (sin, cos) = radians.sin_cos();
    let (x, y) = (uv.0 - centre.0, uv.1 - centre.1);
    (centre.0 + x * cos - y * sin, centre.1 + x * sin + y * cos)
}

/// Repeat the unit square `tiles` times per axis.
pub(super) fn tile(uv: (f64, f64), tiles: f64) -> (f64, f64) {
    ((uv.0 * tiles).rem_euclid(1.0), (uv.1 * tiles).rem_euclid(1.0))
}

/// Reflect the far half of an axis onto the near half around `0.5`.
pub(super) fn mirror(uv: (f64, f64), axis: MirrorAxis) -> (f64, f64) {
    let fold = |t: f64| if t > 0.5 { 1.0 - t } else { t };
    match axis {
        MirrorAxis::Horizontal => (fold(uv.0), uv.1),
        MirrorAxis::Vertical => (uv.0, fold(uv.1)),
        MirrorAxis::Both => (fold(uv.0), fold(uv.1)),
    }
}

/// Offset by two decorrelated value-noise fields centred on zero.
pub(super) fn distort(uv: (f64, f64), strength: f64, scale: f64, seed: u32) -> (f64, f64) {
    let (x, y) = (uv.0 * scale, uv.1 * scale);
    let dx = value_noise_2d(x, y, seed) - 0.5;
    let dy = value_noise_2d(x + 31.7, y + 47.3, seed) - 0.5;
    (uv.0 + dx * strength, uv.1 + dy * strength)
}
