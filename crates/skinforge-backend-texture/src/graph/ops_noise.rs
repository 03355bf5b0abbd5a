//! Noise generator nodes (perlin, fbm, voronoi, worley).

use crate::color::Color;
use crate::noise::{fbm, voronoi};

/// Fractal value noise at `uv * scale`. Perlin nodes use lacunarity 2.
pub(super) fn fbm_value(
    uv: (f64, f64),
    scale: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
    seed: u32,
) -> f64 {
    fbm(uv.0 * scale, uv.1 * scale, octaves, persistence, lacunarity, seed)
}

/// `(distance, cell, color)`; the color gives each cell its own hue.
pub(super) fn voronoi_outputs(
    uv: (f64, f64),
    scale: f64,
    randomness: f64,
    seed: u32,
) -> (f64, f64, Color) {
    let sample = voronoi(uv.0 * scale, uv.1 * scale, seed, randomness);
    let tint = Color::from_hsv(sample.cell_id * 360.0, 0.6, 0.4 + 0.6 * sample.cell_id);
    (sample.distance, sample.cell_id, tint)
}

/// `1 - distance`: bright at feature points.
pub(super) fn worley_value(uv: (f64, f64), scale: f64, randomness: f64, seed: u32) -> f64 {
    1.0 - voronoi(uv.0 * scale, uv.1 * scale, seed, randomness).distance
}
