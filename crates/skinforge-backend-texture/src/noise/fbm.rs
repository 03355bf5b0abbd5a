//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of value noise to create natural-looking
//! patterns.

use super::{value_noise_2d, value_noise_2d_periodic};

/// Sum `octaves` layers of value noise, normalized by total amplitude.
///
/// Octave `i` samples at `frequency = lacunarity^i` with seed `seed + i * 100`
/// and weight `persistence^i`. `octaves` below 1 is treated as 1.
pub fn fbm(x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64, seed: u32) -> f64 {
    let mut frequency = 1.0;
    accumulate(octaves, persistence, |i| {
        let octave_seed = seed.wrapping_add(i.wrapping_mul(100));
        let v = value_noise_2d(x * frequency, y * frequency, octave_seed);
        frequency *= lacunarity;
        v
    })
}

/// [`fbm`] with lacunarity 2 that repeats every `period` units on both axes.
///
/// The first octave wraps its lattice at `period`; each later octave doubles
/// both its frequency and its lattice period, so every octave shares the
/// same repeat length in sample space.
pub fn fbm_periodic(x: f64, y: f64, octaves: u32, persistence: f64, seed: u32, period: u32) -> f64 {
    let mut frequency = 1.0;
    let mut lattice = period.max(1);
    accumulate(octaves, persistence, |i| {
        let octave_seed = seed.wrapping_add(i.wrapping_mul(100));
        let v = value_noise_2d_periodic(x * frequency, y * frequency, octave_seed, lattice);
        frequency *= 2.0;
        lattice = lattice.saturating_mul(2);
        v
    })
}

fn accumulate(octaves: u32, persistence: f64, mut octave: impl FnMut(u32) -> f64) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for i in 0..octaves.max(1) {
        total += amplitude * octave(i);
        max_value += amplitude;
        amplitude *= persistence;
    }

    if max_value > 0.0 {
        total / max_value
    } else {
        0.0
    }
}
