//! Bilinear-interpolated lattice value noise.

use super::{lerp, smoothstep};
use crate::rng::hash_unit;

/// Value noise in `[0, 1]`.
///
/// The four integer lattice corners around `(x, y)` are hashed with
/// `hash_unit(cx + cy * 57 + seed)` and blended with smoothstep weights.
pub fn value_noise_2d(x: f64, y: f64, seed: u32) -> f64 {
    sample(x, y, seed, |c| c)
}

/// [`value_noise_2d`] repeating every `period` lattice cells on both axes.
///
/// Corner coordinates are reduced modulo `period` before hashing, so
/// `f(x + period, y) == f(x, y)`. A `period` of 0 is treated as 1.
pub fn value_noise_2d_periodic(x: f64, y: f64, seed: u32, period: u32) -> f64 {
    let period = period.max(1) as f64;
    sample(x, y, seed, |c| c.rem_euclid(period))
}

fn sample(x: f64, y: f64, seed: u32, wrap: impl Fn(f64) -> f64) -> f64 {
    let ix = x.floor();
    let iy = y.floor();
    let fx = x - ix;
    let fy = y - iy;

    let seed = seed as f64;
    let corner = |cx: f64, cy: f64| hash_unit(wrap(cx) + wrap(cy) * 57.0 + seed);

    let a = corner(ix, iy);
    let b = corner(ix + 1.0, iy);
    let c = corner(ix, iy + 1.0);
    let d = corner(ix + 1.0, iy + 1.0);

    let ux = smoothstep(fx);
    let uy = smoothstep(fy);

    lerp(lerp(a, b, ux), lerp(c, d, ux), uy)
}
