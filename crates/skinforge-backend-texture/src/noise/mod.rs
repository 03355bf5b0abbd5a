//! Noise generation primitives.
//!
//! Three entry points cover every noise consumer in the engine:
//! [`value_noise_2d`], [`fbm`], and [`voronoi`]. Each has a `_periodic`
//! twin that wraps its lattice so seamless fields tile. All are pure
//! functions of their arguments, so any texel can be sampled independently
//! and in any order.

mod fbm;
mod value;
mod voronoi;

pub use fbm::{fbm, fbm_periodic};
pub use value::{value_noise_2d, value_noise_2d_periodic};
pub use voronoi::{voronoi, voronoi_periodic, VoronoiSample};

/// Smooth interpolation weight `t^2 (3 - 2t)`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
