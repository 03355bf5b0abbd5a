//! Voronoi (Worley/cellular) distance noise.

use crate::rng::hash_unit;

/// Result of a Voronoi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiSample {
    /// Distance to the nearest feature point, clamped to `[0, 1]`.
    pub distance: f64,
    /// Stable random value identifying the nearest cell, in `[0, 1)`.
    pub cell_id: f64,
}

/// Nearest-feature lookup over the 3x3 cell neighborhood of `(x, y)`.
///
/// Each integer cell holds one feature point at its centre, jittered by a
/// per-cell hash scaled by `randomness` (`0` gives a regular grid, `1` lets
/// the point roam the whole cell).
pub fn voronoi(x: f64, y: f64, seed: u32, randomness: f64) -> VoronoiSample {
    nearest(x, y, seed, randomness, |c| c)
}

/// [`voronoi`] over a feature grid that repeats every `period` cells.
///
/// Cell coordinates are reduced modulo `period` before hashing while the
/// feature points keep their unwrapped positions, so cells across the wrap
/// edge line up. A `period` of 0 is treated as 1.
pub fn voronoi_periodic(x: f64, y: f64, seed: u32, randomness: f64, period: u32) -> VoronoiSample {
    let period = period.max(1) as f64;
    nearest(x, y, seed, randomness, |c| c.rem_euclid(period))
}

fn nearest(x: f64, y: f64, seed: u32, randomness: f64, wrap: impl Fn(f64) -> f64) -> VoronoiSample {
    let cell_x = x.floor();
    let cell_y = y.floor();
    let seed = seed as f64;
    let randomness = randomness.clamp(0.0, 1.0);

    let mut best = f64::MAX;
    let mut best_id = 0.0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            let cx = cell_x + dx as f64;
            let cy = cell_y + dy as f64;
            let (hx, hy) = (wrap(cx), wrap(cy));

            let jx = hash_unit(hx * 127.1 + hy * 311.7 + seed) - 0.5;
            let jy = hash_unit(hx * 269.5 + hy * 183.3 + seed) - 0.5;
            let px = cx + 0.5 + jx * randomness;
            let py = cy + 0.5 + jy * randomness;

            let dist = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
            if dist < best {
                best = dist;
                best_id = hash_unit(hx * 419.2 + hy * 371.9 + seed);
            }
        }
    }

    VoronoiSample {
        distance: best.min(1.0),
        cell_id: best_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_grid_puts_points_at_cell_centres() {
        let s = voronoi(3.5, 7.5, 1, 0.0);
        assert!(s.distance < 1e-12);
        // Corner of a cell is equidistant from four centres.
        let corner = voronoi(4.0, 8.0, 1, 0.0);
        assert!((corner.distance - 0.5f64.hypot(0.5)).abs() < 1e-12);
    }

    #[test]
    fn distance_is_clamped() {
        for i in 0..300 {
            let s = voronoi(i as f64 * 0.29, i as f64 * 0.41, 17, 1.0);
            assert!((0.0..=1.0).contains(&s.distance));
            assert!((0.0..1.0).contains(&s.cell_id));
        }
    }

    #[test]
    fn points_in_the_same_cell_share_an_id_on_a_regular_grid() {
        let a = voronoi(2.1, 2.2, 5, 0.0);
        let b = voronoi(2.8, 2.9, 5, 0.0);
        assert_eq!(a.cell_id, b.cell_id);
    }

    #[test]
    fn deterministic_per_seed() {
        assert_eq!(voronoi(1.7, 0.3, 9, 0.8), voronoi(1.7, 0.3, 9, 0.8));
    }

    #[test]
    fn periodic_cells_repeat_with_the_same_id() {
        for i in 0..60 {
            let x = i as f64 * 0.53;
            let y = i as f64 * 0.29;
            let here = voronoi_periodic(x, y, 4, 0.9, 6);
            let there = voronoi_periodic(x - 6.0, y + 12.0, 4, 0.9, 6);
            assert!((here.distance - there.distance).abs() < 1e-9);
            assert_eq!(here.cell_id, there.cell_id);
        }
    }

    #[test]
    fn periodic_cells_are_continuous_across_the_wrap_edge() {
        let before = voronoi_periodic(4.999_999, 2.3, 8, 1.0, 5);
        let after = voronoi_periodic(0.000_001, 2.3, 8, 1.0, 5);
        assert!((before.distance - after.distance).abs() < 1e-4);
    }
}
