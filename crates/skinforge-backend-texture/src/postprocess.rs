//! Post-processing passes applied after primary generation.
//!
//! Passes run in a fixed order: scanlines and jitter, vignette,
//! normal-from-height, then channel inversions. Every pass is row-parallel
//! and position-indexed, so results do not depend on thread count.

use rayon::prelude::*;
use skinforge_spec::SkinSettings;

use crate::color::{byte, Rgb8};
use crate::generate::RenderError;
use crate::rng::hash_unit;
use crate::surface::{Channel, ChannelSet, Surface};

/// Run the full pipeline in place.
#[tracing::instrument(level = "debug", skip_all, fields(size = set.size()))]
pub fn post_process(
    set: &mut ChannelSet,
    settings: &SkinSettings,
    background: Rgb8,
) -> Result<(), RenderError> {
    let pattern = &settings.pattern;
    if pattern.noise_amount > 0.0 {
        grain(set.get_mut(Channel::Pattern), pattern.noise_amount / 100.0, pattern.seed);
    }
    if pattern.vignette > 0.0 {
        vignette(set.get_mut(Channel::Pattern), pattern.vignette / 100.0, background);
    }
    normal_from_height(
        set.get_mut(Channel::Normal),
        settings.normal.strength,
        pattern.seamless,
    )?;
    if settings.mask.invert {
        invert(set.get_mut(Channel::Mask), [true, true, true]);
    }
    if settings.roughness.invert {
        invert(set.get_mut(Channel::Roughness), [true, true, true]);
    }
    if settings.normal.invert_height {
        invert(set.get_mut(Channel::Normal), [true, true, false]);
    }
    Ok(())
}

/// Scanline darkening on odd rows plus per-texel jitter.
///
/// `amount` is in `[0, 1]`.
pub fn grain(surface: &mut Surface, amount: f64, seed: u32) {
    let size = surface.size() as usize;
    let stride = size * 4;
    let scan = 1.0 - amount * 0.15;
    let spread = amount * 40.0;
    let seed = seed as f64;

    surface
        .as_bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let dim = if y % 2 == 1 { scan } else { 1.0 };
            for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                let n = (hash_unit(x as f64 + (y * size) as f64 + seed) - 0.5) * spread;
                for c in &mut texel[..3] {
                    *c = byte(*c as f64 * dim + n);
                }
            }
        });
}

/// Radial vignette fading from transparent centre to `edge` color at the
/// corners. `amount` is in `[0, 1]`.
pub fn vignette(surface: &mut Surface, amount: f64, edge: Rgb8) {
    let size = surface.size() as usize;
    let stride = size * 4;
    let centre = size as f64 / 2.0;
    let reach = centre * std::f64::consts::SQRT_2;

    surface
        .as_bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let dy = y as f64 + 0.5 - centre;
            for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                let dx = x as f64 + 0.5 - centre;
                let d = (dx * dx + dy * dy).sqrt() / reach.max(f64::EPSILON);
                let falloff = ((d - 0.4) / 0.6).clamp(0.0, 1.0);
                let a = amount * falloff * falloff;
                for c in 0..3 {
                    texel[c] = byte(texel[c] as f64 * (1.0 - a) + edge[c] as f64 * a);
                }
            }
        });
}

/// Re-derive the normal map from its own red channel.
///
/// `dx = (left - right) / 255 * strength` and
/// `dy = (up - down) / 255 * strength`, encoded as
/// `((dx + 1) * 127.5, (dy + 1) * 127.5, 255)`. Neighbours past the border
/// wrap when `wrap` is set and clamp to the edge otherwise, so a uniform
/// field yields `(128, 128, 255)` everywhere. Border texels are rewritten
/// too rather than keeping their painted normal.
pub fn normal_from_height(surface: &mut Surface, strength: f64, wrap: bool) -> Result<(), RenderError> {
    let size = surface.size() as usize;
    if size == 0 {
        return Ok(());
    }
    let stride = size * 4;

    // Full snapshot of the red channel; this is the barrier between
    // generation and derivation.
    let mut height = Vec::new();
    height
        .try_reserve_exact(size * size)
        .map_err(|_| RenderError::Allocation { size: size as u32 })?;
    height.extend(surface.as_bytes().chunks_exact(4).map(|t| t[0]));

    let last = size - 1;
    let neighbour = |i: usize, delta: isize| -> usize {
        let j = i as isize + delta;
        if wrap {
            j.rem_euclid(size as isize) as usize
        } else {
            j.clamp(0, last as isize) as usize
        }
    };
    let sample = |x: usize, y: usize| height[y * size + x] as f64 / 255.0;

    surface
        .as_bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let up = neighbour(y, -1);
            let down = neighbour(y, 1);
            for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                let left = neighbour(x, -1);
                let right = neighbour(x, 1);
                let dx = (sample(left, y) - sample(right, y)) * strength;
                let dy = (sample(x, up) - sample(x, down)) * strength;
                texel[0] = byte((dx + 1.0) * 127.5);
                texel[1] = byte((dy + 1.0) * 127.5);
                texel[2] = 255;
            }
        });
    Ok(())
}

/// `255 - c` on the selected RGB components; alpha untouched.
pub fn invert(surface: &mut Surface, components: [bool; 3]) {
    for texel in surface.as_bytes_mut().chunks_exact_mut(4) {
        for (c, flip) in components.iter().enumerate() {
            if *flip {
                texel[c] = 255 - texel[c];
            }
        }
    }
}
