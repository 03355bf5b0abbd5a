//! Channel derivation for graph-mode renders.
//!
//! The graph only produces a color. Every other channel is derived from
//! that color's luminance through the same helpers the pattern library
//! uses; the normal channel's red carries the luminance itself so the
//! normal-from-height pass turns it into slopes.

use kurbo::Point;
use rayon::prelude::*;
use skinforge_spec::SkinSettings;

use super::RenderError;
use crate::color::{byte, Color, Rgb8};
use crate::pattern::{texel_jitter, ChannelColors};
use crate::surface::{Channel, ChannelSet};

const DERIVED: [Channel; 6] = [
    Channel::Mask,
    Channel::Normal,
    Channel::Roughness,
    Channel::Pearlescence,
    Channel::Ao,
    Channel::Height,
];

pub(super) fn derive_channels(set: &mut ChannelSet, settings: &SkinSettings) -> Result<(), RenderError> {
    let size = set.size();
    let n = size as usize * size as usize;
    let mut luminance: Vec<f64> = Vec::new();
    luminance
        .try_reserve_exact(n)
        .map_err(|_| RenderError::Allocation { size })?;
    luminance.par_extend(
        set.get(Channel::Pattern)
            .as_bytes()
            .par_chunks_exact(4)
            .map(|t| Color::from_rgb8([t[0], t[1], t[2]]).luminance()),
    );

    let colors = ChannelColors::new(settings);
    let seed = settings.pattern.seed;
    let width = size as usize;
    for channel in DERIVED {
        set.get_mut(channel)
            .as_bytes_mut()
            .par_chunks_mut(width * 4)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                    let l = luminance[y * width + x];
                    let at = Point::new(x as f64, y as f64);
                    let rgb = derive(&colors, channel, l, at, seed);
                    texel.copy_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
                }
            });
    }
    Ok(())
}

fn derive(colors: &ChannelColors<'_>, channel: Channel, l: f64, at: Point, seed: u32) -> Rgb8 {
    match channel {
        Channel::Mask => colors.mask_color(l),
        Channel::Normal => [byte(l * 255.0), 128, 255],
        Channel::Roughness => colors.rough_color_with(l, texel_jitter(at, seed)),
        Channel::Pearlescence => colors.pearl_color(l, at.x, at.y),
        Channel::Ao => colors.ao_color(l),
        Channel::Height => colors.height_color(l),
        Channel::Pattern => [0, 0, 0],
    }
}
