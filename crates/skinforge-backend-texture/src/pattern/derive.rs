//! Channel color derivation.
//!
//! Every primitive a routine draws gets its seven colors from
//! [`ChannelColors`], which keeps the maps correlated: a bright element in
//! the pattern channel is also strong in the mask, raised in the height
//! map, and so on.

use kurbo::{Point, Vec2};
use skinforge_spec::SkinSettings;

use crate::color::{byte, gray8, Rgb8};
use crate::paint::ChannelPaint;
use crate::rng::SeededRandom;

/// Surface description of one primitive before channel derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    /// Base color written to the pattern channel.
    pub color: Rgb8,
    /// Element strength in `[0, 1]`, drives mask, roughness, and pearl.
    pub intensity: f64,
    /// Surface tilt in `[-1, 1]` per axis, before normal strength.
    pub tilt: Vec2,
    /// Relative height in `[0, 1]`.
    pub height: f64,
    /// Ambient exposure in `[0, 1]`; 1 is fully open.
    pub exposure: f64,
}

impl Finish {
    /// An untilted, unoccluded element whose height equals its intensity.
    pub fn flat(color: Rgb8, intensity: f64) -> Self {
        Self {
            color,
            intensity,
            tilt: Vec2::ZERO,
            height: intensity,
            exposure: 1.0,
        }
    }

    pub fn tilted(mut self, tilt: Vec2) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn raised(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn exposed(mut self, exposure: f64) -> Self {
        self.exposure = exposure;
        self
    }
}

/// Derivation helpers bound to one set of channel settings.
#[derive(Debug, Clone, Copy)]
pub struct ChannelColors<'a> {
    settings: &'a SkinSettings,
}

impl<'a> ChannelColors<'a> {
    pub fn new(settings: &'a SkinSettings) -> Self {
        Self { settings }
    }

    pub fn mask_color(&self, intensity: f64) -> Rgb8 {
        let m = &self.settings.mask;
        [
            byte(m.red * 2.55 * intensity),
            byte(m.green * 2.55 * intensity),
            byte(m.blue * 2.55 * intensity),
        ]
    }

    pub fn normal_color(&self, nx: f64, ny: f64) -> Rgb8 {
        let strength = self.settings.normal.strength;
        [
            byte((nx * strength + 1.0) * 127.5),
            byte((ny * strength + 1.0) * 127.5),
            255,
        ]
    }

    /// Roughness with one random jitter draw.
    pub fn rough_color(&self, intensity: f64, rng: &mut SeededRandom) -> Rgb8 {
        self.rough_color_with(intensity, rng.next_f64())
    }

    /// Roughness with a caller-supplied jitter sample in `[0, 1)`.
    pub fn rough_color_with(&self, intensity: f64, jitter: f64) -> Rgb8 {
        let r = &self.settings.roughness;
        gray8(r.base * 2.55 + r.variation * 2.55 * intensity * (jitter - 0.5) * 2.0)
    }

    pub fn pearl_color(&self, intensity: f64, x: f64, y: f64) -> Rgb8 {
        let p = &self.settings.pearlescence;
        let shimmer = 0.5 + 0.5 * ((x + y) * p.frequency * 0.05).sin();
        gray8(p.intensity * 2.55 * intensity * shimmer)
    }

    pub fn ao_color(&self, intensity: f64) -> Rgb8 {
        gray8(255.0 * (1.0 - self.settings.ao.strength * (1.0 - intensity)))
    }

    pub fn height_color(&self, h: f64) -> Rgb8 {
        gray8(h * 255.0 * self.settings.height.scale)
    }

    /// Paint for one primitive, drawing its roughness jitter from `rng`.
    pub fn paint(&self, finish: &Finish, at: Point, rng: &mut SeededRandom) -> ChannelPaint {
        self.paint_with(finish, at, rng.next_f64())
    }

    /// Paint with an explicit roughness jitter, for per-texel shading.
    pub fn paint_with(&self, finish: &Finish, at: Point, jitter: f64) -> ChannelPaint {
        ChannelPaint {
            pattern: finish.color,
            mask: self.mask_color(finish.intensity),
            normal: self.normal_color(finish.tilt.x, finish.tilt.y),
            roughness: self.rough_color_with(finish.intensity, jitter),
            pearlescence: self.pearl_color(finish.intensity, at.x, at.y),
            ao: self.ao_color(finish.exposure),
            height: self.height_color(finish.height),
            alpha: 1.0,
        }
    }
}
