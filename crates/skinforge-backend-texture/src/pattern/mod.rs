//! Fixed pattern library.
//!
//! Each [`PatternStyle`] maps to one [`Routine`]; many style ids are aliases
//! of the same routine. Routines draw exclusively through a [`Painter`] and
//! derive every channel color through [`ChannelColors`].

mod circuit;
mod derive;
mod field;
mod geometric;
pub mod grid;
mod palette;
mod solid;

pub use derive::{ChannelColors, Finish};
pub use palette::{palette, Palette};

use kurbo::{Point, Rect};
use skinforge_spec::{PatternSettings, PatternStyle, SkinSettings};

use crate::color::{byte, Rgb8};
use crate::paint::{ChannelPaint, Painter};
use crate::rng::{hash_unit, SeededRandom};

/// Underlying drawing routine shared by one or more style ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Routine {
    Circuit,
    Grid,
    Hexagon,
    Dots,
    Stripes,
    Waves,
    Voronoi,
    Noise,
    Chevron,
    Diamonds,
    Triangles,
    Rings,
    Carbon,
    Cubes,
    Pyramids,
    Spheres,
    Cylinders,
    Terrain,
    Isometric,
    Wireframe,
    Extruded,
    Parallax,
}

impl Routine {
    /// The routine that renders `style`.
    pub fn for_style(style: PatternStyle) -> Self {
        use PatternStyle as S;
        match style {
            S::Circuit | S::Neural | S::Motherboard | S::Processor | S::Network => Routine::Circuit,
            S::Grid | S::Blueprint | S::Tiles => Routine::Grid,
            S::Hexagon | S::Honeycomb | S::Hexgrid => Routine::Hexagon,
            S::Dots | S::Halftone | S::Polka => Routine::Dots,
            S::Stripes | S::Pinstripe | S::Barcode => Routine::Stripes,
            S::Waves | S::Ripples | S::Sine => Routine::Waves,
            S::Voronoi | S::Cells | S::Crackle | S::Scales => Routine::Voronoi,
            S::Noise | S::Camo | S::Marble | S::Clouds => Routine::Noise,
            S::Chevron | S::Zigzag | S::Herringbone => Routine::Chevron,
            S::Diamonds | S::Argyle | S::Checker => Routine::Diamonds,
            S::Triangles | S::Geometric | S::Shards => Routine::Triangles,
            S::Rings | S::Concentric | S::Target => Routine::Rings,
            S::Carbon | S::Weave | S::Kevlar => Routine::Carbon,
            S::Cubes | S::Blocks => Routine::Cubes,
            S::Pyramids | S::Studs => Routine::Pyramids,
            S::Spheres | S::Bubbles => Routine::Spheres,
            S::Cylinders | S::Pipes => Routine::Cylinders,
            S::Terrain | S::Topographic => Routine::Terrain,
            S::Isometric => Routine::Isometric,
            S::Wireframe | S::Mesh => Routine::Wireframe,
            S::Extruded | S::Embossed => Routine::Extruded,
            S::Parallax | S::Layers => Routine::Parallax,
        }
    }

    /// Whether the routine simulates lit 3D geometry.
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            Routine::Cubes
                | Routine::Pyramids
                | Routine::Spheres
                | Routine::Cylinders
                | Routine::Terrain
                | Routine::Isometric
                | Routine::Wireframe
                | Routine::Extruded
                | Routine::Parallax
        )
    }
}

/// Shared state handed to a routine.
pub(crate) struct RoutineContext<'a> {
    pub settings: &'a PatternSettings,
    pub colors: ChannelColors<'a>,
    pub palette: &'static Palette,
    pub rng: SeededRandom,
}

impl<'a> RoutineContext<'a> {
    pub fn new(settings: &'a SkinSettings) -> Self {
        Self {
            settings: &settings.pattern,
            colors: ChannelColors::new(settings),
            palette: palette(settings.pattern.color_scheme),
            rng: SeededRandom::new(settings.pattern.seed),
        }
    }

    /// Channel paint for one primitive; draws one roughness sample.
    pub fn paint(&mut self, finish: &Finish, at: Point) -> ChannelPaint {
        self.colors.paint(finish, at, &mut self.rng)
    }

    /// `depth_intensity` as a `[0, 1]` factor.
    pub fn depth(&self) -> f64 {
        self.settings.depth_intensity / 100.0
    }

    /// `fill_amount` as a `[0, 1]` factor.
    pub fn fill(&self) -> f64 {
        self.settings.fill_amount / 100.0
    }

    /// A random element color.
    pub fn pick_color(&mut self) -> Rgb8 {
        let i = self.rng.index(4);
        self.palette.element(i)
    }

    /// Light from the settings' azimuth and elevation.
    pub fn light(&self) -> Light {
        Light::new(self.settings.light_angle, self.settings.light_elevation)
    }
}

/// Render the configured style through `painter`.
///
/// The RNG is seeded from the pattern seed and consumed in drawing order,
/// so identical settings always paint identical primitives.
pub fn render_pattern(settings: &SkinSettings, painter: &mut Painter<'_>) {
    let routine = Routine::for_style(settings.pattern.style);
    tracing::debug!(style = %settings.pattern.style, ?routine, "dispatching pattern routine");

    let mut ctx = RoutineContext::new(settings);
    match routine {
        Routine::Circuit => circuit::draw(&mut ctx, painter),
        Routine::Grid => grid::draw(&mut ctx, painter),
        Routine::Hexagon => geometric::hexagon(&mut ctx, painter),
        Routine::Dots => geometric::dots(&mut ctx, painter),
        Routine::Stripes => geometric::stripes(&mut ctx, painter),
        Routine::Waves => geometric::waves(&mut ctx, painter),
        Routine::Chevron => geometric::chevron(&mut ctx, painter),
        Routine::Diamonds => geometric::diamonds(&mut ctx, painter),
        Routine::Triangles => geometric::triangles(&mut ctx, painter),
        Routine::Rings => geometric::rings(&mut ctx, painter),
        Routine::Carbon => geometric::carbon(&mut ctx, painter),
        Routine::Voronoi => field::voronoi_cells(&mut ctx, painter),
        Routine::Noise => field::noise(&mut ctx, painter),
        Routine::Terrain => field::terrain(&mut ctx, painter),
        Routine::Cubes => solid::cubes(&mut ctx, painter),
        Routine::Pyramids => solid::pyramids(&mut ctx, painter),
        Routine::Spheres => solid::spheres(&mut ctx, painter),
        Routine::Cylinders => solid::cylinders(&mut ctx, painter),
        Routine::Isometric => solid::isometric(&mut ctx, painter),
        Routine::Wireframe => solid::wireframe(&mut ctx, painter),
        Routine::Extruded => solid::extruded(&mut ctx, painter),
        Routine::Parallax => solid::parallax(&mut ctx, painter),
    }
}

/// Directional light for face shading.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Light {
    dir: [f64; 3],
}

impl Light {
    const AMBIENT: f64 = 0.25;

    pub fn new(angle_deg: f64, elevation_deg: f64) -> Self {
        let (sa, ca) = angle_deg.to_radians().sin_cos();
        let (se, ce) = elevation_deg.to_radians().sin_cos();
        Self {
            dir: [ca * ce, sa * ce, se],
        }
    }

    /// Lambert brightness in `[AMBIENT, 1]` for a surface tilted by
    /// `(tx, ty)` out of the canvas plane.
    pub fn shade(&self, tx: f64, ty: f64) -> f64 {
        let len = (tx * tx + ty * ty + 1.0).sqrt();
        let dot = (tx * self.dir[0] + ty * self.dir[1] + self.dir[2]) / len;
        Self::AMBIENT + (1.0 - Self::AMBIENT) * dot.max(0.0)
    }
}

/// Blend two byte colors.
pub(crate) fn mix8(a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
    let t = t.clamp(0.0, 1.0);
    [
        byte(a[0] as f64 + (b[0] as f64 - a[0] as f64) * t),
        byte(a[1] as f64 + (b[1] as f64 - a[1] as f64) * t),
        byte(a[2] as f64 + (b[2] as f64 - a[2] as f64) * t),
    ]
}

/// Scale a byte color's brightness.
pub(crate) fn shade8(c: Rgb8, k: f64) -> Rgb8 {
    [
        byte(c[0] as f64 * k),
        byte(c[1] as f64 * k),
        byte(c[2] as f64 * k),
    ]
}

/// Position-indexed roughness jitter for per-texel shading, independent of
/// the routine's RNG stream.
pub(crate) fn texel_jitter(p: Point, seed: u32) -> f64 {
    hash_unit(p.x.floor() + p.y.floor() * 4099.0 + seed as f64)
}

/// Lattice indices `k` with `k * step` covering `[lo, hi]`.
pub(crate) fn lattice(lo: f64, hi: f64, step: f64) -> std::ops::RangeInclusive<i64> {
    (lo / step).floor() as i64..=(hi / step).ceil() as i64
}

/// Area a full-canvas field should cover.
///
/// In seamless mode the painter's own copies fill the rotated corners, so
/// the field covers exactly one canvas; otherwise it covers everything
/// visible.
pub(crate) fn field_rect(settings: &PatternSettings, painter: &Painter<'_>) -> Rect {
    if settings.seamless {
        Rect::new(0.0, 0.0, painter.size(), painter.size())
    } else {
        painter.user_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circuit_aliases_share_a_routine() {
        for style in [
            PatternStyle::Neural,
            PatternStyle::Motherboard,
            PatternStyle::Processor,
            PatternStyle::Network,
        ] {
            assert_eq!(Routine::for_style(style), Routine::Circuit);
        }
    }

    #[test]
    fn every_style_resolves() {
        let solids = PatternStyle::ALL
            .iter()
            .filter(|s| Routine::for_style(**s).is_solid())
            .count();
        assert!(solids >= 9);
    }

    #[test]
    fn overhead_light_shades_flat_faces_fully() {
        let light = Light::new(0.0, 90.0);
        assert!((light.shade(0.0, 0.0) - 1.0).abs() < 1e-12);
        assert!(light.shade(3.0, 0.0) < 1.0);
    }

    #[test]
    fn grazing_light_favors_facing_slopes() {
        let light = Light::new(0.0, 10.0);
        assert!(light.shade(1.0, 0.0) > light.shade(-1.0, 0.0));
    }

    #[test]
    fn mix8_endpoints() {
        assert_eq!(mix8([0, 0, 0], [200, 100, 50], 0.0), [0, 0, 0]);
        assert_eq!(mix8([0, 0, 0], [200, 100, 50], 1.0), [200, 100, 50]);
        assert_eq!(shade8([200, 100, 50], 0.5), [100, 50, 25]);
    }
}
