//! Fixed-pattern settings.

use serde::{Deserialize, Serialize};

use crate::validation::Sanitizer;

id_enum! {
    /// Named pattern style.
    ///
    /// Several ids are aliases that share one underlying routine; the
    /// backend owns the alias table.
    pub enum PatternStyle {
        Circuit => "circuit",
        Neural => "neural",
        Motherboard => "motherboard",
        Processor => "processor",
        Network => "network",
        Grid => "grid",
        Blueprint => "blueprint",
        Tiles => "tiles",
        Hexagon => "hexagon",
        Honeycomb => "honeycomb",
        Hexgrid => "hexgrid",
        Dots => "dots",
        Halftone => "halftone",
        Polka => "polka",
        Stripes => "stripes",
        Pinstripe => "pinstripe",
        Barcode => "barcode",
        Waves => "waves",
        Ripples => "ripples",
        Sine => "sine",
        Voronoi => "voronoi",
        Cells => "cells",
        Crackle => "crackle",
        Scales => "scales",
        Noise => "noise",
        Camo => "camo",
        Marble => "marble",
        Clouds => "clouds",
        Chevron => "chevron",
        Zigzag => "zigzag",
        Herringbone => "herringbone",
        Diamonds => "diamonds",
        Argyle => "argyle",
        Checker => "checker",
        Triangles => "triangles",
        Geometric => "geometric",
        Shards => "shards",
        Rings => "rings",
        Concentric => "concentric",
        Target => "target",
        Carbon => "carbon",
        Weave => "weave",
        Kevlar => "kevlar",
        Cubes => "cubes",
        Blocks => "blocks",
        Pyramids => "pyramids",
        Studs => "studs",
        Spheres => "spheres",
        Bubbles => "bubbles",
        Cylinders => "cylinders",
        Pipes => "pipes",
        Terrain => "terrain",
        Topographic => "topographic",
        Isometric => "isometric",
        Wireframe => "wireframe",
        Mesh => "mesh",
        Extruded => "extruded",
        Embossed => "embossed",
        Parallax => "parallax",
        Layers => "layers",
    }
}

id_enum! {
    /// Named color palette.
    pub enum ColorScheme {
        Neon => "neon",
        Cyber => "cyber",
        Ocean => "ocean",
        Sunset => "sunset",
        Forest => "forest",
        Monochrome => "monochrome",
        Gold => "gold",
        Ice => "ice",
        Lava => "lava",
        Toxic => "toxic",
    }
}

/// Settings for the fixed pattern library.
///
/// Percent-style fields are in `0..=100`; sizes are in pixels at the
/// render resolution; angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    pub style: PatternStyle,
    pub density: f64,
    pub complexity: f64,
    pub element_size: f64,
    pub element_spacing: f64,
    pub line_width: f64,
    pub fill_amount: f64,
    pub connection_density: f64,
    pub color_scheme: ColorScheme,
    pub seed: u32,
    pub rotation: f64,
    pub seamless: bool,
    pub noise_amount: f64,
    pub vignette: f64,
    pub depth_intensity: f64,
    pub perspective: f64,
    pub light_angle: f64,
    pub light_elevation: f64,
    pub extrude_depth: f64,
    pub layer_count: u32,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            style: PatternStyle::Circuit,
            density: 50.0,
            complexity: 50.0,
            element_size: 20.0,
            element_spacing: 20.0,
            line_width: 2.0,
            fill_amount: 50.0,
            connection_density: 50.0,
            color_scheme: ColorScheme::Neon,
            seed: 12345,
            rotation: 0.0,
            seamless: false,
            noise_amount: 0.0,
            vignette: 0.0,
            depth_intensity: 50.0,
            perspective: 30.0,
            light_angle: 45.0,
            light_elevation: 45.0,
            extrude_depth: 8.0,
            layer_count: 3,
        }
    }
}

impl PatternSettings {
    /// Return a copy with every field clamped into its documented range.
    pub fn sanitized(&self) -> Self {
        self.sanitize_with(&mut Sanitizer::new())
    }

    /// Clamp into range, recording adjustments under `pattern.*`.
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("pattern");
        Self {
            style: self.style,
            density: s.range("density", self.density, 0.0, 100.0),
            complexity: s.range("complexity", self.complexity, 0.0, 100.0),
            element_size: s.range("element_size", self.element_size, 2.0, 200.0),
            element_spacing: s.range("element_spacing", self.element_spacing, 0.0, 100.0),
            line_width: s.range("line_width", self.line_width, 0.5, 40.0),
            fill_amount: s.range("fill_amount", self.fill_amount, 0.0, 100.0),
            connection_density: s.range("connection_density", self.connection_density, 0.0, 100.0),
            color_scheme: self.color_scheme,
            seed: self.seed,
            rotation: s.angle("rotation", self.rotation),
            seamless: self.seamless,
            noise_amount: s.range("noise_amount", self.noise_amount, 0.0, 100.0),
            vignette: s.range("vignette", self.vignette, 0.0, 100.0),
            depth_intensity: s.range("depth_intensity", self.depth_intensity, 0.0, 100.0),
            perspective: s.range("perspective", self.perspective, 0.0, 100.0),
            light_angle: s.angle("light_angle", self.light_angle),
            light_elevation: s.range("light_elevation", self.light_elevation, 0.0, 90.0),
            extrude_depth: s.range("extrude_depth", self.extrude_depth, 0.0, 64.0),
            layer_count: s.range_u32("layer_count", self.layer_count, 1, 12),
        }
    }
}
