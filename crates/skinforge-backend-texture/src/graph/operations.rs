//! Typed per-kind operations.
//!
//! Each node is compiled once into an [`Op`] whose fields are read from the
//! node's parameters after re-validation against the catalog, so the
//! per-texel loop never looks at strings or untyped values.

use skinforge_spec::{Node, NodeKind, ParamDef, ParamValue};

use super::ops_color::{brightness_contrast, hsv, ramp};
use super::ops_math::{binary, blend_masks, smoothstep_between, threshold, BinaryOp, BlendMode};
use super::ops_noise::{fbm_value, voronoi_outputs, worley_value};
use super::ops_pattern::{
    brick, checker, dots, grid, hexagon, rings, spiral, stripes, triangle,
};
use super::ops_transform::{distort, mirror, rotate, tile, MirrorAxis};
use super::value::NodeValue;
use crate::color::Color;

/// A compiled node operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Uv,
    Constant(NodeValue),
    Fbm {
        scale: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
        seed: u32,
    },
    Voronoi {
        scale: f64,
        randomness: f64,
        seed: u32,
    },
    Worley {
        scale: f64,
        randomness: f64,
        seed: u32,
    },
    Checker {
        scale: f64,
    },
    Stripes {
        scale: f64,
        angle: f64,
        width: f64,
    },
    Dots {
        scale: f64,
        radius: f64,
    },
    Hexagon {
        scale: f64,
        thickness: f64,
    },
    Brick {
        scale: f64,
        mortar: f64,
        offset: f64,
    },
    Rings {
        scale: f64,
    },
    Spiral {
        arms: u32,
        tightness: f64,
    },
    Grid {
        scale: f64,
        thickness: f64,
    },
    Triangle {
        scale: f64,
    },
    Binary(BinaryOp),
    Abs,
    Clamp,
    Step,
    Smoothstep {
        edge0: f64,
        edge1: f64,
    },
    Sin {
        frequency: f64,
    },
    Cos {
        frequency: f64,
    },
    Fract,
    Distance {
        centre: (f64, f64),
    },
    Mix,
    Ramp {
        stops: [Color; 3],
        mid: f64,
    },
    Hsv,
    BrightnessContrast {
        brightness: f64,
        contrast: f64,
    },
    InvertColor,
    Split,
    Combine,
    Scale {
        x: f64,
        y: f64,
    },
    Rotate {
        radians: f64,
        centre: (f64, f64),
    },
    Translate {
        x: f64,
        y: f64,
    },
    Tile {
        tiles: f64,
    },
    Mirror(MirrorAxis),
    Distort {
        strength: f64,
        scale: f64,
        seed: u32,
    },
    Threshold {
        threshold: f64,
        softness: f64,
    },
    InvertMask,
    Blend {
        mode: BlendMode,
        opacity: f64,
    },
    Output,
}

impl Op {
    /// Compile a node, reading each parameter through its catalog entry.
    pub fn from_node(node: &Node) -> Self {
        let p = Params(node);
        match node.kind {
            NodeKind::UvInput => Op::Uv,
            NodeKind::ColorInput => Op::Constant(NodeValue::Color(p.color("color"))),
            NodeKind::ValueInput => Op::Constant(NodeValue::Float(p.float("value"))),
            NodeKind::NoisePerlin => Op::Fbm {
                scale: p.float("scale"),
                octaves: p.count("octaves"),
                persistence: p.float("persistence"),
                lacunarity: 2.0,
                seed: p.seed(),
            },
            NodeKind::NoiseFbm => Op::Fbm {
                scale: p.float("scale"),
                octaves: p.count("octaves"),
                persistence: p.float("persistence"),
                lacunarity: p.float("lacunarity"),
                seed: p.seed(),
            },
            NodeKind::NoiseVoronoi => Op::Voronoi {
                scale: p.float("scale"),
                randomness: p.float("randomness"),
                seed: p.seed(),
            },
            NodeKind::NoiseWorley => Op::Worley {
                scale: p.float("scale"),
                randomness: p.float("randomness"),
                seed: p.seed(),
            },
            NodeKind::PatternChecker => Op::Checker {
                scale: p.float("scale"),
            },
            NodeKind::PatternStripes => Op::Stripes {
                scale: p.float("scale"),
                angle: p.float("angle").to_radians(),
                width: p.float("width"),
            },
            NodeKind::PatternDots => Op::Dots {
                scale: p.float("scale"),
                radius: p.float("radius"),
            },
            NodeKind::PatternHexagon => Op::Hexagon {
                scale: p.float("scale"),
                thickness: p.float("thickness"),
            },
            NodeKind::PatternBrick => Op::Brick {
                scale: p.float("scale"),
                mortar: p.float("mortar"),
                offset: p.float("offset"),
            },
            NodeKind::PatternRings => Op::Rings {
                scale: p.float("scale"),
            },
            NodeKind::PatternSpiral => Op::Spiral {
                arms: p.count("arms"),
                tightness: p.float("tightness"),
            },
            NodeKind::PatternGrid => Op::Grid {
                scale: p.float("scale"),
                thickness: p.float("thickness"),
            },
            NodeKind::PatternTriangle => Op::Triangle {
                scale: p.float("scale"),
            },
            NodeKind::MathAdd => Op::Binary(BinaryOp::Add),
            NodeKind::MathSubtract => Op::Binary(BinaryOp::Subtract),
            NodeKind::MathMultiply => Op::Binary(BinaryOp::Multiply),
            NodeKind::MathDivide => Op::Binary(BinaryOp::Divide),
            NodeKind::MathPower => Op::Binary(BinaryOp::Power),
            NodeKind::MathMod => Op::Binary(BinaryOp::Modulo),
            NodeKind::MathMin => Op::Binary(BinaryOp::Min),
            NodeKind::MathMax => Op::Binary(BinaryOp::Max),
            NodeKind::MathAbs => Op::Abs,
            NodeKind::MathClamp => Op::Clamp,
            NodeKind::MathStep => Op::Step,
            NodeKind::MathSmoothstep => Op::Smoothstep {
                edge0: p.float("edge0"),
                edge1: p.float("edge1"),
            },
            NodeKind::MathSin => Op::Sin {
                frequency: p.float("frequency"),
            },
            NodeKind::MathCos => Op::Cos {
                frequency: p.float("frequency"),
            },
            NodeKind::MathFract => Op::Fract,
            NodeKind::MathDistance => Op::Distance {
                centre: (p.float("center_x"), p.float("center_y")),
            },
            NodeKind::ColorMix => Op::Mix,
            NodeKind::ColorRamp => Op::Ramp {
                stops: [p.color("color1"), p.color("color2"), p.color("color3")],
                mid: p.float("mid"),
            },
            NodeKind::ColorHsv => Op::Hsv,
            NodeKind::ColorBrightnessContrast => Op::BrightnessContrast {
                brightness: p.float("brightness"),
                contrast: p.float("contrast"),
            },
            NodeKind::ColorInvert => Op::InvertColor,
            NodeKind::ColorSplit => Op::Split,
            NodeKind::ColorCombine => Op::Combine,
            NodeKind::TransformScale => Op::Scale {
                x: p.float("scale_x"),
                y: p.float("scale_y"),
            },
            NodeKind::TransformRotate => Op::Rotate {
                radians: p.float("angle").to_radians(),
                centre: (p.float("center_x"), p.float("center_y")),
            },
            NodeKind::TransformTranslate => Op::Translate {
                x: p.float("offset_x"),
                y: p.float("offset_y"),
            },
            NodeKind::TransformTile => Op::Tile {
                tiles: p.float("tiles"),
            },
            NodeKind::TransformMirror => Op::Mirror(MirrorAxis::from_index(p.int("axis"))),
            NodeKind::TransformDistort => Op::Distort {
                strength: p.float("strength"),
                scale: p.float("scale"),
                seed: p.seed(),
            },
            NodeKind::MaskThreshold => Op::Threshold {
                threshold: p.float("threshold"),
                softness: p.float("softness"),
            },
            NodeKind::MaskInvert => Op::InvertMask,
            NodeKind::MaskBlend => Op::Blend {
                mode: BlendMode::from_index(p.int("mode")),
                opacity: p.float("opacity"),
            },
            NodeKind::OutputPattern => Op::Output,
        }
    }

    /// Evaluate with resolved inputs (in declared port order) into `out`
    /// (one slot per declared output port).
    pub fn eval(&self, args: &[NodeValue], uv: (f64, f64), out: &mut [NodeValue]) {
        let float = |i: usize| args.get(i).map_or(0.0, NodeValue::as_float);
        let point = |i: usize| args.get(i).map_or(uv, NodeValue::as_vec2);
        let color = |i: usize| args.get(i).map_or(Color::NEUTRAL, NodeValue::as_color);

        match *self {
            Op::Uv => {
                out[0] = NodeValue::Vector2(uv.0, uv.1);
                out[1] = NodeValue::Float(uv.0);
                out[2] = NodeValue::Float(uv.1);
            }
            Op::Constant(value) => out[0] = value,
            Op::Fbm {
                scale,
                octaves,
                persistence,
                lacunarity,
                seed,
            } => {
                let v = fbm_value(point(0), scale, octaves, persistence, lacunarity, seed);
                out[0] = NodeValue::Float(v);
                out[1] = NodeValue::Color(Color::gray(v));
            }
            Op::Voronoi {
                scale,
                randomness,
                seed,
            } => {
                let (distance, cell, tint) = voronoi_outputs(point(0), scale, randomness, seed);
                out[0] = NodeValue::Float(distance);
                out[1] = NodeValue::Float(cell);
                out[2] = NodeValue::Color(tint);
            }
            Op::Worley {
                scale,
                randomness,
                seed,
            } => out[0] = NodeValue::Float(worley_value(point(0), scale, randomness, seed)),
            Op::Checker { scale } => out[0] = NodeValue::Float(checker(point(0), scale)),
            Op::Stripes {
                scale,
                angle,
                width,
            } => out[0] = NodeValue::Float(stripes(point(0), scale, angle, width)),
            Op::Dots { scale, radius } => out[0] = NodeValue::Float(dots(point(0), scale, radius)),
            Op::Hexagon { scale, thickness } => {
                out[0] = NodeValue::Float(hexagon(point(0), scale, thickness))
            }
            Op::Brick {
                scale,
                mortar,
                offset,
            } => out[0] = NodeValue::Float(brick(point(0), scale, mortar, offset)),
            Op::Rings { scale } => out[0] = NodeValue::Float(rings(point(0), scale)),
            Op::Spiral { arms, tightness } => {
                out[0] = NodeValue::Float(spiral(point(0), arms, tightness))
            }
            Op::Grid { scale, thickness } => {
                out[0] = NodeValue::Float(grid(point(0), scale, thickness))
            }
            Op::Triangle { scale } => out[0] = NodeValue::Float(triangle(point(0), scale)),
            Op::Binary(op) => out[0] = NodeValue::Float(binary(op, float(0), float(1))),
            Op::Abs => out[0] = NodeValue::Float(float(0).abs()),
            Op::Clamp => {
                // Inverted bounds collapse to `min` instead of panicking.
                out[0] = NodeValue::Float(float(0).min(float(2)).max(float(1)))
            }
            Op::Step => {
                let v = if float(1) >= float(0) { 1.0 } else { 0.0 };
                out[0] = NodeValue::Float(v);
            }
            Op::Smoothstep { edge0, edge1 } => {
                out[0] = NodeValue::Float(smoothstep_between(edge0, edge1, float(0)))
            }
            Op::Sin { frequency } => out[0] = NodeValue::Float((float(0) * frequency).sin()),
            Op::Cos { frequency } => out[0] = NodeValue::Float((float(0) * frequency).cos()),
            Op::Fract => {
                let v = float(0);
                out[0] = NodeValue::Float(v - v.floor());
            }
            Op::Distance { centre } => {
                let (u, v) = point(0);
                out[0] = NodeValue::Float((u - centre.0).hypot(v - centre.1));
            }
            Op::Mix => {
                let factor = float(2).clamp(0.0, 1.0);
                out[0] = NodeValue::Color(color(0).lerp(&color(1), factor));
            }
            Op::Ramp { stops, mid } => out[0] = NodeValue::Color(ramp(&stops, mid, float(0))),
            Op::Hsv => out[0] = NodeValue::Color(hsv(float(0), float(1), float(2))),
            Op::BrightnessContrast {
                brightness,
                contrast,
            } => {
                out[0] = NodeValue::Color(brightness_contrast(color(0), brightness, contrast))
            }
            Op::InvertColor => out[0] = NodeValue::Color(color(0).clamp().invert()),
            Op::Split => {
                let c = color(0);
                out[0] = NodeValue::Float(c.r);
                out[1] = NodeValue::Float(c.g);
                out[2] = NodeValue::Float(c.b);
            }
            Op::Combine => {
                out[0] = NodeValue::Color(Color::rgb(float(0), float(1), float(2)).clamp())
            }
            Op::Scale { x, y } => {
                let (u, v) = point(0);
                out[0] = NodeValue::Vector2(u * x, v * y);
            }
            Op::Rotate { radians, centre } => {
                let (u, v) = rotate(point(0), radians, centre);
                out[0] = NodeValue::Vector2(u, v);
            }
            Op::Translate { x, y } => {
                let (u, v) = point(0);
                out[0] = NodeValue::Vector2(u + x, v + y);
            }
            Op::Tile { tiles } => {
                let (u, v) = tile(point(0), tiles);
                out[0] = NodeValue::Vector2(u, v);
            }
            Op::Mirror(axis) => {
                let (u, v) = mirror(point(0), axis);
                out[0] = NodeValue::Vector2(u, v);
            }
            Op::Distort {
                strength,
                scale,
                seed,
            } => {
                let (u, v) = distort(point(0), strength, scale, seed);
                out[0] = NodeValue::Vector2(u, v);
            }
            Op::Threshold {
                threshold: edge,
                softness,
            } => out[0] = NodeValue::Float(threshold(float(0), edge, softness)),
            Op::InvertMask => out[0] = NodeValue::Float(1.0 - float(0)),
            Op::Blend { mode, opacity } => {
                out[0] = NodeValue::Float(blend_masks(mode, float(0), float(1), opacity))
            }
            Op::Output => out[0] = NodeValue::Color(color(0).scale(float(1))),
        }
    }
}

/// A node parameter read through its catalog definition: stored values
/// are re-coerced, and unknown or mistyped ones fall back to the default.
pub(crate) fn param_value(node: &Node, def: &ParamDef) -> ParamValue {
    node.params
        .get(def.id)
        .and_then(|v| def.coerce(*v))
        .unwrap_or(def.default)
}

struct Params<'a>(&'a Node);

impl Params<'_> {
    fn value(&self, id: &str) -> Option<ParamValue> {
        let def = self.0.definition().param(id)?;
        Some(param_value(self.0, def))
    }

    fn float(&self, id: &str) -> f64 {
        self.value(id).and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    fn int(&self, id: &str) -> i64 {
        self.float(id) as i64
    }

    /// Int parameters bounded below by 1 in the catalog.
    fn count(&self, id: &str) -> u32 {
        self.int(id).max(1) as u32
    }

    fn seed(&self) -> u32 {
        self.int("seed").clamp(0, u32::MAX as i64) as u32
    }

    fn color(&self, id: &str) -> Color {
        match self.value(id) {
            Some(ParamValue::Color(c)) => Color::from_array(c),
            _ => Color::NEUTRAL,
        }
    }
}
