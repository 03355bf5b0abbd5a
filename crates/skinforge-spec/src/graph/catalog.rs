//! Immutable node catalog.
//!
//! Each [`NodeKind`] has exactly one [`NodeDefinition`] describing its
//! ordered input ports, output ports, and parameters. Definitions are
//! `'static` data; graph instances only reference them by kind.

use serde::{Deserialize, Serialize};

id_enum! {
    /// Closed set of node types.
    pub enum NodeKind {
        UvInput => "uv-input",
        ColorInput => "color-input",
        ValueInput => "value-input",
        NoisePerlin => "noise-perlin",
        NoiseFbm => "noise-fbm",
        NoiseVoronoi => "noise-voronoi",
        NoiseWorley => "noise-worley",
        PatternChecker => "pattern-checker",
        PatternStripes => "pattern-stripes",
        PatternDots => "pattern-dots",
        PatternHexagon => "pattern-hexagon",
        PatternBrick => "pattern-brick",
        PatternRings => "pattern-rings",
        PatternSpiral => "pattern-spiral",
        PatternGrid => "pattern-grid",
        PatternTriangle => "pattern-triangle",
        MathAdd => "math-add",
        MathSubtract => "math-subtract",
        MathMultiply => "math-multiply",
        MathDivide => "math-divide",
        MathPower => "math-power",
        MathAbs => "math-abs",
        MathClamp => "math-clamp",
        MathStep => "math-step",
        MathSmoothstep => "math-smoothstep",
        MathSin => "math-sin",
        MathCos => "math-cos",
        MathFract => "math-fract",
        MathMod => "math-mod",
        MathMin => "math-min",
        MathMax => "math-max",
        MathDistance => "math-distance",
        ColorMix => "color-mix",
        ColorRamp => "color-ramp",
        ColorHsv => "color-hsv",
        ColorBrightnessContrast => "color-brightness-contrast",
        ColorInvert => "color-invert",
        ColorSplit => "color-split",
        ColorCombine => "color-combine",
        TransformScale => "transform-scale",
        TransformRotate => "transform-rotate",
        TransformTranslate => "transform-translate",
        TransformTile => "transform-tile",
        TransformMirror => "transform-mirror",
        TransformDistort => "transform-distort",
        MaskThreshold => "mask-threshold",
        MaskInvert => "mask-invert",
        MaskBlend => "mask-blend",
        OutputPattern => "output-pattern",
    }
}

/// Node grouping shown by the editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Input,
    Noise,
    Pattern,
    Math,
    Color,
    Transform,
    Mask,
    Output,
}

/// Value type carried by a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortType {
    Float,
    Vector2,
    Color,
}

/// A declared input or output port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortDef {
    pub id: &'static str,
    pub name: &'static str,
    pub ty: PortType,
}

/// Declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Float,
    Int,
    Color,
}

/// A parameter value stored on a node instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Color([f64; 3]),
}

impl ParamValue {
    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Color(_) => "color",
        }
    }

    /// Numeric view; colors have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            ParamValue::Color(_) => None,
        }
    }
}

/// A declared parameter with its default and numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamDef {
    pub id: &'static str,
    pub kind: ParamKind,
    pub default: ParamValue,
    /// Lower bound for numeric kinds; ignored for colors.
    pub min: f64,
    /// Upper bound for numeric kinds; ignored for colors.
    pub max: f64,
}

impl ParamDef {
    /// Coerce and clamp a value against this definition.
    ///
    /// Ints are accepted for float parameters and floats are rounded for
    /// int parameters. Color components clamp to `[0, 1]`.
    pub fn coerce(&self, value: ParamValue) -> Option<ParamValue> {
        match (self.kind, value) {
            (ParamKind::Float, ParamValue::Float(v)) => {
                Some(ParamValue::Float(clamp_or_min(v, self.min, self.max)))
            }
            (ParamKind::Float, ParamValue::Int(v)) => {
                Some(ParamValue::Float(clamp_or_min(v as f64, self.min, self.max)))
            }
            (ParamKind::Int, ParamValue::Int(v)) => Some(ParamValue::Int(
                clamp_or_min(v as f64, self.min, self.max) as i64,
            )),
            (ParamKind::Int, ParamValue::Float(v)) => Some(ParamValue::Int(
                clamp_or_min(v.round(), self.min, self.max) as i64,
            )),
            (ParamKind::Color, ParamValue::Color(c)) => Some(ParamValue::Color([
                clamp_or_min(c[0], 0.0, 1.0),
                clamp_or_min(c[1], 0.0, 1.0),
                clamp_or_min(c[2], 0.0, 1.0),
            ])),
            _ => None,
        }
    }

    /// Name of the declared kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ParamKind::Float => "float",
            ParamKind::Int => "int",
            ParamKind::Color => "color",
        }
    }
}

fn clamp_or_min(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() {
        min
    } else {
        v.clamp(min, max)
    }
}

/// Catalog entry for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeDefinition {
    pub kind: NodeKind,
    pub category: NodeCategory,
    pub name: &'static str,
    pub inputs: &'static [PortDef],
    pub outputs: &'static [PortDef],
    pub params: &'static [ParamDef],
}

impl NodeDefinition {
    pub fn input(&self, id: &str) -> Option<&'static PortDef> {
        self.inputs.iter().find(|p| p.id == id)
    }

    pub fn output(&self, id: &str) -> Option<&'static PortDef> {
        self.outputs.iter().find(|p| p.id == id)
    }

    pub fn param(&self, id: &str) -> Option<&'static ParamDef> {
        self.params.iter().find(|p| p.id == id)
    }

    /// Index of an output port in declaration order.
    pub fn output_index(&self, id: &str) -> Option<usize> {
        self.outputs.iter().position(|p| p.id == id)
    }
}

const fn port(id: &'static str, name: &'static str, ty: PortType) -> PortDef {
    PortDef { id, name, ty }
}

const fn float(id: &'static str, default: f64, min: f64, max: f64) -> ParamDef {
    ParamDef {
        id,
        kind: ParamKind::Float,
        default: ParamValue::Float(default),
        min,
        max,
    }
}

const fn int(id: &'static str, default: i64, min: f64, max: f64) -> ParamDef {
    ParamDef {
        id,
        kind: ParamKind::Int,
        default: ParamValue::Int(default),
        min,
        max,
    }
}

const fn color(id: &'static str, default: [f64; 3]) -> ParamDef {
    ParamDef {
        id,
        kind: ParamKind::Color,
        default: ParamValue::Color(default),
        min: 0.0,
        max: 1.0,
    }
}

const UV_IN: PortDef = port("uv", "UV", PortType::Vector2);
const VALUE_OUT: PortDef = port("value", "Value", PortType::Float);
const COLOR_OUT: PortDef = port("color", "Color", PortType::Color);
const UV_OUT: PortDef = port("uv", "UV", PortType::Vector2);

const SEED: ParamDef = int("seed", 0, 0.0, 4_294_967_295.0);
const SCALE_MAX: f64 = 1000.0;
const SCALE_MIN: f64 = 0.001;
const GRAY: [f64; 3] = [0.5, 0.5, 0.5];

const SCALAR_AB_IN: &[PortDef] = &[
    port("a", "A", PortType::Float),
    port("b", "B", PortType::Float),
];
const SCALAR_IN: &[PortDef] = &[port("value", "Value", PortType::Float)];
const VALUE_ONLY: &[PortDef] = &[VALUE_OUT];
const COLOR_ONLY: &[PortDef] = &[COLOR_OUT];
const UV_ONLY_IN: &[PortDef] = &[UV_IN];
const UV_ONLY_OUT: &[PortDef] = &[UV_OUT];

macro_rules! definition {
    ($name:ident, $kind:ident, $category:ident, $label:literal, $inputs:expr, $outputs:expr, $params:expr) => {
        static $name: NodeDefinition = NodeDefinition {
            kind: NodeKind::$kind,
            category: NodeCategory::$category,
            name: $label,
            inputs: $inputs,
            outputs: $outputs,
            params: $params,
        };
    };
}

macro_rules! binary_math {
    ($name:ident, $kind:ident, $label:literal, $a:expr, $b:expr) => {
        definition!(
            $name,
            $kind,
            Math,
            $label,
            SCALAR_AB_IN,
            VALUE_ONLY,
            &[float("a", $a, -1.0e6, 1.0e6), float("b", $b, -1.0e6, 1.0e6)]
        );
    };
}

// Inputs
definition!(
    UV_INPUT,
    UvInput,
    Input,
    "UV",
    &[],
    &[
        UV_OUT,
        port("u", "U", PortType::Float),
        port("v", "V", PortType::Float),
    ],
    &[]
);
definition!(COLOR_INPUT, ColorInput, Input, "Color", &[], COLOR_ONLY, &[color("color", GRAY)]);
definition!(
    VALUE_INPUT,
    ValueInput,
    Input,
    "Value",
    &[],
    VALUE_ONLY,
    &[float("value", 0.5, -1.0e6, 1.0e6)]
);

// Noise
definition!(
    NOISE_PERLIN,
    NoisePerlin,
    Noise,
    "Perlin Noise",
    UV_ONLY_IN,
    &[VALUE_OUT, COLOR_OUT],
    &[
        float("scale", 10.0, SCALE_MIN, SCALE_MAX),
        int("octaves", 4, 1.0, 10.0),
        float("persistence", 0.5, 0.0, 1.0),
        SEED,
    ]
);
definition!(
    NOISE_FBM,
    NoiseFbm,
    Noise,
    "FBM Noise",
    UV_ONLY_IN,
    &[VALUE_OUT, COLOR_OUT],
    &[
        float("scale", 8.0, SCALE_MIN, SCALE_MAX),
        int("octaves", 5, 1.0, 10.0),
        float("persistence", 0.5, 0.0, 1.0),
        float("lacunarity", 2.0, 1.0, 4.0),
        SEED,
    ]
);
definition!(
    NOISE_VORONOI,
    NoiseVoronoi,
    Noise,
    "Voronoi",
    UV_ONLY_IN,
    &[
        port("distance", "Distance", PortType::Float),
        port("cell", "Cell", PortType::Float),
        COLOR_OUT,
    ],
    &[
        float("scale", 8.0, SCALE_MIN, SCALE_MAX),
        float("randomness", 1.0, 0.0, 1.0),
        SEED,
    ]
);
definition!(
    NOISE_WORLEY,
    NoiseWorley,
    Noise,
    "Worley",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("scale", 8.0, SCALE_MIN, SCALE_MAX),
        float("randomness", 1.0, 0.0, 1.0),
        SEED,
    ]
);

// Patterns
definition!(
    PATTERN_CHECKER,
    PatternChecker,
    Pattern,
    "Checker",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[float("scale", 8.0, SCALE_MIN, SCALE_MAX)]
);
definition!(
    PATTERN_STRIPES,
    PatternStripes,
    Pattern,
    "Stripes",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("scale", 10.0, SCALE_MIN, SCALE_MAX),
        float("angle", 0.0, -360.0, 360.0),
        float("width", 0.5, 0.0, 1.0),
    ]
);
definition!(
    PATTERN_DOTS,
    PatternDots,
    Pattern,
    "Dots",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("scale", 10.0, SCALE_MIN, SCALE_MAX),
        float("radius", 0.3, 0.0, 1.0),
    ]
);
definition!(
    PATTERN_HEXAGON,
    PatternHexagon,
    Pattern,
    "Hexagon",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("scale", 8.0, SCALE_MIN, SCALE_MAX),
        float("thickness", 0.1, 0.0, 1.0),
    ]
);
definition!(
    PATTERN_BRICK,
    PatternBrick,
    Pattern,
    "Brick",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("scale", 6.0, SCALE_MIN, SCALE_MAX),
        float("mortar", 0.05, 0.0, 0.5),
        float("offset", 0.5, 0.0, 1.0),
    ]
);
definition!(
    PATTERN_RINGS,
    PatternRings,
    Pattern,
    "Rings",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[float("scale", 10.0, SCALE_MIN, SCALE_MAX)]
);
definition!(
    PATTERN_SPIRAL,
    PatternSpiral,
    Pattern,
    "Spiral",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[int("arms", 3, 1.0, 16.0), float("tightness", 10.0, 0.0, 100.0)]
);
definition!(
    PATTERN_GRID,
    PatternGrid,
    Pattern,
    "Grid",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("scale", 10.0, SCALE_MIN, SCALE_MAX),
        float("thickness", 0.05, 0.0, 1.0),
    ]
);
definition!(
    PATTERN_TRIANGLE,
    PatternTriangle,
    Pattern,
    "Triangle",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[float("scale", 8.0, SCALE_MIN, SCALE_MAX)]
);

// Math
binary_math!(MATH_ADD, MathAdd, "Add", 0.0, 0.0);
binary_math!(MATH_SUBTRACT, MathSubtract, "Subtract", 0.0, 0.0);
binary_math!(MATH_MULTIPLY, MathMultiply, "Multiply", 1.0, 1.0);
binary_math!(MATH_DIVIDE, MathDivide, "Divide", 1.0, 1.0);
binary_math!(MATH_POWER, MathPower, "Power", 1.0, 2.0);
binary_math!(MATH_MOD, MathMod, "Modulo", 0.0, 1.0);
binary_math!(MATH_MIN, MathMin, "Minimum", 0.0, 0.0);
binary_math!(MATH_MAX, MathMax, "Maximum", 0.0, 0.0);
definition!(
    MATH_ABS,
    MathAbs,
    Math,
    "Absolute",
    SCALAR_IN,
    VALUE_ONLY,
    &[float("value", 0.0, -1.0e6, 1.0e6)]
);
definition!(
    MATH_CLAMP,
    MathClamp,
    Math,
    "Clamp",
    &[
        port("value", "Value", PortType::Float),
        port("min", "Min", PortType::Float),
        port("max", "Max", PortType::Float),
    ],
    VALUE_ONLY,
    &[
        float("value", 0.0, -1.0e6, 1.0e6),
        float("min", 0.0, -1.0e6, 1.0e6),
        float("max", 1.0, -1.0e6, 1.0e6),
    ]
);
definition!(
    MATH_STEP,
    MathStep,
    Math,
    "Step",
    &[
        port("edge", "Edge", PortType::Float),
        port("value", "Value", PortType::Float),
    ],
    VALUE_ONLY,
    &[
        float("edge", 0.5, -1.0e6, 1.0e6),
        float("value", 0.0, -1.0e6, 1.0e6),
    ]
);
definition!(
    MATH_SMOOTHSTEP,
    MathSmoothstep,
    Math,
    "Smoothstep",
    SCALAR_IN,
    VALUE_ONLY,
    &[
        float("value", 0.0, -1.0e6, 1.0e6),
        float("edge0", 0.0, -1.0e6, 1.0e6),
        float("edge1", 1.0, -1.0e6, 1.0e6),
    ]
);
definition!(
    MATH_SIN,
    MathSin,
    Math,
    "Sine",
    SCALAR_IN,
    VALUE_ONLY,
    &[
        float("value", 0.0, -1.0e6, 1.0e6),
        float("frequency", 1.0, 0.0, 1000.0),
    ]
);
definition!(
    MATH_COS,
    MathCos,
    Math,
    "Cosine",
    SCALAR_IN,
    VALUE_ONLY,
    &[
        float("value", 0.0, -1.0e6, 1.0e6),
        float("frequency", 1.0, 0.0, 1000.0),
    ]
);
definition!(
    MATH_FRACT,
    MathFract,
    Math,
    "Fraction",
    SCALAR_IN,
    VALUE_ONLY,
    &[float("value", 0.0, -1.0e6, 1.0e6)]
);
definition!(
    MATH_DISTANCE,
    MathDistance,
    Math,
    "Radial Distance",
    UV_ONLY_IN,
    VALUE_ONLY,
    &[
        float("center_x", 0.5, -10.0, 10.0),
        float("center_y", 0.5, -10.0, 10.0),
    ]
);

// Color
definition!(
    COLOR_MIX,
    ColorMix,
    Color,
    "Mix",
    &[
        port("a", "A", PortType::Color),
        port("b", "B", PortType::Color),
        port("factor", "Factor", PortType::Float),
    ],
    COLOR_ONLY,
    &[
        color("a", [0.0, 0.0, 0.0]),
        color("b", [1.0, 1.0, 1.0]),
        float("factor", 0.5, 0.0, 1.0),
    ]
);
definition!(
    COLOR_RAMP,
    ColorRamp,
    Color,
    "Color Ramp",
    &[port("t", "T", PortType::Float)],
    COLOR_ONLY,
    &[
        float("t", 0.5, 0.0, 1.0),
        color("color1", [0.0, 0.0, 0.0]),
        color("color2", GRAY),
        color("color3", [1.0, 1.0, 1.0]),
        float("mid", 0.5, 0.001, 0.999),
    ]
);
definition!(
    COLOR_HSV,
    ColorHsv,
    Color,
    "HSV",
    &[
        port("h", "Hue", PortType::Float),
        port("s", "Saturation", PortType::Float),
        port("v", "Value", PortType::Float),
    ],
    COLOR_ONLY,
    &[
        float("h", 0.0, 0.0, 1.0),
        float("s", 1.0, 0.0, 1.0),
        float("v", 1.0, 0.0, 1.0),
    ]
);
definition!(
    COLOR_BRIGHTNESS_CONTRAST,
    ColorBrightnessContrast,
    Color,
    "Brightness/Contrast",
    &[port("color", "Color", PortType::Color)],
    COLOR_ONLY,
    &[
        color("color", GRAY),
        float("brightness", 0.0, -1.0, 1.0),
        float("contrast", 0.0, -1.0, 1.0),
    ]
);
definition!(
    COLOR_INVERT,
    ColorInvert,
    Color,
    "Invert",
    &[port("color", "Color", PortType::Color)],
    COLOR_ONLY,
    &[color("color", GRAY)]
);
definition!(
    COLOR_SPLIT,
    ColorSplit,
    Color,
    "Split RGB",
    &[port("color", "Color", PortType::Color)],
    &[
        port("r", "R", PortType::Float),
        port("g", "G", PortType::Float),
        port("b", "B", PortType::Float),
    ],
    &[color("color", GRAY)]
);
definition!(
    COLOR_COMBINE,
    ColorCombine,
    Color,
    "Combine RGB",
    &[
        port("r", "R", PortType::Float),
        port("g", "G", PortType::Float),
        port("b", "B", PortType::Float),
    ],
    COLOR_ONLY,
    &[
        float("r", 0.0, 0.0, 1.0),
        float("g", 0.0, 0.0, 1.0),
        float("b", 0.0, 0.0, 1.0),
    ]
);

// Transforms
definition!(
    TRANSFORM_SCALE,
    TransformScale,
    Transform,
    "Scale UV",
    UV_ONLY_IN,
    UV_ONLY_OUT,
    &[
        float("scale_x", 1.0, SCALE_MIN, SCALE_MAX),
        float("scale_y", 1.0, SCALE_MIN, SCALE_MAX),
    ]
);
definition!(
    TRANSFORM_ROTATE,
    TransformRotate,
    Transform,
    "Rotate UV",
    UV_ONLY_IN,
    UV_ONLY_OUT,
    &[
        float("angle", 0.0, -360.0, 360.0),
        float("center_x", 0.5, -10.0, 10.0),
        float("center_y", 0.5, -10.0, 10.0),
    ]
);
definition!(
    TRANSFORM_TRANSLATE,
    TransformTranslate,
    Transform,
    "Translate UV",
    UV_ONLY_IN,
    UV_ONLY_OUT,
    &[
        float("offset_x", 0.0, -100.0, 100.0),
        float("offset_y", 0.0, -100.0, 100.0),
    ]
);
definition!(
    TRANSFORM_TILE,
    TransformTile,
    Transform,
    "Tile UV",
    UV_ONLY_IN,
    UV_ONLY_OUT,
    &[float("tiles", 4.0, 1.0, 64.0)]
);
definition!(
    TRANSFORM_MIRROR,
    TransformMirror,
    Transform,
    "Mirror UV",
    UV_ONLY_IN,
    UV_ONLY_OUT,
    &[int("axis", 0, 0.0, 2.0)]
);
definition!(
    TRANSFORM_DISTORT,
    TransformDistort,
    Transform,
    "Noise Distort",
    UV_ONLY_IN,
    UV_ONLY_OUT,
    &[
        float("strength", 0.1, 0.0, 2.0),
        float("scale", 4.0, SCALE_MIN, SCALE_MAX),
        SEED,
    ]
);

// Masks
definition!(
    MASK_THRESHOLD,
    MaskThreshold,
    Mask,
    "Threshold",
    SCALAR_IN,
    VALUE_ONLY,
    &[
        float("value", 0.0, -1.0e6, 1.0e6),
        float("threshold", 0.5, 0.0, 1.0),
        float("softness", 0.0, 0.0, 1.0),
    ]
);
definition!(
    MASK_INVERT,
    MaskInvert,
    Mask,
    "Invert Mask",
    SCALAR_IN,
    VALUE_ONLY,
    &[float("value", 0.0, -1.0e6, 1.0e6)]
);
definition!(
    MASK_BLEND,
    MaskBlend,
    Mask,
    "Blend Masks",
    SCALAR_AB_IN,
    VALUE_ONLY,
    &[
        float("a", 0.0, 0.0, 1.0),
        float("b", 0.0, 0.0, 1.0),
        int("mode", 0, 0.0, 5.0),
        float("opacity", 1.0, 0.0, 1.0),
    ]
);

// Output
definition!(
    OUTPUT_PATTERN,
    OutputPattern,
    Output,
    "Pattern Output",
    &[
        port("color", "Color", PortType::Color),
        port("mask", "Mask", PortType::Float),
    ],
    COLOR_ONLY,
    &[]
);

impl NodeKind {
    /// The catalog entry for this kind.
    pub fn definition(self) -> &'static NodeDefinition {
        match self {
            NodeKind::UvInput => &UV_INPUT,
            NodeKind::ColorInput => &COLOR_INPUT,
            NodeKind::ValueInput => &VALUE_INPUT,
            NodeKind::NoisePerlin => &NOISE_PERLIN,
            NodeKind::NoiseFbm => &NOISE_FBM,
            NodeKind::NoiseVoronoi => &NOISE_VORONOI,
            NodeKind::NoiseWorley => &NOISE_WORLEY,
            NodeKind::PatternChecker => &PATTERN_CHECKER,
            NodeKind::PatternStripes => &PATTERN_STRIPES,
            NodeKind::PatternDots => &PATTERN_DOTS,
            NodeKind::PatternHexagon => &PATTERN_HEXAGON,
            NodeKind::PatternBrick => &PATTERN_BRICK,
            NodeKind::PatternRings => &PATTERN_RINGS,
            NodeKind::PatternSpiral => &PATTERN_SPIRAL,
            NodeKind::PatternGrid => &PATTERN_GRID,
            NodeKind::PatternTriangle => &PATTERN_TRIANGLE,
            NodeKind::MathAdd => &MATH_ADD,
            NodeKind::MathSubtract => &MATH_SUBTRACT,
            NodeKind::MathMultiply => &MATH_MULTIPLY,
            NodeKind::MathDivide => &MATH_DIVIDE,
            NodeKind::MathPower => &MATH_POWER,
            NodeKind::MathAbs => &MATH_ABS,
            NodeKind::MathClamp => &MATH_CLAMP,
            NodeKind::MathStep => &MATH_STEP,
            NodeKind::MathSmoothstep => &MATH_SMOOTHSTEP,
            NodeKind::MathSin => &MATH_SIN,
            NodeKind::MathCos => &MATH_COS,
            NodeKind::MathFract => &MATH_FRACT,
            NodeKind::MathMod => &MATH_MOD,
            NodeKind::MathMin => &MATH_MIN,
            NodeKind::MathMax => &MATH_MAX,
            NodeKind::MathDistance => &MATH_DISTANCE,
            NodeKind::ColorMix => &COLOR_MIX,
            NodeKind::ColorRamp => &COLOR_RAMP,
            NodeKind::ColorHsv => &COLOR_HSV,
            NodeKind::ColorBrightnessContrast => &COLOR_BRIGHTNESS_CONTRAST,
            NodeKind::ColorInvert => &COLOR_INVERT,
            NodeKind::ColorSplit => &COLOR_SPLIT,
            NodeKind::ColorCombine => &COLOR_COMBINE,
            NodeKind::TransformScale => &TRANSFORM_SCALE,
            NodeKind::TransformRotate => &TRANSFORM_ROTATE,
            NodeKind::TransformTranslate => &TRANSFORM_TRANSLATE,
            NodeKind::TransformTile => &TRANSFORM_TILE,
            NodeKind::TransformMirror => &TRANSFORM_MIRROR,
            NodeKind::TransformDistort => &TRANSFORM_DISTORT,
            NodeKind::MaskThreshold => &MASK_THRESHOLD,
            NodeKind::MaskInvert => &MASK_INVERT,
            NodeKind::MaskBlend => &MASK_BLEND,
            NodeKind::OutputPattern => &OUTPUT_PATTERN,
        }
    }

    /// Whether this kind produces the final per-texel color.
    pub fn is_output(self) -> bool {
        self.as_str().starts_with("output-")
    }

    /// Whether this kind samples the noise library.
    pub fn is_noise(self) -> bool {
        self.definition().category == NodeCategory::Noise
    }
}
