//! Values flowing through graph ports.

use skinforge_spec::ParamValue;

use crate::color::Color;

/// A port value: float, 2D vector, or RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeValue {
    Float(f64),
    Vector2(f64, f64),
    Color(Color),
}

impl NodeValue {
    /// Fallback for anything that cannot be resolved.
    pub const NEUTRAL: NodeValue = NodeValue::Color(Color::NEUTRAL);

    /// Float view: a vector yields `x`, a color its Rec.709 luminance.
    pub fn as_float(&self) -> f64 {
        match *self {
            NodeValue::Float(v) => v,
            NodeValue::Vector2(x, _) => x,
            NodeValue::Color(c) => c.luminance(),
        }
    }

    /// Vector view: a float is splatted, a color yields `(r, g)`.
    pub fn as_vec2(&self) -> (f64, f64) {
        match *self {
            NodeValue::Float(v) => (v, v),
            NodeValue::Vector2(x, y) => (x, y),
            NodeValue::Color(c) => (c.r, c.g),
        }
    }

    /// Color view: a float is gray, a vector is `(x, y, 0)`.
    pub fn as_color(&self) -> Color {
        match *self {
            NodeValue::Float(v) => Color::gray(v),
            NodeValue::Vector2(x, y) => Color::rgb(x, y, 0.0),
            NodeValue::Color(c) => c,
        }
    }
}

impl Default for NodeValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<ParamValue> for NodeValue {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Int(v) => NodeValue::Float(v as f64),
            ParamValue::Float(v) => NodeValue::Float(v),
            ParamValue::Color(c) => NodeValue::Color(Color::from_array(c)),
        }
    }
}

impl From<f64> for NodeValue {
    fn from(v: f64) -> Self {
        NodeValue::Float(v)
    }
}

impl From<Color> for NodeValue {
    fn from(c: Color) -> Self {
        NodeValue::Color(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_coercions() {
        let v = NodeValue::Float(0.25);
        assert_eq!(v.as_vec2(), (0.25, 0.25));
        assert_eq!(v.as_color(), Color::gray(0.25));
    }

    #[test]
    fn vector_coercions() {
        let v = NodeValue::Vector2(0.1, 0.7);
        assert_eq!(v.as_float(), 0.1);
        assert_eq!(v.as_color(), Color::rgb(0.1, 0.7, 0.0));
    }

    #[test]
    fn color_coercions() {
        let v = NodeValue::Color(Color::rgb(1.0, 0.0, 0.0));
        assert!((v.as_float() - 0.2126).abs() < 1e-12);
        assert_eq!(v.as_vec2(), (1.0, 0.0));
    }

    #[test]
    fn neutral_is_mid_gray() {
        assert_eq!(NodeValue::NEUTRAL.as_color(), Color::gray(0.5));
        assert!((NodeValue::NEUTRAL.as_float() - 0.5).abs() < 1e-12);
    }
}
