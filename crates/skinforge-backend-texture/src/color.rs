//! Color utilities for texture generation.

/// 8-bit RGB triple as stored in a channel surface.
pub type Rgb8 = [u8; 3];

/// Convert a `0..=255` float to a byte, rounding and saturating.
///
/// NaN maps to 0.
#[inline]
pub fn byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Gray byte triple.
#[inline]
pub fn gray8(v: f64) -> Rgb8 {
    let b = byte(v);
    [b, b, b]
}

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Neutral fallback used wherever a value cannot be resolved.
    pub const NEUTRAL: Color = Color::gray(0.5);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub const fn from_array(c: [f64; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }

    /// Create a color from HSV values.
    /// - h: hue in degrees (0-360)
    /// - s: saturation (0-1)
    /// - v: value/brightness (0-1)
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        if s <= 0.0 {
            return Self::gray(v);
        }

        let h = h % 360.0;
        let h = if h < 0.0 { h + 360.0 } else { h };
        let h = h / 60.0;

        let i = h.floor() as i32;
        let f = h - i as f64;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    /// Rec.709 relative luminance.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Multiply color by a scalar.
    pub fn scale(&self, factor: f64) -> Color {
        Color {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// `1 - c` per component.
    pub fn invert(&self) -> Color {
        Color {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> Rgb8 {
        let c = self.clamp();
        [byte(c.r * 255.0), byte(c.g * 255.0), byte(c.b * 255.0)]
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        Self {
            r: rgb[0] as f64 / 255.0,
            g: rgb[1] as f64 / 255.0,
            b: rgb[2] as f64 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(Color::from_hsv(77.0, 0.0, 0.4), Color::gray(0.4));
    }

    #[test]
    fn test_luminance_weights_sum_to_one() {
        assert!((Color::white().luminance() - 1.0).abs() < 1e-12);
        assert_eq!(Color::black().luminance(), 0.0);
    }

    #[test]
    fn neutral_rounds_up_to_128() {
        assert_eq!(Color::NEUTRAL.to_rgb8(), [128, 128, 128]);
    }

    #[test]
    fn byte_saturates() {
        assert_eq!(byte(-4.0), 0);
        assert_eq!(byte(300.0), 255);
        assert_eq!(byte(f64::NAN), 0);
        assert_eq!(byte(127.5), 128);
    }
}
