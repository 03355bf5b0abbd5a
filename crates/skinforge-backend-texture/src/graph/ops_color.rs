//! Color nodes (ramp, hsv, brightness/contrast).

use crate::color::Color;

/// Three-stop ramp with stops at `0`, `mid` and `1`.
pub(super) fn ramp(stops: &[Color; 3], mid: f64, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mid = mid.clamp(0.001, 0.999);
    if t <= mid {
        stops[0].lerp(&stops[1], t / mid)
    } else {
        stops[1].lerp(&stops[2], (t - mid) / (1.0 - mid))
    }
}

/// HSV with hue in turns (wrapping) and saturation/value clamped.
pub(super) fn hsv(h: f64, s: f64, v: f64) -> Color {
    Color::from_hsv(h.rem_euclid(1.0) * 360.0, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
}

/// Contrast pivots on mid gray; brightness is a flat offset.
pub(super) fn brightness_contrast(c: Color, brightness: f64, contrast: f64) -> Color {
    let k = 1.0 + contrast;
    let adjust = |x: f64| (x - 0.5) * k + 0.5 + brightness;
    Color::rgb(adjust(c.r), adjust(c.g), adjust(c.b)).clamp()
}
