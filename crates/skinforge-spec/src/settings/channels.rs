//! Per-channel settings consumed read-only by the renderer.

use serde::{Deserialize, Serialize};

use crate::validation::Sanitizer;

/// RGB intensity mask settings. All fields are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskSettings {
    /// Mask intensity of the untouched background.
    pub base_coat: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub invert: bool,
}

impl Default for MaskSettings {
    fn default() -> Self {
        Self {
            base_coat: 0.0,
            red: 100.0,
            green: 100.0,
            blue: 100.0,
            invert: false,
        }
    }
}

impl MaskSettings {
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("mask");
        Self {
            base_coat: s.range("base_coat", self.base_coat, 0.0, 100.0),
            red: s.range("red", self.red, 0.0, 100.0),
            green: s.range("green", self.green, 0.0, 100.0),
            blue: s.range("blue", self.blue, 0.0, 100.0),
            invert: self.invert,
        }
    }
}

/// Tangent-space normal map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalMapSettings {
    /// Tilt multiplier, `0..=10`.
    pub strength: f64,
    /// Flip the encoded tilt (`255 - x` on R and G).
    pub invert_height: bool,
}

impl Default for NormalMapSettings {
    fn default() -> Self {
        Self {
            strength: 1.0,
            invert_height: false,
        }
    }
}

impl NormalMapSettings {
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("normal");
        Self {
            strength: s.range("strength", self.strength, 0.0, 10.0),
            invert_height: self.invert_height,
        }
    }
}

/// Roughness map settings. `base` and `variation` are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoughnessSettings {
    pub base: f64,
    pub variation: f64,
    pub invert: bool,
}

impl Default for RoughnessSettings {
    fn default() -> Self {
        Self {
            base: 50.0,
            variation: 20.0,
            invert: false,
        }
    }
}

impl RoughnessSettings {
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("roughness");
        Self {
            base: s.range("base", self.base, 0.0, 100.0),
            variation: s.range("variation", self.variation, 0.0, 100.0),
            invert: self.invert,
        }
    }
}

/// Pearlescence (iridescent sparkle) map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PearlescenceSettings {
    /// Percentage, `0..=100`.
    pub intensity: f64,
    /// Shimmer band frequency, `0..=50`.
    pub frequency: f64,
}

impl Default for PearlescenceSettings {
    fn default() -> Self {
        Self {
            intensity: 50.0,
            frequency: 5.0,
        }
    }
}

impl PearlescenceSettings {
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("pearlescence");
        Self {
            intensity: s.range("intensity", self.intensity, 0.0, 100.0),
            frequency: s.range("frequency", self.frequency, 0.0, 50.0),
        }
    }
}

/// Ambient occlusion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AoSettings {
    /// Occlusion strength, `0..=1`.
    pub strength: f64,
}

impl Default for AoSettings {
    fn default() -> Self {
        Self { strength: 0.5 }
    }
}

impl AoSettings {
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("ao");
        Self {
            strength: s.range("strength", self.strength, 0.0, 1.0),
        }
    }
}

/// Height/displacement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightSettings {
    /// Height multiplier, `0..=4`.
    pub scale: f64,
}

impl Default for HeightSettings {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl HeightSettings {
    pub fn sanitize_with(&self, s: &mut Sanitizer) -> Self {
        s.scope("height");
        Self {
            scale: s.range("scale", self.scale, 0.0, 4.0),
        }
    }
}
