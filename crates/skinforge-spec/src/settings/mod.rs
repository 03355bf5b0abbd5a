//! Render settings: the fixed-pattern settings plus one block per channel.

mod channels;
mod pattern;

pub use channels::*;
pub use pattern::*;

use serde::{Deserialize, Serialize};

use crate::validation::{AdjustedField, Sanitizer};

/// Everything the renderer reads besides resolution and graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinSettings {
    pub pattern: PatternSettings,
    pub mask: MaskSettings,
    pub normal: NormalMapSettings,
    pub roughness: RoughnessSettings,
    pub pearlescence: PearlescenceSettings,
    pub ao: AoSettings,
    pub height: HeightSettings,
}

impl SkinSettings {
    /// Return a copy with every block clamped into range.
    pub fn sanitized(&self) -> Self {
        self.sanitize_report().0
    }

    /// Clamp every block into range and report the fields that changed.
    pub fn sanitize_report(&self) -> (Self, Vec<AdjustedField>) {
        let mut s = Sanitizer::new();
        let clean = Self {
            pattern: self.pattern.sanitize_with(&mut s),
            mask: self.mask.sanitize_with(&mut s),
            normal: self.normal.sanitize_with(&mut s),
            roughness: self.roughness.sanitize_with(&mut s),
            pearlescence: self.pearlescence.sanitize_with(&mut s),
            ao: self.ao.sanitize_with(&mut s),
            height: self.height.sanitize_with(&mut s),
        };
        (clean, s.into_adjusted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_fields_across_blocks() {
        let mut settings = SkinSettings::default();
        settings.pattern.density = -1.0;
        settings.height.scale = 9.0;
        let (clean, adjusted) = settings.sanitize_report();
        assert_eq!(clean.pattern.density, 0.0);
        assert_eq!(clean.height.scale, 4.0);
        let fields: Vec<&str> = adjusted.iter().map(|a| a.field.as_str()).collect();
        assert_eq!(fields, vec!["pattern.density", "height.scale"]);
    }
}
