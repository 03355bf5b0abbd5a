//! Preset bundles: partial settings applied atomically.
//!
//! A preset is a JSON patch over [`SkinSettings`]. Applying it merges the
//! patch into a serialized copy of the settings and deserializes the result,
//! so either every field in the patch takes effect or the call fails and
//! the caller keeps its settings untouched.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::SpecError;
use crate::settings::SkinSettings;

/// A named partial-settings bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Object whose keys mirror [`SkinSettings`] (`pattern`, `mask`, ...).
    pub patch: Value,
}

impl Preset {
    pub fn new(name: impl Into<String>, description: impl Into<String>, patch: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            patch,
        }
    }

    /// Return `base` with this preset's fields overlaid.
    pub fn apply(&self, base: &SkinSettings) -> Result<SkinSettings, SpecError> {
        let mut merged = serde_json::to_value(base)?;
        merge(&mut merged, &self.patch);
        Ok(serde_json::from_value(merged)?)
    }

    /// Built-in presets shipped with the editor.
    pub fn builtin() -> Vec<Preset> {
        vec![
            Preset::new(
                "neon-circuit",
                "Glowing circuit traces with a glossy pearl coat",
                json!({
                    "pattern": {
                        "style": "circuit",
                        "color_scheme": "neon",
                        "density": 60.0,
                        "connection_density": 70.0,
                        "line_width": 2.0,
                    },
                    "roughness": { "base": 25.0, "variation": 10.0 },
                    "pearlescence": { "intensity": 70.0, "frequency": 8.0 },
                }),
            ),
            Preset::new(
                "hex-armor",
                "Raised armored hexagon plates",
                json!({
                    "pattern": {
                        "style": "honeycomb",
                        "color_scheme": "cyber",
                        "element_size": 28.0,
                        "fill_amount": 80.0,
                    },
                    "normal": { "strength": 2.0 },
                    "ao": { "strength": 0.8 },
                }),
            ),
            Preset::new(
                "carbon-fiber",
                "Tight carbon weave with low roughness",
                json!({
                    "pattern": {
                        "style": "carbon",
                        "color_scheme": "monochrome",
                        "element_size": 10.0,
                    },
                    "roughness": { "base": 20.0, "variation": 5.0 },
                }),
            ),
            Preset::new(
                "lava-terrain",
                "Molten terrain with deep displacement",
                json!({
                    "pattern": {
                        "style": "terrain",
                        "color_scheme": "lava",
                        "complexity": 70.0,
                        "seamless": true,
                    },
                    "height": { "scale": 1.5 },
                    "ao": { "strength": 0.9 },
                }),
            ),
            Preset::new(
                "ice-cubes",
                "Isometric cube field lit from above",
                json!({
                    "pattern": {
                        "style": "cubes",
                        "color_scheme": "ice",
                        "light_angle": 30.0,
                        "light_elevation": 60.0,
                        "depth_intensity": 70.0,
                    },
                    "pearlescence": { "intensity": 40.0 },
                }),
            ),
            Preset::new(
                "gold-rings",
                "Concentric gold rings with a metallic mask",
                json!({
                    "pattern": {
                        "style": "concentric",
                        "color_scheme": "gold",
                        "line_width": 4.0,
                    },
                    "mask": { "base_coat": 20.0, "red": 100.0, "green": 80.0, "blue": 10.0 },
                }),
            ),
        ]
    }

    /// Look up a built-in preset by name.
    pub fn find_builtin(name: &str) -> Option<Preset> {
        Self::builtin().into_iter().find(|p| p.name == name)
    }
}

/// Deep-merge `patch` into `target`. Objects merge key by key; any other
/// value replaces the target wholesale.
fn merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ColorScheme, PatternStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_overlays_only_patched_fields() {
        let base = SkinSettings::default();
        let preset = Preset::find_builtin("carbon-fiber").unwrap();
        let applied = preset.apply(&base).unwrap();

        assert_eq!(applied.pattern.style, PatternStyle::Carbon);
        assert_eq!(applied.pattern.color_scheme, ColorScheme::Monochrome);
        assert_eq!(applied.roughness.base, 20.0);
        // Untouched blocks and fields stay as they were.
        assert_eq!(applied.pattern.density, base.pattern.density);
        assert_eq!(applied.mask, base.mask);
    }

    #[test]
    fn a_bad_patch_fails_without_partial_effect() {
        let base = SkinSettings::default();
        let preset = Preset::new(
            "broken",
            "",
            json!({ "pattern": { "density": 10.0, "style": "no-such-style" } }),
        );
        assert!(preset.apply(&base).is_err());
        assert_eq!(base, SkinSettings::default());
    }

    #[test]
    fn every_builtin_applies_cleanly() {
        let base = SkinSettings::default();
        for preset in Preset::builtin() {
            let applied = preset.apply(&base);
            assert!(applied.is_ok(), "preset {} failed: {:?}", preset.name, applied);
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let presets = Preset::builtin();
        for (i, p) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|q| q.name != p.name));
        }
    }
}
