//! Named color schemes.

use skinforge_spec::ColorScheme;

use crate::color::Rgb8;

/// Background, four element colors, and a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb8,
    pub elements: [Rgb8; 4],
    pub highlight: Rgb8,
}

impl Palette {
    /// Element color `i`, cycling through the four slots.
    pub fn element(&self, i: usize) -> Rgb8 {
        self.elements[i % self.elements.len()]
    }

    /// Piecewise-linear ramp background, elements, highlight over `[0, 1]`.
    pub fn ramp(&self, t: f64) -> Rgb8 {
        let stops = [
            self.background,
            self.elements[0],
            self.elements[1],
            self.elements[2],
            self.highlight,
        ];
        let x = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let i = (x.floor() as usize).min(stops.len() - 2);
        super::mix8(stops[i], stops[i + 1], x - i as f64)
    }
}

const NEON: Palette = Palette {
    background: [10, 10, 26],
    elements: [[0, 255, 204], [255, 0, 170], [0, 170, 255], [170, 255, 0]],
    highlight: [255, 255, 255],
};
const CYBER: Palette = Palette {
    background: [13, 2, 33],
    elements: [[255, 42, 109], [5, 217, 232], [209, 247, 255], [1, 1, 43]],
    highlight: [255, 211, 25],
};
const OCEAN: Palette = Palette {
    background: [2, 24, 43],
    elements: [[0, 119, 182], [0, 180, 216], [144, 224, 239], [3, 4, 94]],
    highlight: [202, 240, 248],
};
const SUNSET: Palette = Palette {
    background: [38, 7, 36],
    elements: [[255, 94, 77], [255, 165, 0], [255, 206, 84], [180, 40, 110]],
    highlight: [255, 240, 200],
};
const FOREST: Palette = Palette {
    background: [16, 30, 18],
    elements: [[45, 106, 79], [64, 145, 108], [116, 198, 157], [27, 67, 50]],
    highlight: [216, 243, 220],
};
const MONOCHROME: Palette = Palette {
    background: [18, 18, 18],
    elements: [[80, 80, 80], [128, 128, 128], [176, 176, 176], [224, 224, 224]],
    highlight: [255, 255, 255],
};
const GOLD: Palette = Palette {
    background: [26, 20, 8],
    elements: [[212, 175, 55], [255, 215, 0], [184, 134, 11], [238, 232, 170]],
    highlight: [255, 250, 220],
};
const ICE: Palette = Palette {
    background: [225, 240, 250],
    elements: [[162, 210, 255], [189, 224, 254], [112, 161, 215], [72, 120, 180]],
    highlight: [255, 255, 255],
};
const LAVA: Palette = Palette {
    background: [20, 4, 0],
    elements: [[255, 69, 0], [255, 140, 0], [178, 34, 34], [255, 215, 0]],
    highlight: [255, 250, 205],
};
const TOXIC: Palette = Palette {
    background: [10, 20, 5],
    elements: [[57, 255, 20], [204, 255, 0], [0, 255, 128], [120, 200, 30]],
    highlight: [240, 255, 200],
};

/// The palette for a scheme.
pub fn palette(scheme: ColorScheme) -> &'static Palette {
    match scheme {
        ColorScheme::Neon => &NEON,
        ColorScheme::Cyber => &CYBER,
        ColorScheme::Ocean => &OCEAN,
        ColorScheme::Sunset => &SUNSET,
        ColorScheme::Forest => &FOREST,
        ColorScheme::Monochrome => &MONOCHROME,
        ColorScheme::Gold => &GOLD,
        ColorScheme::Ice => &ICE,
        ColorScheme::Lava => &LAVA,
        ColorScheme::Toxic => &TOXIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scheme_has_distinct_background_and_elements() {
        for scheme in ColorScheme::ALL {
            let p = palette(*scheme);
            assert!(p.elements.iter().all(|e| *e != p.background), "{}", scheme);
        }
    }

    #[test]
    fn ramp_hits_its_end_stops() {
        let p = palette(ColorScheme::Lava);
        assert_eq!(p.ramp(0.0), p.background);
        assert_eq!(p.ramp(1.0), p.highlight);
        assert_eq!(p.ramp(0.25), p.elements[0]);
    }

    #[test]
    fn element_index_wraps() {
        let p = palette(ColorScheme::Neon);
        assert_eq!(p.element(5), p.element(1));
    }
}
