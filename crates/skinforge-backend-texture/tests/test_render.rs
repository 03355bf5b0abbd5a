//! End-to-end tests for the fixed pattern path.
//!
//! These cover determinism, channel isolation under the inversion toggles,
//! and degenerate resolutions across every style id.

use skinforge_backend_texture::paint::Painter;
use skinforge_backend_texture::pattern::grid;
use skinforge_backend_texture::{render_skin, Channel, ChannelSet, Surface, TextureSet};
use skinforge_spec::{PatternStyle, SkinSettings};

fn settings_for(style: PatternStyle) -> SkinSettings {
    let mut settings = SkinSettings::default();
    settings.pattern.style = style;
    settings
}

fn assert_only_changed(a: &TextureSet, b: &TextureSet, changed: Channel) {
    for channel in Channel::ALL {
        let same = a.get(channel) == b.get(channel);
        if channel == changed {
            assert!(!same, "{} should differ", channel);
        } else {
            assert!(same, "{} should be untouched", channel);
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

/// Every style renders the same bytes twice.
#[test]
fn test_every_style_is_deterministic() {
    for style in PatternStyle::ALL {
        let settings = settings_for(*style);
        let a = render_skin(&settings, 32).unwrap();
        let b = render_skin(&settings, 32).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint(), "style {} differs", style);
    }
}

/// Degenerate and odd sizes render without panicking.
#[test]
fn test_every_style_survives_tiny_resolutions() {
    for style in PatternStyle::ALL {
        for size in [0, 1, 2, 7] {
            let set = render_skin(&settings_for(*style), size).unwrap();
            assert_eq!(set.size(), size.max(1));
        }
    }
}

/// Rotation and seamless wrapping are still reproducible.
#[test]
fn test_rotated_seamless_render_is_deterministic() {
    let mut settings = settings_for(PatternStyle::Hexagon);
    settings.pattern.rotation = 33.0;
    settings.pattern.seamless = true;
    let a = render_skin(&settings, 40).unwrap();
    let b = render_skin(&settings, 40).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Seamless tiling
// ============================================================================

/// Mean red-channel difference between columns `a` and `b`.
fn column_delta(surface: &Surface, a: u32, b: u32) -> f64 {
    let size = surface.size();
    let total: u32 = (0..size)
        .map(|y| (surface.get(a, y)[0] as i32 - surface.get(b, y)[0] as i32).unsigned_abs())
        .sum();
    total as f64 / size as f64
}

/// Mean red-channel difference between rows `a` and `b`.
fn row_delta(surface: &Surface, a: u32, b: u32) -> f64 {
    let size = surface.size();
    let total: u32 = (0..size)
        .map(|x| (surface.get(x, a)[0] as i32 - surface.get(x, b)[0] as i32).unsigned_abs())
        .sum();
    total as f64 / size as f64
}

/// Asserts the wrap edge is no rougher than the roughest interior step.
fn assert_wraps(style: PatternStyle, surface: &Surface) {
    let last = surface.size() - 1;
    let interior_columns = (0..last)
        .map(|x| column_delta(surface, x, x + 1))
        .fold(0.0, f64::max);
    let interior_rows = (0..last)
        .map(|y| row_delta(surface, y, y + 1))
        .fold(0.0, f64::max);

    let seam_column = column_delta(surface, last, 0);
    let seam_row = row_delta(surface, last, 0);
    assert!(
        seam_column <= interior_columns * 1.5 + 4.0,
        "style {}: column seam {:.2} vs interior {:.2}",
        style,
        seam_column,
        interior_columns
    );
    assert!(
        seam_row <= interior_rows * 1.5 + 4.0,
        "style {}: row seam {:.2} vs interior {:.2}",
        style,
        seam_row,
        interior_rows
    );
}

/// With seamless on, every style continues from its last column into its
/// first and from its last row into its first.
#[test]
fn test_every_style_tiles_when_seamless() {
    for style in PatternStyle::ALL {
        let mut settings = settings_for(*style);
        settings.pattern.seamless = true;
        let set = render_skin(&settings, 128).unwrap();
        assert_wraps(*style, set.get(Channel::Height));
        assert_wraps(*style, set.get(Channel::Pattern));
    }
}

/// Noise fields stay tileable at sizes that do not divide the cell size.
#[test]
fn test_noise_fields_tile_at_odd_sizes() {
    for style in [PatternStyle::Noise, PatternStyle::Voronoi, PatternStyle::Terrain] {
        let mut settings = settings_for(style);
        settings.pattern.seamless = true;
        settings.pattern.element_size = 13.0;
        for size in [50, 97] {
            let set = render_skin(&settings, size).unwrap();
            assert_wraps(style, set.get(Channel::Height));
        }
    }
}

/// The same field without seamless is not forced to tile, so the seamless
/// render must differ from it.
#[test]
fn test_seamless_changes_noise_fields() {
    let mut settings = settings_for(PatternStyle::Noise);
    let plain = render_skin(&settings, 64).unwrap();
    settings.pattern.seamless = true;
    let tiled = render_skin(&settings, 64).unwrap();
    assert_ne!(plain.get(Channel::Height), tiled.get(Channel::Height));
}

// ============================================================================
// Channel isolation
// ============================================================================

#[test]
fn test_invert_mask_changes_only_the_mask() {
    let mut settings = SkinSettings::default();
    let plain = render_skin(&settings, 32).unwrap();
    settings.mask.invert = true;
    let inverted = render_skin(&settings, 32).unwrap();

    assert_only_changed(&plain, &inverted, Channel::Mask);
    let a = plain.get(Channel::Mask).get(5, 9);
    let b = inverted.get(Channel::Mask).get(5, 9);
    assert_eq!([b[0], b[1], b[2]], [255 - a[0], 255 - a[1], 255 - a[2]]);
    assert_eq!(b[3], 255);
}

#[test]
fn test_invert_roughness_changes_only_roughness() {
    let mut settings = settings_for(PatternStyle::Carbon);
    let plain = render_skin(&settings, 32).unwrap();
    settings.roughness.invert = true;
    let inverted = render_skin(&settings, 32).unwrap();
    assert_only_changed(&plain, &inverted, Channel::Roughness);
}

#[test]
fn test_invert_height_leaves_normal_blue_untouched() {
    let mut settings = settings_for(PatternStyle::Cubes);
    let plain = render_skin(&settings, 32).unwrap();
    settings.normal.invert_height = true;
    let inverted = render_skin(&settings, 32).unwrap();

    assert_only_changed(&plain, &inverted, Channel::Normal);
    for (a, b) in plain
        .get(Channel::Normal)
        .as_bytes()
        .chunks_exact(4)
        .zip(inverted.get(Channel::Normal).as_bytes().chunks_exact(4))
    {
        assert_eq!(b[0], 255 - a[0]);
        assert_eq!(b[1], 255 - a[1]);
        assert_eq!(b[2], a[2]);
    }
}

// ============================================================================
// Grid sizing
// ============================================================================

/// `ceil(256 / cell) + 1` vertical lines on an unrotated 256 canvas.
#[test]
fn test_grid_line_count_at_256() {
    let mut set = ChannelSet::try_new(256).unwrap();
    let painter = Painter::new(&mut set);
    for density in [0.0, 25.0, 50.0, 100.0] {
        let mut settings = settings_for(PatternStyle::Grid);
        settings.pattern.density = density;
        let cell = grid::cell_size(&settings.pattern);
        assert_eq!(cell, (80.0 - density * 0.4 + 20.0 * 0.3_f64).floor().max(10.0));

        let layout = grid::layout(&settings.pattern, painter.user_bounds());
        assert_eq!(layout.vertical_lines(), (256.0 / cell).ceil() as usize + 1);
    }
}

/// Grid lines land where the layout says they do.
#[test]
fn test_grid_lines_are_painted_on_the_layout() {
    let mut settings = settings_for(PatternStyle::Grid);
    settings.pattern.complexity = 0.0;
    settings.pattern.fill_amount = 0.0;
    let set = render_skin(&settings, 128).unwrap();
    let cell = grid::cell_size(&settings.pattern) as u32;

    let pattern = set.get(Channel::Pattern);
    let on_line = pattern.get(cell, cell / 2);
    let off_line = pattern.get(cell / 2, cell / 2);
    assert_ne!(on_line, off_line);
    assert_eq!(pattern.get(cell, cell / 2 + 3), on_line);
}
