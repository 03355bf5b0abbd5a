//! Grid routine (grid, blueprint, tiles).

use std::ops::RangeInclusive;

use kurbo::{Point, Rect};
use skinforge_spec::PatternSettings;

use super::{Finish, RoutineContext};
use crate::paint::Painter;

/// Smallest cell edge the grid will produce, whatever the settings.
pub const MIN_CELL: f64 = 10.0;

/// Cell size and the line indices needed to cover a region.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Cell edge in pixels, never below [`MIN_CELL`].
    pub cell: f64,
    /// Indices `i` of vertical lines at `x = i * cell`.
    pub columns: RangeInclusive<i64>,
    /// Indices `j` of horizontal lines at `y = j * cell`.
    pub rows: RangeInclusive<i64>,
}

impl GridLayout {
    pub fn vertical_lines(&self) -> usize {
        self.columns.clone().count()
    }

    pub fn horizontal_lines(&self) -> usize {
        self.rows.clone().count()
    }
}

/// `max(10, floor(80 - density * 0.4 + spacing * 0.3))`.
pub fn cell_size(settings: &PatternSettings) -> f64 {
    (80.0 - settings.density * 0.4 + settings.element_spacing * 0.3)
        .floor()
        .max(MIN_CELL)
}

/// Layout covering `bounds` (user space).
///
/// For an unrotated `size x size` canvas this yields
/// `ceil(size / cell) + 1` lines per axis.
pub fn layout(settings: &PatternSettings, bounds: Rect) -> GridLayout {
    let cell = cell_size(settings);
    let span = |lo: f64, hi: f64| (lo / cell).floor() as i64..=(hi / cell).ceil() as i64;
    GridLayout {
        cell,
        columns: span(bounds.x0, bounds.x1),
        rows: span(bounds.y0, bounds.y1),
    }
}

pub(crate) fn draw(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let bounds = painter.user_bounds();
    let grid = layout(ctx.settings, bounds);
    let cell = grid.cell;
    let half = ctx.settings.line_width / 2.0;

    // Occasional filled tiles under the lines.
    let tile_chance = ctx.fill() * 0.3;
    for j in grid.rows.clone() {
        for i in grid.columns.clone() {
            if !ctx.rng.chance(tile_chance) {
                continue;
            }
            let x = i as f64 * cell;
            let y = j as f64 * cell;
            let inset = half + ctx.settings.element_spacing * 0.05;
            let rect = Rect::new(x + inset, y + inset, x + cell - inset, y + cell - inset);
            let color = ctx.pick_color();
            let paint = ctx.paint(&Finish::flat(color, 0.4).raised(0.3), rect.center());
            painter.fill_rect(rect, &paint);
        }
    }

    let line_color = ctx.palette.element(0);
    for i in grid.columns.clone() {
        let x = i as f64 * cell;
        let paint = ctx.paint(&Finish::flat(line_color, 1.0), Point::new(x, bounds.y0));
        painter.fill_rect(Rect::new(x - half, bounds.y0, x + half, bounds.y1), &paint);
    }
    for j in grid.rows.clone() {
        let y = j as f64 * cell;
        let paint = ctx.paint(&Finish::flat(line_color, 1.0), Point::new(bounds.x0, y));
        painter.fill_rect(Rect::new(bounds.x0, y - half, bounds.x1, y + half), &paint);
    }

    // Brighter node dots at intersections, sparser with lower complexity.
    let node_chance = ctx.settings.complexity / 100.0;
    let highlight = ctx.palette.highlight;
    for j in grid.rows.clone() {
        for i in grid.columns.clone() {
            if ctx.rng.chance(node_chance) {
                let c = Point::new(i as f64 * cell, j as f64 * cell);
                let paint = ctx.paint(&Finish::flat(highlight, 1.0), c);
                painter.fill_circle(c, half * 2.0 + 1.0, &paint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_follows_density_and_spacing() {
        let s = PatternSettings {
            density: 50.0,
            element_spacing: 20.0,
            ..Default::default()
        };
        // 80 - 20 + 6
        assert_eq!(cell_size(&s), 66.0);
    }

    #[test]
    fn cell_size_never_drops_below_minimum() {
        let s = PatternSettings {
            density: 100.0,
            element_spacing: 0.0,
            ..Default::default()
        };
        // 80 - 40 = 40 stays; push further with a degenerate density.
        assert_eq!(cell_size(&s), 40.0);
        let s = PatternSettings {
            density: 1000.0,
            element_spacing: 0.0,
            ..Default::default()
        };
        assert_eq!(cell_size(&s), MIN_CELL);
    }

    #[test]
    fn line_count_for_unrotated_canvas() {
        let s = PatternSettings::default();
        let l = layout(&s, Rect::new(0.0, 0.0, 256.0, 256.0));
        let expected = (256.0 / l.cell).ceil() as usize + 1;
        assert_eq!(l.vertical_lines(), expected);
        assert_eq!(l.horizontal_lines(), expected);
    }
}
