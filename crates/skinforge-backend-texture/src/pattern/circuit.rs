//! Circuit-board routine (circuit, neural, motherboard, processor, network).
//!
//! Pads sit on a regular lattice. Each pad may route an L-shaped trace to
//! a neighbour, and dense complex boards grow rectangular chips with pins.

use kurbo::{Point, Rect};

use super::{lattice, Finish, RoutineContext};
use crate::paint::Painter;

pub(crate) fn draw(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>) {
    let s = ctx.settings;
    let pitch = (s.element_size + s.element_spacing).max(12.0);
    let bounds = painter.user_bounds();
    let columns = lattice(bounds.x0 - pitch, bounds.x1, pitch);
    let rows = lattice(bounds.y0 - pitch, bounds.y1, pitch);

    let pad_chance = 0.2 + 0.8 * s.density / 100.0;
    let trace_chance = s.connection_density / 100.0;
    let chip_chance = s.complexity / 100.0 * 0.15;
    let pad_radius = (s.element_size * 0.18).max(s.line_width).max(1.5);
    let at = |i: i64, j: i64| Point::new((i as f64 + 0.5) * pitch, (j as f64 + 0.5) * pitch);

    // Chips first so traces run over them.
    for j in rows.clone() {
        for i in columns.clone() {
            if !ctx.rng.chance(chip_chance) {
                continue;
            }
            draw_chip(ctx, painter, at(i, j), pitch);
        }
    }

    for j in rows.clone() {
        for i in columns.clone() {
            if !ctx.rng.chance(pad_chance) {
                continue;
            }
            let from = at(i, j);

            if ctx.rng.chance(trace_chance) {
                let di = 1 + ctx.rng.index(2) as i64;
                let dj = ctx.rng.index(3) as i64 - 1;
                let to = at(i + di, j + dj);
                // Horizontal run, then vertical drop.
                let corner = Point::new(to.x, from.y);
                let color = ctx.pick_color();
                let paint = ctx.paint(&Finish::flat(color, 0.8).raised(0.6), from);
                painter.stroke_polyline(&[from, corner, to], s.line_width, &paint);
            }

            let highlight = ctx.palette.highlight;
            let paint = ctx.paint(&Finish::flat(highlight, 1.0), from);
            painter.fill_circle(from, pad_radius, &paint);
            let background = ctx.palette.background;
            let hole = ctx.paint(&Finish::flat(background, 0.2).raised(0.1), from);
            painter.fill_circle(from, pad_radius * 0.4, &hole);
        }
    }
}

fn draw_chip(ctx: &mut RoutineContext<'_>, painter: &mut Painter<'_>, centre: Point, pitch: f64) {
    let half = pitch * (0.5 + ctx.rng.next_f64() * 0.5);
    let body = Rect::new(
        centre.x - half,
        centre.y - half * 0.7,
        centre.x + half,
        centre.y + half * 0.7,
    );
    let depth = ctx.depth();
    let color = ctx.palette.element(3);
    let paint = ctx.paint(
        &Finish::flat(color, 0.6).raised(0.5 + 0.5 * depth).exposed(0.9),
        centre,
    );
    painter.fill_rect(body, &paint);

    let pins = ((body.width() / 6.0).floor() as usize).max(2);
    let step = body.width() / pins as f64;
    let pin_color = ctx.palette.highlight;
    let pin_len = ctx.settings.line_width * 2.0 + 2.0;
    for k in 0..pins {
        let x = body.x0 + step * (k as f64 + 0.5);
        let paint = ctx.paint(&Finish::flat(pin_color, 0.9).raised(0.4), Point::new(x, body.y0));
        let w = (step * 0.4).max(1.0);
        painter.fill_rect(Rect::new(x - w / 2.0, body.y0 - pin_len, x + w / 2.0, body.y0), &paint);
        painter.fill_rect(Rect::new(x - w / 2.0, body.y1, x + w / 2.0, body.y1 + pin_len), &paint);
    }
}
