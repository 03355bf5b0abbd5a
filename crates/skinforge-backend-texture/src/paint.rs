//! Lockstep painter over a [`ChannelSet`].
//!
//! Pattern routines never touch surfaces directly; they describe shapes in
//! user space and hand a [`ChannelPaint`] that carries one color for every
//! channel. The painter rasterizes by mapping each candidate pixel centre
//! back through the inverse transform and testing containment in user
//! space, so a global rotation applies to every primitive alike.

use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape, Vec2};

use crate::color::Rgb8;
use crate::surface::{blend_texel, Channel, ChannelSet};

/// One color per output channel plus a shared coverage alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelPaint {
    pub pattern: Rgb8,
    pub mask: Rgb8,
    pub normal: Rgb8,
    pub roughness: Rgb8,
    pub pearlescence: Rgb8,
    pub ao: Rgb8,
    pub height: Rgb8,
    /// Source-over alpha applied identically on every channel.
    pub alpha: f64,
}

impl ChannelPaint {
    pub fn color(&self, channel: Channel) -> Rgb8 {
        match channel {
            Channel::Pattern => self.pattern,
            Channel::Mask => self.mask,
            Channel::Normal => self.normal,
            Channel::Roughness => self.roughness,
            Channel::Pearlescence => self.pearlescence,
            Channel::Ao => self.ao,
            Channel::Height => self.height,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Draws primitives into all seven channels at once.
pub struct Painter<'a> {
    channels: &'a mut ChannelSet,
    size: f64,
    /// User space to device space.
    transform: Affine,
    inverse: Affine,
    seamless: bool,
}

impl<'a> Painter<'a> {
    pub fn new(channels: &'a mut ChannelSet) -> Self {
        let size = channels.size() as f64;
        Self {
            channels,
            size,
            transform: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
            seamless: false,
        }
    }

    /// Rotate all subsequent drawing about the canvas centre.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        if degrees != 0.0 && degrees.is_finite() {
            let centre = Point::new(self.size / 2.0, self.size / 2.0);
            self.transform = Affine::rotate_about(degrees.to_radians(), centre);
            self.inverse = self.transform.inverse();
        }
        self
    }

    /// Draw every primitive nine times, offset by one canvas in each
    /// direction, so shapes crossing an edge reappear on the opposite one.
    pub fn with_seamless(mut self, seamless: bool) -> Self {
        self.seamless = seamless;
        self
    }

    /// Canvas edge length in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// User-space rectangle that covers the whole canvas under the current
    /// transform. Routines that tile the plane should fill at least this.
    pub fn user_bounds(&self) -> Rect {
        self.inverse.transform_rect_bbox(self.canvas())
    }

    fn canvas(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    pub fn fill_rect(&mut self, rect: Rect, paint: &ChannelPaint) {
        let rect = rect.abs();
        let paint = *paint;
        self.cover(rect, |p| rect.contains(p), |_| paint);
    }

    pub fn fill_circle(&mut self, centre: Point, radius: f64, paint: &ChannelPaint) {
        if radius <= 0.0 {
            return;
        }
        let circle = Circle::new(centre, radius);
        let paint = *paint;
        self.cover(circle.bounding_box(), |p| circle.contains(p), |_| paint);
    }

    /// Annulus of the given stroke width centred on `radius`.
    pub fn stroke_circle(&mut self, centre: Point, radius: f64, width: f64, paint: &ChannelPaint) {
        let half = width / 2.0;
        if half <= 0.0 {
            return;
        }
        let outer = radius + half;
        let bounds = Rect::new(
            centre.x - outer,
            centre.y - outer,
            centre.x + outer,
            centre.y + outer,
        );
        let paint = *paint;
        self.cover(
            bounds,
            |p| ((p - centre).hypot() - radius).abs() <= half,
            |_| paint,
        );
    }

    /// Closed polygon, nonzero winding.
    pub fn fill_polygon(&mut self, points: &[Point], paint: &ChannelPaint) {
        let Some(path) = polygon_path(points) else {
            return;
        };
        let paint = *paint;
        self.cover(path.bounding_box(), |p| path.contains(p), |_| paint);
    }

    /// Thick segment with round caps.
    pub fn stroke_line(&mut self, a: Point, b: Point, width: f64, paint: &ChannelPaint) {
        let half = width / 2.0;
        if half <= 0.0 {
            return;
        }
        let bounds = Rect::from_points(a, b).inflate(half, half);
        let paint = *paint;
        self.cover(bounds, |p| segment_distance(p, a, b) <= half, |_| paint);
    }

    pub fn stroke_polyline(&mut self, points: &[Point], width: f64, paint: &ChannelPaint) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], width, paint);
        }
    }

    /// Fill `shape` with a paint computed per texel from its user-space
    /// position.
    pub fn fill_shaded<S, F>(&mut self, shape: &S, shade: F)
    where
        S: Shape,
        F: Fn(Point) -> ChannelPaint,
    {
        self.cover(shape.bounding_box(), |p| shape.contains(p), shade);
    }

    fn offsets(&self) -> Vec<Vec2> {
        if !self.seamless {
            return vec![Vec2::ZERO];
        }
        let s = self.size;
        let mut offsets = Vec::with_capacity(9);
        for dy in [-s, 0.0, s] {
            for dx in [-s, 0.0, s] {
                offsets.push(Vec2::new(dx, dy));
            }
        }
        offsets
    }

    fn cover<I, F>(&mut self, bounds: Rect, inside: I, shade: F)
    where
        I: Fn(Point) -> bool,
        F: Fn(Point) -> ChannelPaint,
    {
        let canvas = self.canvas();
        let max = self.size as u32;
        for offset in self.offsets() {
            let device = self
                .transform
                .transform_rect_bbox(bounds + offset)
                .intersect(canvas);
            if device.width() <= 0.0 || device.height() <= 0.0 {
                continue;
            }
            let x0 = device.x0.floor().max(0.0) as u32;
            let y0 = device.y0.floor().max(0.0) as u32;
            let x1 = (device.x1.ceil() as u32).min(max);
            let y1 = (device.y1.ceil() as u32).min(max);

            for py in y0..y1 {
                for px in x0..x1 {
                    let centre = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                    let local = self.inverse * centre - offset;
                    if inside(local) {
                        let paint = shade(local);
                        self.put(px, py, &paint);
                    }
                }
            }
        }
    }

    fn put(&mut self, x: u32, y: u32, paint: &ChannelPaint) {
        let size = self.channels.size() as usize;
        let i = (y as usize * size + x as usize) * 4;
        for (channel, surface) in Channel::ALL.iter().zip(self.channels.surfaces_mut()) {
            blend_texel(
                &mut surface.as_bytes_mut()[i..i + 4],
                paint.color(*channel),
                paint.alpha,
            );
        }
    }
}

pub(crate) fn polygon_path(points: &[Point]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    Some(path)
}

/// Distance from `p` to the segment `ab`.
pub(crate) fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(v: u8) -> ChannelPaint {
        let c = [v, v, v];
        ChannelPaint {
            pattern: c,
            mask: c,
            normal: c,
            roughness: c,
            pearlescence: c,
            ao: c,
            height: c,
            alpha: 1.0,
        }
    }

    #[test]
    fn primitives_write_every_channel() {
        let mut set = ChannelSet::try_new(8).unwrap();
        Painter::new(&mut set).fill_rect(Rect::new(2.0, 2.0, 4.0, 4.0), &solid(200));
        for (_, surface) in set.iter() {
            assert_eq!(surface.get(3, 3), [200, 200, 200, 255]);
            assert_eq!(surface.get(5, 5), [0, 0, 0, 255]);
        }
    }

    #[test]
    fn seamless_wraps_shapes_across_edges() {
        let mut set = ChannelSet::try_new(16).unwrap();
        Painter::new(&mut set)
            .with_seamless(true)
            .fill_circle(Point::new(0.0, 8.0), 3.0, &solid(255));
        let pattern = set.get(Channel::Pattern);
        assert_eq!(pattern.get(0, 8), pattern.get(15, 8));
        assert_eq!(pattern.get(15, 8)[0], 255);
        assert_eq!(pattern.get(8, 8)[0], 0);
    }

    #[test]
    fn without_seamless_nothing_wraps() {
        let mut set = ChannelSet::try_new(16).unwrap();
        Painter::new(&mut set).fill_circle(Point::new(0.0, 8.0), 3.0, &solid(255));
        let pattern = set.get(Channel::Pattern);
        assert_eq!(pattern.get(0, 8)[0], 255);
        assert_eq!(pattern.get(15, 8)[0], 0);
    }

    #[test]
    fn rotation_turns_a_bar() {
        let mut set = ChannelSet::try_new(32).unwrap();
        // Horizontal bar through the centre, rotated a quarter turn.
        Painter::new(&mut set)
            .with_rotation(90.0)
            .fill_rect(Rect::new(0.0, 15.0, 32.0, 17.0), &solid(255));
        let pattern = set.get(Channel::Pattern);
        assert_eq!(pattern.get(16, 2)[0], 255);
        assert_eq!(pattern.get(2, 16)[0], 0);
    }

    #[test]
    fn user_bounds_cover_the_rotated_canvas() {
        let mut set = ChannelSet::try_new(10).unwrap();
        let painter = Painter::new(&mut set).with_rotation(45.0);
        let b = painter.user_bounds();
        assert!(b.width() > 10.0 && b.height() > 10.0);
    }

    #[test]
    fn stroke_line_has_round_caps() {
        let mut set = ChannelSet::try_new(16).unwrap();
        Painter::new(&mut set).stroke_line(
            Point::new(4.0, 8.0),
            Point::new(12.0, 8.0),
            4.0,
            &solid(90),
        );
        let pattern = set.get(Channel::Pattern);
        assert_eq!(pattern.get(8, 8)[0], 90);
        assert_eq!(pattern.get(2, 8)[0], 90);
        assert_eq!(pattern.get(8, 12)[0], 0);
    }

    #[test]
    fn polygon_fill_and_degenerate_input() {
        let mut set = ChannelSet::try_new(16).unwrap();
        let mut painter = Painter::new(&mut set);
        painter.fill_polygon(&[Point::new(1.0, 1.0), Point::new(3.0, 3.0)], &solid(50));
        painter.fill_polygon(
            &[Point::new(0.0, 0.0), Point::new(16.0, 0.0), Point::new(0.0, 16.0)],
            &solid(70),
        );
        let pattern = set.get(Channel::Pattern);
        assert_eq!(pattern.get(2, 2)[0], 70);
        assert_eq!(pattern.get(14, 14)[0], 0);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(segment_distance(Point::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(segment_distance(Point::new(13.0, 4.0), a, b), 5.0);
        assert_eq!(segment_distance(Point::new(1.0, 1.0), a, a), 2f64.sqrt());
    }
}
