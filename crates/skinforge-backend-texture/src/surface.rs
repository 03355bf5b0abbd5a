//! Channel surfaces: seven square RGBA8 rasters kept in lockstep.

use std::fmt;

use crate::color::Rgb8;
use crate::generate::RenderError;

/// One of the seven correlated output maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Pattern,
    Mask,
    Normal,
    Roughness,
    Pearlescence,
    Ao,
    Height,
}

impl Channel {
    pub const COUNT: usize = 7;

    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::Pattern,
        Channel::Mask,
        Channel::Normal,
        Channel::Roughness,
        Channel::Pearlescence,
        Channel::Ao,
        Channel::Height,
    ];

    /// Stable identifier used for file names and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::Pattern => "pattern",
            Channel::Mask => "mask",
            Channel::Normal => "normal",
            Channel::Roughness => "roughness",
            Channel::Pearlescence => "pearlescence",
            Channel::Ao => "ao",
            Channel::Height => "height",
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A square RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    size: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a `size x size` surface filled with `fill`.
    ///
    /// Allocation failure is reported instead of aborting.
    pub fn try_new(size: u32, fill: [u8; 4]) -> Result<Self, RenderError> {
        let texels = (size as usize)
            .checked_mul(size as usize)
            .ok_or(RenderError::Allocation { size })?;
        let bytes = texels
            .checked_mul(4)
            .ok_or(RenderError::Allocation { size })?;

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| RenderError::Allocation { size })?;
        for _ in 0..texels {
            data.extend_from_slice(&fill);
        }
        Ok(Self { size, data })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Bytes of one row.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.size as usize * 4;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size as usize + x as usize) * 4
    }

    /// Texel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Texel with wrapping coordinates.
    #[inline]
    pub fn get_wrapped(&self, x: i64, y: i64) -> [u8; 4] {
        let s = self.size as i64;
        self.get(x.rem_euclid(s) as u32, y.rem_euclid(s) as u32)
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Overwrite the whole surface with one texel value.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for texel in self.data.chunks_exact_mut(4) {
            texel.copy_from_slice(&rgba);
        }
    }

    /// Source-over blend of an opaque-alpha color onto `(x, y)`.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, rgb: Rgb8, alpha: f64) {
        let i = self.offset(x, y);
        blend_texel(&mut self.data[i..i + 4], rgb, alpha);
    }
}

/// Source-over blend into one RGBA texel.
#[inline]
pub(crate) fn blend_texel(texel: &mut [u8], rgb: Rgb8, alpha: f64) {
    let a = alpha.clamp(0.0, 1.0);
    if a >= 1.0 {
        texel[..3].copy_from_slice(&rgb);
        texel[3] = 255;
        return;
    }
    if a <= 0.0 {
        return;
    }
    for c in 0..3 {
        let dst = texel[c] as f64;
        texel[c] = crate::color::byte(rgb[c] as f64 * a + dst * (1.0 - a));
    }
    let dst_a = texel[3] as f64 / 255.0;
    texel[3] = crate::color::byte((a + dst_a * (1.0 - a)) * 255.0);
}

/// The seven channel surfaces of one render, all the same size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSet {
    surfaces: [Surface; Channel::COUNT],
}

impl ChannelSet {
    /// Allocate seven opaque-black surfaces. Fails as a whole if any
    /// allocation fails.
    pub fn try_new(size: u32) -> Result<Self, RenderError> {
        let black = [0, 0, 0, 255];
        Ok(Self {
            surfaces: [
                Surface::try_new(size, black)?,
                Surface::try_new(size, black)?,
                Surface::try_new(size, black)?,
                Surface::try_new(size, black)?,
                Surface::try_new(size, black)?,
                Surface::try_new(size, black)?,
                Surface::try_new(size, black)?,
            ],
        })
    }

    pub fn size(&self) -> u32 {
        self.surfaces[0].size()
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> &Surface {
        &self.surfaces[channel.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, channel: Channel) -> &mut Surface {
        &mut self.surfaces[channel.index()]
    }

    /// All surfaces in [`Channel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Surface)> {
        Channel::ALL.into_iter().zip(self.surfaces.iter())
    }

    pub(crate) fn surfaces_mut(&mut self) -> &mut [Surface; Channel::COUNT] {
        &mut self.surfaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_get_set() {
        let mut s = Surface::try_new(4, [0, 0, 0, 255]).unwrap();
        s.set(2, 3, [1, 2, 3, 4]);
        assert_eq!(s.get(2, 3), [1, 2, 3, 4]);
        assert_eq!(s.get(3, 2), [0, 0, 0, 255]);
        assert_eq!(s.as_bytes().len(), 64);
    }

    #[test]
    fn test_surface_wrapping() {
        let mut s = Surface::try_new(4, [0; 4]).unwrap();
        s.set(0, 0, [9, 9, 9, 9]);
        assert_eq!(s.get_wrapped(4, -4), [9, 9, 9, 9]);
        assert_eq!(s.get_wrapped(-1, 0), s.get(3, 0));
    }

    #[test]
    fn blend_half_alpha_averages() {
        let mut s = Surface::try_new(1, [0, 0, 0, 255]).unwrap();
        s.blend(0, 0, [200, 100, 50], 0.5);
        assert_eq!(s.get(0, 0), [100, 50, 25, 255]);
    }

    #[test]
    fn blend_extremes() {
        let mut s = Surface::try_new(1, [10, 20, 30, 255]).unwrap();
        s.blend(0, 0, [200, 200, 200], 0.0);
        assert_eq!(s.get(0, 0), [10, 20, 30, 255]);
        s.blend(0, 0, [200, 200, 200], 1.0);
        assert_eq!(s.get(0, 0), [200, 200, 200, 255]);
    }

    #[test]
    fn channel_order_matches_index() {
        for (i, c) in Channel::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
