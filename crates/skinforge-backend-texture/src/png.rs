//! Deterministic PNG writer.
//!
//! Fixed compression and filter settings give byte-identical files for
//! identical surfaces, so file hashes can be compared across runs.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::surface::Surface;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            // No filtering keeps the encoder's choices out of the output.
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA surface to any writer.
pub fn write_surface_to_writer<W: Write>(
    surface: &Surface,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let size = surface.size();
    let mut encoder = Encoder::new(writer, size, size);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(surface.as_bytes())?;
    Ok(())
}

/// BLAKE3 hex digest of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode into memory and return the bytes with their hash.
pub fn write_surface_to_vec_with_hash(
    surface: &Surface,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_surface_to_writer(surface, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn gradient(size: u32) -> Surface {
        let mut surface = Surface::try_new(size, [0, 0, 0, 255]).unwrap();
        for y in 0..size {
            for x in 0..size {
                surface.set(x, y, [(x * 4) as u8, (y * 4) as u8, 128, 255]);
            }
        }
        surface
    }

    #[test]
    fn test_rgba_deterministic() {
        let surface = gradient(64);
        let config = PngConfig::default();

        let (data1, hash1) = write_surface_to_vec_with_hash(&surface, &config).unwrap();
        let (data2, hash2) = write_surface_to_vec_with_hash(&surface, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_decodes_to_the_same_pixels() {
        let surface = gradient(16);
        let (data, _) = write_surface_to_vec_with_hash(&surface, &PngConfig::default()).unwrap();

        let decoder = png::Decoder::new(Cursor::new(data));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (16, 16));
        assert_eq!(info.color_type, ColorType::Rgba);
        assert_eq!(&buf[..info.buffer_size()], surface.as_bytes());
    }
}
