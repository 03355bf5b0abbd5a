//! Full-image graph rendering.

use rayon::prelude::*;

use super::program::Program;
use crate::surface::Surface;

/// Sample `program` at `uv = (px / size, py / size)` for every texel and
/// write the opaque result into `surface`.
///
/// Rows run in parallel, each worker reusing one scratch buffer; texels are
/// independent so the bytes do not depend on scheduling.
pub fn render_program(program: &Program, surface: &mut Surface) {
    let size = surface.size();
    let inv = 1.0 / size as f64;
    let row_bytes = size as usize * 4;
    surface
        .as_bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each_init(
            || program.scratch(),
            |values, (y, row)| {
                let v = y as f64 * inv;
                for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                    let rgb = program.sample((x as f64 * inv, v), values).to_rgb8();
                    texel.copy_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
                }
            },
        );
}
