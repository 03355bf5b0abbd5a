//! SkinForge Texture Engine
//!
//! Renders seven square RGBA8 channel maps (pattern color, mask, normal,
//! roughness, pearlescence, ambient occlusion, height) from either the
//! fixed pattern library or a node graph. Output is byte-identical for
//! identical inputs.
//!
//! # Features
//!
//! - **Noise**: seeded value noise, FBM, Voronoi/Worley
//! - **Pattern library**: circuits, grids, hexagons, lit solids and 50+
//!   other style ids drawn through a seven-channel [`Painter`](paint::Painter)
//! - **Node graph**: Kahn-ordered evaluator with neutral fallback for
//!   cycles, dangling edges and missing outputs
//! - **Post-processing**: grain, vignette, normal-from-height, inversions
//! - **Deterministic PNG**: fixed compression settings and BLAKE3 hashes
//!
//! # Example
//!
//! ```no_run
//! use skinforge_backend_texture::render_skin;
//! use skinforge_spec::SkinSettings;
//! use std::path::Path;
//!
//! let set = render_skin(&SkinSettings::default(), 512).unwrap();
//! set.save_pngs(Path::new("output"), "skin").unwrap();
//! ```
//!
//! # Determinism
//!
//! - All randomness comes from [`rng`], seeded by the pattern seed
//! - Graph evaluation is a pure function of the sample point
//! - Parallel passes index by texel position, so thread count has no effect
//! - PNG encoding uses fixed compression settings

pub mod apply;
pub mod color;
pub mod generate;
pub mod graph;
pub mod noise;
pub mod paint;
pub mod pattern;
pub mod png;
pub mod postprocess;
pub mod rng;
pub mod surface;

// Re-export main types for convenience
pub use apply::{apply_graph_to_settings, ApplyOutcome, TransferredField};
pub use color::Color;
pub use generate::{
    compile_preview, render_document, render_skin, render_skin_graph, MapResult, RenderError,
    SkinRenderer, TextureSet, DEFAULT_PREVIEW_SIZE,
};
pub use graph::{NodeValue, Program};
pub use png::{PngConfig, PngError};
pub use surface::{Channel, ChannelSet, Surface};
