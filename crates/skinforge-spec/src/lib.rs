//! SkinForge Canonical Settings Library
//!
//! This crate holds the data model shared by the SkinForge editor, the
//! texture backend, and the CLI. It contains no rendering code.
//!
//! # Overview
//!
//! - **Settings**: fixed-pattern settings plus one settings block per output
//!   channel (mask, normal, roughness, pearlescence, ambient occlusion,
//!   height), all serde-backed with per-field defaults.
//! - **Node graph**: a closed catalog of node kinds and an editable graph
//!   whose nodes and connections refer to each other by id only.
//! - **Documents**: a render request bundling resolution, mode, settings,
//!   and an optional graph.
//! - **Presets**: partial settings bundles applied atomically.
//!
//! # Example
//!
//! ```
//! use skinforge_spec::{Graph, NodeKind, ParamValue, SkinDocument, RenderMode};
//!
//! let mut graph = Graph::new();
//! let noise = graph.add_node(NodeKind::NoisePerlin);
//! let out = graph.add_node(NodeKind::OutputPattern);
//! graph.connect(noise, "color", out, "color").unwrap();
//! graph.set_param(noise, "scale", ParamValue::Float(6.0)).unwrap();
//!
//! let doc = SkinDocument {
//!     resolution: 256,
//!     mode: RenderMode::Graph,
//!     graph: Some(graph),
//!     ..Default::default()
//! };
//! assert!(doc.to_json_pretty().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`settings`]: pattern and per-channel settings
//! - [`graph`]: node catalog and graph model
//! - [`document`]: top-level render document
//! - [`preset`]: preset bundles
//! - [`validation`]: clamping and render budget
//! - [`hash`]: canonical hashing
//! - [`error`]: error types

#[macro_use]
mod macros;

pub mod document;
pub mod error;
pub mod graph;
pub mod hash;
pub mod preset;
pub mod settings;
pub mod validation;

// Re-export commonly used types at the crate root
pub use document::{RenderMode, SkinDocument};
pub use error::{BackendError, GraphError, SpecError};
pub use graph::{
    Connection, Graph, Node, NodeCategory, NodeDefinition, NodeId, NodeKind, ParamDef, ParamKind,
    ParamValue, PortDef, PortType,
};
pub use hash::canonical_hash;
pub use preset::Preset;
pub use settings::{
    AoSettings, ColorScheme, HeightSettings, MaskSettings, NormalMapSettings, PatternSettings,
    PatternStyle, PearlescenceSettings, RoughnessSettings, SkinSettings,
};
pub use validation::{resolve_resolution, AdjustedField, RenderBudget, Sanitizer};
