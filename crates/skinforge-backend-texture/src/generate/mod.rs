//! Rendering driver.
//!
//! Owns the seven channel surfaces of a render: allocates them, writes the
//! base fills, dispatches to the pattern library or the graph evaluator,
//! and runs post-processing. Settings are sanitized first; resolution and
//! graph size are checked against a [`RenderBudget`] before anything is
//! allocated.

mod graph_mode;
mod renderer;
mod texture_set;

#[cfg(test)]
mod tests;

use skinforge_spec::validation::ResolutionError;
use skinforge_spec::{
    resolve_resolution, BackendError, Graph, RenderBudget, RenderMode, SkinDocument, SkinSettings,
};
use thiserror::Error;

use crate::color::gray8;
use crate::graph::{render_program, Program};
use crate::paint::Painter;
use crate::pattern::{palette, render_pattern, ChannelColors};
use crate::png::PngError;
use crate::postprocess::post_process;
use crate::surface::{Channel, ChannelSet, Surface};

pub use renderer::SkinRenderer;
pub use texture_set::{MapResult, TextureSet};

/// Edge length of graph previews.
pub const DEFAULT_PREVIEW_SIZE: u32 = 64;

/// Errors from rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid resolution: {message}")]
    InvalidResolution { message: String },

    #[error("could not allocate {size}x{size} channel surfaces")]
    Allocation { size: u32 },

    #[error("graph has {nodes} nodes, max is {max}")]
    GraphTooLarge { nodes: usize, max: usize },

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ResolutionError> for RenderError {
    fn from(err: ResolutionError) -> Self {
        RenderError::InvalidResolution {
            message: err.message,
        }
    }
}

impl BackendError for RenderError {
    fn code(&self) -> &'static str {
        match self {
            RenderError::InvalidResolution { .. } => "RENDER_001",
            RenderError::Allocation { .. } => "RENDER_002",
            RenderError::GraphTooLarge { .. } => "RENDER_003",
            RenderError::Png(_) => "RENDER_004",
            RenderError::Io(_) => "RENDER_005",
        }
    }

    fn category(&self) -> &'static str {
        "render"
    }
}

/// Render the fixed pattern selected by `settings.pattern.style`.
pub fn render_skin(settings: &SkinSettings, resolution: u32) -> Result<TextureSet, RenderError> {
    render_with_budget(settings, None, resolution, &RenderBudget::default())
}

/// Render `graph` into the pattern channel and derive the other six
/// channels from its luminance.
pub fn render_skin_graph(
    settings: &SkinSettings,
    graph: &Graph,
    resolution: u32,
) -> Result<TextureSet, RenderError> {
    render_with_budget(settings, Some(graph), resolution, &RenderBudget::default())
}

/// Render a document according to its mode. A graph-mode document without
/// a graph renders the neutral empty graph.
pub fn render_document(doc: &SkinDocument) -> Result<TextureSet, RenderError> {
    render_document_with_budget(doc, &RenderBudget::default())
}

pub fn render_document_with_budget(
    doc: &SkinDocument,
    budget: &RenderBudget,
) -> Result<TextureSet, RenderError> {
    match doc.mode {
        RenderMode::Pattern => render_with_budget(&doc.settings, None, doc.resolution, budget),
        RenderMode::Graph => {
            let empty = Graph::new();
            let graph = doc.graph.as_ref().unwrap_or(&empty);
            render_with_budget(&doc.settings, Some(graph), doc.resolution, budget)
        }
    }
}

/// Full render. `graph` selects graph mode.
#[tracing::instrument(
    level = "debug",
    skip(settings, graph, budget),
    fields(mode = if graph.is_some() { "graph" } else { "pattern" })
)]
pub fn render_with_budget(
    settings: &SkinSettings,
    graph: Option<&Graph>,
    resolution: u32,
    budget: &RenderBudget,
) -> Result<TextureSet, RenderError> {
    let size = resolve_resolution(resolution, budget)?;
    if let Some(graph) = graph {
        check_graph_budget(graph, budget)?;
    }
    let settings = settings.sanitized();
    let background = palette(settings.pattern.color_scheme).background;

    let mut set = ChannelSet::try_new(size)?;
    fill_base(&mut set, &settings, background);

    let started = std::time::Instant::now();
    match graph {
        None => {
            let mut painter = Painter::new(&mut set)
                .with_rotation(settings.pattern.rotation)
                .with_seamless(settings.pattern.seamless);
            render_pattern(&settings, &mut painter);
        }
        Some(graph) => {
            let program = Program::compile(graph);
            render_program(&program, set.get_mut(Channel::Pattern));
            graph_mode::derive_channels(&mut set, &settings)?;
        }
    }
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "primary generation done");

    post_process(&mut set, &settings, background)?;
    Ok(TextureSet::new(set))
}

/// Render only the graph's output color at `size` (clamped to the budget
/// minimum). No post-processing runs.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn compile_preview(graph: &Graph, size: u32) -> Result<Surface, RenderError> {
    let budget = RenderBudget::default();
    let size = resolve_resolution(size, &budget)?;
    check_graph_budget(graph, &budget)?;

    let program = Program::compile(graph);
    let mut surface = Surface::try_new(size, [0, 0, 0, 255])?;
    render_program(&program, &mut surface);
    Ok(surface)
}

fn check_graph_budget(graph: &Graph, budget: &RenderBudget) -> Result<(), RenderError> {
    if graph.nodes.len() > budget.max_graph_nodes {
        return Err(RenderError::GraphTooLarge {
            nodes: graph.nodes.len(),
            max: budget.max_graph_nodes,
        });
    }
    Ok(())
}

/// Channel base colors written before any primitive.
pub fn base_colors(settings: &SkinSettings, background: [u8; 3]) -> [[u8; 3]; Channel::COUNT] {
    let colors = ChannelColors::new(settings);
    let mut out = [[0; 3]; Channel::COUNT];
    for channel in Channel::ALL {
        out[channel.index()] = match channel {
            Channel::Pattern => background,
            Channel::Mask => colors.mask_color(settings.mask.base_coat / 100.0),
            Channel::Normal => [128, 128, 255],
            Channel::Roughness => gray8(settings.roughness.base * 2.55),
            Channel::Pearlescence => [0, 0, 0],
            Channel::Ao => [255, 255, 255],
            Channel::Height => colors.height_color(0.0),
        };
    }
    out
}

fn fill_base(set: &mut ChannelSet, settings: &SkinSettings, background: [u8; 3]) {
    let base = base_colors(settings, background);
    for channel in Channel::ALL {
        let [r, g, b] = base[channel.index()];
        set.get_mut(channel).fill([r, g, b, 255]);
    }
}
