//! Node-graph evaluator.
//!
//! A [`Graph`](skinforge_spec::Graph) is ordered with Kahn's algorithm,
//! compiled into a flat [`Program`] of typed [`Op`]s, and sampled once per
//! texel. Cycles, dangling edges and missing outputs never fail: the
//! affected nodes read as [`NodeValue::NEUTRAL`].

mod operations;
mod ops_color;
mod ops_math;
mod ops_noise;
mod ops_pattern;
mod ops_transform;
mod order;
mod program;
mod render;
mod value;

#[cfg(test)]
mod tests;

pub use operations::Op;
pub(crate) use operations::param_value;
pub use ops_math::{BinaryOp, BlendMode};
pub use ops_transform::MirrorAxis;
pub use order::{effective_edges, topological_order, EvalOrder};
pub use program::{Evaluation, Fallback, InputSource, Program, Step, MAX_INPUTS};
pub use render::render_program;
pub use value::NodeValue;
