//! Node-graph model: the immutable catalog plus editable graph instances.

mod catalog;
mod model;

pub use catalog::*;
pub use model::*;
