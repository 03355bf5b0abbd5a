//! Error types for document parsing, graph editing, and backend reporting.

use thiserror::Error;

use crate::graph::NodeId;

/// Top-level error type for document operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Canonicalization error.
    #[error("canonicalization error: {0}")]
    Canonicalization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by node-graph editing operations.
///
/// Editing is strict so that the editor can surface mistakes immediately.
/// Evaluation is not: a graph that reaches the evaluator in a bad state
/// degrades to the neutral fallback instead of failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The referenced node does not exist in the graph.
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),

    /// The node's definition has no input port with this id.
    #[error("node {node} ({kind}) has no input port '{port}'")]
    UnknownInputPort {
        node: NodeId,
        kind: &'static str,
        port: String,
    },

    /// The node's definition has no output port with this id.
    #[error("node {node} ({kind}) has no output port '{port}'")]
    UnknownOutputPort {
        node: NodeId,
        kind: &'static str,
        port: String,
    },

    /// The node's definition has no parameter with this id.
    #[error("node {node} ({kind}) has no parameter '{param}'")]
    UnknownParam {
        node: NodeId,
        kind: &'static str,
        param: String,
    },

    /// The supplied value does not match the parameter's declared type.
    #[error("parameter '{param}' expects {expected}, got {actual}")]
    ParamType {
        param: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Every node id is already in use.
    #[error("graph has no free node id")]
    IdSpaceExhausted,
}

/// Trait for backend-specific errors.
///
/// Backends implement this so callers can report failures with a stable
/// code regardless of which stage produced them.
///
/// # Example
///
/// ```ignore
/// use skinforge_spec::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "RENDER_001". Codes are stable and can
    /// be matched programmatically.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
