//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `render`, `validate`, `presets` and
//! `catalog`.

use serde::{Deserialize, Serialize};
use skinforge_spec::AdjustedField;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Document could not be read or parsed
    pub const DOCUMENT_LOAD: &str = "CLI_001";
    /// Unknown preset name
    pub const UNKNOWN_PRESET: &str = "CLI_002";
    /// Preset patch did not apply
    pub const PRESET_APPLY: &str = "CLI_003";
    /// Render error (wraps backend errors)
    pub const RENDER_ERROR: &str = "CLI_004";
}

/// Warning codes for graph diagnostics.
pub mod warning_codes {
    /// Node excluded from evaluation (cycle or dangling input)
    pub const EXCLUDED_NODE: &str = "CLI_W001";
    /// Graph has no output-pattern node
    pub const NO_OUTPUT_NODE: &str = "CLI_W002";
    /// Graph-mode document carries no graph
    pub const MISSING_GRAPH: &str = "CLI_W003";
    /// Graph exceeds the node budget
    pub const GRAPH_TOO_LARGE: &str = "CLI_W004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    pub code: String,
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    pub code: String,
    pub message: String,
    /// Node the warning refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<u32>,
}

impl JsonWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            node: None,
        }
    }

    pub fn with_node(mut self, node: u32) -> Self {
        self.node = Some(node);
        self
    }
}

/// One map in a render report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedMap {
    pub channel: String,
    pub path: String,
    pub hash: String,
}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    pub success: bool,
    pub source_hash: String,
    pub resolution: u32,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    pub maps: Vec<RenderedMap>,
    pub adjusted: Vec<AdjustedField>,
    pub errors: Vec<JsonError>,
    pub duration_ms: u64,
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_hash: Option<String>,
    pub adjusted: Vec<AdjustedField>,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

/// One entry of `presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetInfo {
    pub name: String,
    pub description: String,
}
