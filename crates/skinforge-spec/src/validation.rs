//! Budgets and clamping of degenerate settings.
//!
//! Settings arriving from the editor are never rejected for being out of
//! range. Every numeric field is clamped into its documented range before a
//! render runs, and the adjustments are recorded so tools can report them.

use serde::{Deserialize, Serialize};

/// A field whose value was changed by sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedField {
    /// Dotted field path, e.g. `pattern.density`.
    pub field: String,
    /// The value as supplied.
    pub original: f64,
    /// The value after clamping.
    pub adjusted: f64,
}

/// Collects field adjustments while settings are clamped.
#[derive(Debug, Default)]
pub struct Sanitizer {
    prefix: &'static str,
    adjusted: Vec<AdjustedField>,
}

impl Sanitizer {
    /// Create a sanitizer with an empty field prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix prepended to recorded field names.
    pub fn scope(&mut self, prefix: &'static str) -> &mut Self {
        self.prefix = prefix;
        self
    }

    /// Clamp `value` into `[min, max]`. NaN becomes `min`.
    pub fn range(&mut self, field: &'static str, value: f64, min: f64, max: f64) -> f64 {
        let adjusted = if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        };
        if adjusted != value || value.is_nan() {
            self.record(field, value, adjusted);
        }
        adjusted
    }

    /// Clamp an integer value into `[min, max]`.
    pub fn range_u32(&mut self, field: &'static str, value: u32, min: u32, max: u32) -> u32 {
        let adjusted = value.clamp(min, max);
        if adjusted != value {
            self.record(field, value as f64, adjusted as f64);
        }
        adjusted
    }

    /// Wrap an angle in degrees into `(-360, 360)`. Non-finite becomes 0.
    pub fn angle(&mut self, field: &'static str, degrees: f64) -> f64 {
        let adjusted = if degrees.is_finite() {
            degrees % 360.0
        } else {
            0.0
        };
        if adjusted != degrees {
            self.record(field, degrees, adjusted);
        }
        adjusted
    }

    /// Fields adjusted so far.
    pub fn adjusted(&self) -> &[AdjustedField] {
        &self.adjusted
    }

    /// Consume the sanitizer, returning the recorded adjustments.
    pub fn into_adjusted(self) -> Vec<AdjustedField> {
        self.adjusted
    }

    fn record(&mut self, field: &'static str, original: f64, adjusted: f64) {
        let field = if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        };
        self.adjusted.push(AdjustedField {
            field,
            original,
            adjusted,
        });
    }
}

/// Render limits.
///
/// Every render allocates seven `N x N` RGBA buffers, so the resolution is
/// bounded to keep malformed documents from exhausting memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBudget {
    /// Maximum texture dimension.
    pub max_dimension: u32,
    /// Maximum number of graph nodes.
    pub max_graph_nodes: usize,
}

impl Default for RenderBudget {
    fn default() -> Self {
        Self {
            max_dimension: Self::DEFAULT_MAX_DIMENSION,
            max_graph_nodes: Self::DEFAULT_MAX_GRAPH_NODES,
        }
    }
}

impl RenderBudget {
    /// Default maximum texture dimension.
    pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

    /// Default maximum number of graph nodes.
    pub const DEFAULT_MAX_GRAPH_NODES: usize = 256;

    /// Smallest resolution a render will produce.
    pub const MIN_DIMENSION: u32 = 1;
}

/// Error for a resolution outside the render budget.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionError {
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ResolutionError {}

/// Clamp a requested resolution to the minimum and check it against the budget.
///
/// # Example
/// ```
/// use skinforge_spec::validation::{resolve_resolution, RenderBudget};
///
/// let budget = RenderBudget::default();
/// assert_eq!(resolve_resolution(0, &budget).unwrap(), 1);
/// assert_eq!(resolve_resolution(512, &budget).unwrap(), 512);
/// assert!(resolve_resolution(100_000, &budget).is_err());
/// ```
pub fn resolve_resolution(requested: u32, budget: &RenderBudget) -> Result<u32, ResolutionError> {
    let size = requested.max(RenderBudget::MIN_DIMENSION);
    if size > budget.max_dimension {
        return Err(ResolutionError {
            message: format!(
                "resolution is too large: max is {}x{}, got {}x{}",
                budget.max_dimension, budget.max_dimension, size, size
            ),
        });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_records_only_changed_fields() {
        let mut s = Sanitizer::new();
        s.scope("pattern");
        assert_eq!(s.range("density", 50.0, 0.0, 100.0), 50.0);
        assert_eq!(s.range("complexity", 150.0, 0.0, 100.0), 100.0);
        assert_eq!(s.adjusted().len(), 1);
        assert_eq!(s.adjusted()[0].field, "pattern.complexity");
        assert_eq!(s.adjusted()[0].original, 150.0);
    }

    #[test]
    fn nan_clamps_to_minimum() {
        let mut s = Sanitizer::new();
        assert_eq!(s.range("x", f64::NAN, 2.0, 5.0), 2.0);
        assert_eq!(s.adjusted().len(), 1);
    }

    #[test]
    fn angle_wraps() {
        let mut s = Sanitizer::new();
        assert_eq!(s.angle("rotation", 450.0), 90.0);
        assert_eq!(s.angle("rotation", -30.0), -30.0);
        assert_eq!(s.angle("rotation", f64::INFINITY), 0.0);
    }

    #[test]
    fn zero_resolution_clamps_to_one() {
        assert_eq!(resolve_resolution(0, &RenderBudget::default()).unwrap(), 1);
    }

    #[test]
    fn oversize_resolution_is_rejected() {
        let budget = RenderBudget {
            max_dimension: 64,
            ..Default::default()
        };
        let err = resolve_resolution(65, &budget).unwrap_err();
        assert!(err.message.contains("max is 64x64"));
    }
}
