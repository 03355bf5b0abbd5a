//! Tests for mask nodes.

use skinforge_spec::{Graph, NodeKind, ParamValue};

use super::{approx_eq, float_at, node_with};

fn threshold(value: f64, softness: f64) -> f64 {
    let mut g = Graph::new();
    let n = node_with(
        &mut g,
        NodeKind::MaskThreshold,
        &[
            ("value", ParamValue::Float(value)),
            ("softness", ParamValue::Float(softness)),
        ],
    );
    float_at(&g, n, "value")
}

fn blend(mode: i64, a: f64, b: f64, opacity: f64) -> f64 {
    let mut g = Graph::new();
    let n = node_with(
        &mut g,
        NodeKind::MaskBlend,
        &[
            ("a", ParamValue::Float(a)),
            ("b", ParamValue::Float(b)),
            ("mode", ParamValue::Int(mode)),
            ("opacity", ParamValue::Float(opacity)),
        ],
    );
    float_at(&g, n, "value")
}

#[test]
fn hard_threshold() {
    assert_eq!(threshold(0.6, 0.0), 1.0);
    assert_eq!(threshold(0.4, 0.0), 0.0);
    assert_eq!(threshold(0.5, 0.0), 1.0);
}

#[test]
fn soft_threshold_is_half_at_the_edge() {
    assert!(approx_eq(threshold(0.5, 0.2), 0.5));
    assert_eq!(threshold(0.3, 0.2), 0.0);
    assert_eq!(threshold(0.7, 0.2), 1.0);
}

#[test]
fn invert_mask() {
    let mut g = Graph::new();
    let n = node_with(&mut g, NodeKind::MaskInvert, &[("value", ParamValue::Float(0.25))]);
    assert!(approx_eq(float_at(&g, n, "value"), 0.75));
}

#[test]
fn blend_modes_by_index() {
    assert!(approx_eq(blend(0, 0.5, 0.75, 1.0), 1.0));
    assert!(approx_eq(blend(1, 0.5, 0.5, 1.0), 0.25));
    assert!(approx_eq(blend(2, 0.2, 0.7, 1.0), 0.7));
    assert!(approx_eq(blend(3, 0.2, 0.7, 1.0), 0.2));
    assert!(approx_eq(blend(4, 0.5, 0.5, 1.0), 0.75));
    assert!(approx_eq(blend(5, 0.25, 0.5, 1.0), 0.25));
    assert!(approx_eq(blend(5, 0.75, 0.5, 1.0), 0.75));
}

#[test]
fn opacity_mixes_blend_over_base() {
    assert!(approx_eq(blend(1, 0.5, 0.5, 0.5), 0.375));
    assert!(approx_eq(blend(1, 0.5, 0.5, 0.0), 0.5));
}
