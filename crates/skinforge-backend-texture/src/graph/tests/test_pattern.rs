//! Tests for closed-form pattern nodes.

use skinforge_spec::{Graph, NodeKind, ParamValue};

use super::{approx_eq, eval_at, node_with};

fn pattern(kind: NodeKind, params: &[(&str, ParamValue)], uv: (f64, f64)) -> f64 {
    let mut g = Graph::new();
    let n = node_with(&mut g, kind, params);
    eval_at(&g, uv, n, "value").as_float()
}

#[test]
fn checker_alternates_cells() {
    let p = [("scale", ParamValue::Float(2.0))];
    assert_eq!(pattern(NodeKind::PatternChecker, &p, (0.1, 0.1)), 0.0);
    assert_eq!(pattern(NodeKind::PatternChecker, &p, (0.6, 0.1)), 1.0);
    assert_eq!(pattern(NodeKind::PatternChecker, &p, (0.6, 0.6)), 0.0);
}

#[test]
fn stripes_follow_width() {
    assert_eq!(pattern(NodeKind::PatternStripes, &[], (0.02, 0.5)), 1.0);
    assert_eq!(pattern(NodeKind::PatternStripes, &[], (0.07, 0.5)), 0.0);
}

#[test]
fn dots_are_centred_in_cells() {
    assert_eq!(pattern(NodeKind::PatternDots, &[], (0.05, 0.05)), 1.0);
    assert_eq!(pattern(NodeKind::PatternDots, &[], (0.0, 0.0)), 0.0);
}

#[test]
fn hexagon_outlines() {
    let row = 3f64.sqrt();
    let p = [("scale", ParamValue::Float(1.0))];
    assert_eq!(pattern(NodeKind::PatternHexagon, &p, (0.5, row * 0.5)), 0.0);
    assert_eq!(pattern(NodeKind::PatternHexagon, &p, (0.0, row * 0.5)), 1.0);
}

#[test]
fn brick_rows_are_offset() {
    let p = [("scale", ParamValue::Float(1.0))];
    assert_eq!(pattern(NodeKind::PatternBrick, &p, (0.5, 0.25)), 1.0);
    assert_eq!(pattern(NodeKind::PatternBrick, &p, (0.0, 0.25)), 0.0);
    assert_eq!(pattern(NodeKind::PatternBrick, &p, (0.0, 0.75)), 1.0);
}

#[test]
fn rings_peak_at_the_centre() {
    assert!(approx_eq(pattern(NodeKind::PatternRings, &[], (0.5, 0.5)), 1.0));
}

#[test]
fn spiral_stays_in_unit_range() {
    for i in 0..32 {
        let t = i as f64 / 32.0;
        let v = pattern(NodeKind::PatternSpiral, &[], (t, 1.0 - t));
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn grid_lines_on_cell_boundaries() {
    let p = [("thickness", ParamValue::Float(0.1))];
    assert_eq!(pattern(NodeKind::PatternGrid, &p, (0.0, 0.55)), 1.0);
    assert_eq!(pattern(NodeKind::PatternGrid, &p, (0.55, 0.55)), 0.0);
}

#[test]
fn triangle_splits_each_cell() {
    let p = [("scale", ParamValue::Float(1.0))];
    assert_eq!(pattern(NodeKind::PatternTriangle, &p, (0.2, 0.2)), 1.0);
    assert_eq!(pattern(NodeKind::PatternTriangle, &p, (0.8, 0.8)), 0.0);
}
