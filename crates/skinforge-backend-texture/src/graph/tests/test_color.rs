//! Tests for color nodes.

use skinforge_spec::{Graph, NodeKind, ParamValue};

use super::{approx_eq, color_approx_eq, color_node, eval_at, node_with, value_node};
use crate::color::Color;

fn color_of(g: &Graph, node: skinforge_spec::NodeId) -> Color {
    eval_at(g, (0.5, 0.5), node, "color").as_color()
}

#[test]
fn mix_defaults_to_mid_gray() {
    let mut g = Graph::new();
    let mix = g.add_node(NodeKind::ColorMix);
    assert!(color_approx_eq(color_of(&g, mix), Color::gray(0.5)));
}

#[test]
fn mix_factor_from_an_edge() {
    let mut g = Graph::new();
    let f = value_node(&mut g, 0.25);
    let mix = g.add_node(NodeKind::ColorMix);
    g.connect(f, "value", mix, "factor").unwrap();
    assert!(color_approx_eq(color_of(&g, mix), Color::gray(0.25)));
}

#[test]
fn ramp_interpolates_between_three_stops() {
    let mut g = Graph::new();
    let low = node_with(&mut g, NodeKind::ColorRamp, &[("t", ParamValue::Float(0.25))]);
    let high = node_with(&mut g, NodeKind::ColorRamp, &[("t", ParamValue::Float(0.75))]);
    assert!(color_approx_eq(color_of(&g, low), Color::gray(0.25)));
    assert!(color_approx_eq(color_of(&g, high), Color::gray(0.75)));
}

#[test]
fn hsv_primaries() {
    let mut g = Graph::new();
    let red = g.add_node(NodeKind::ColorHsv);
    let blue = node_with(&mut g, NodeKind::ColorHsv, &[("h", ParamValue::Float(2.0 / 3.0))]);
    assert!(color_approx_eq(color_of(&g, red), Color::rgb(1.0, 0.0, 0.0)));
    assert!(color_approx_eq(color_of(&g, blue), Color::rgb(0.0, 0.0, 1.0)));
}

#[test]
fn brightness_shifts_and_contrast_pivots() {
    let mut g = Graph::new();
    let bright = node_with(
        &mut g,
        NodeKind::ColorBrightnessContrast,
        &[("brightness", ParamValue::Float(0.2))],
    );
    let contrast = node_with(
        &mut g,
        NodeKind::ColorBrightnessContrast,
        &[
            ("color", ParamValue::Color([0.75, 0.5, 0.25])),
            ("contrast", ParamValue::Float(1.0)),
        ],
    );
    assert!(color_approx_eq(color_of(&g, bright), Color::gray(0.7)));
    assert!(color_approx_eq(color_of(&g, contrast), Color::rgb(1.0, 0.5, 0.0)));
}

#[test]
fn invert_split_and_combine() {
    let mut g = Graph::new();
    let c = color_node(&mut g, [0.2, 0.4, 0.6]);
    let inv = g.add_node(NodeKind::ColorInvert);
    let split = g.add_node(NodeKind::ColorSplit);
    let combine = g.add_node(NodeKind::ColorCombine);
    g.connect(c, "color", inv, "color").unwrap();
    g.connect(inv, "color", split, "color").unwrap();
    g.connect(split, "b", combine, "r").unwrap();
    g.connect(split, "r", combine, "b").unwrap();

    let program = super::Program::compile(&g);
    let eval = program.evaluate((0.0, 0.0));
    assert!(approx_eq(eval.get(split, "r").as_float(), 0.8));
    assert!(approx_eq(eval.get(split, "g").as_float(), 0.6));
    assert!(color_approx_eq(
        eval.get(combine, "color").as_color(),
        Color::rgb(0.4, 0.0, 0.8)
    ));
}

#[test]
fn float_into_color_port_is_gray() {
    let mut g = Graph::new();
    let v = value_node(&mut g, 0.3);
    let inv = g.add_node(NodeKind::ColorInvert);
    g.connect(v, "value", inv, "color").unwrap();
    assert!(color_approx_eq(color_of(&g, inv), Color::gray(0.7)));
}
