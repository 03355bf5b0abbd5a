//! Tests for the node-graph evaluator.

mod test_color;
mod test_mask;
mod test_pattern;

use skinforge_spec::{Connection, Graph, NodeId, NodeKind, ParamValue};

use super::{render_program, NodeValue, Op, Program, MAX_INPUTS};
use crate::color::Color;
use crate::surface::Surface;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn color_approx_eq(a: Color, b: Color) -> bool {
    approx_eq(a.r, b.r) && approx_eq(a.g, b.g) && approx_eq(a.b, b.b)
}

fn node_with(g: &mut Graph, kind: NodeKind, params: &[(&str, ParamValue)]) -> NodeId {
    let id = g.add_node(kind);
    for (param, value) in params {
        g.set_param(id, param, *value).unwrap();
    }
    id
}

fn value_node(g: &mut Graph, v: f64) -> NodeId {
    node_with(g, NodeKind::ValueInput, &[("value", ParamValue::Float(v))])
}

fn color_node(g: &mut Graph, c: [f64; 3]) -> NodeId {
    node_with(g, NodeKind::ColorInput, &[("color", ParamValue::Color(c))])
}

fn eval_at(g: &Graph, uv: (f64, f64), node: NodeId, port: &str) -> NodeValue {
    Program::compile(g).evaluate(uv).get(node, port)
}

fn float_at(g: &Graph, node: NodeId, port: &str) -> f64 {
    eval_at(g, (0.5, 0.5), node, port).as_float()
}

// Output node and input resolution

#[test]
fn unconnected_mask_leaves_color_unchanged() {
    let mut g = Graph::new();
    let c = color_node(&mut g, [0.2, 0.4, 0.6]);
    let out = g.add_node(NodeKind::OutputPattern);
    g.connect(c, "color", out, "color").unwrap();

    let color = Program::compile(&g).evaluate((0.3, 0.3)).color();
    assert!(color_approx_eq(color, Color::rgb(0.2, 0.4, 0.6)));
}

#[test]
fn connected_mask_scales_color() {
    let mut g = Graph::new();
    let c = color_node(&mut g, [0.2, 0.4, 0.6]);
    let m = value_node(&mut g, 0.5);
    let out = g.add_node(NodeKind::OutputPattern);
    g.connect(c, "color", out, "color").unwrap();
    g.connect(m, "value", out, "mask").unwrap();

    let color = Program::compile(&g).evaluate((0.0, 0.0)).color();
    assert!(color_approx_eq(color, Color::rgb(0.1, 0.2, 0.3)));
}

#[test]
fn unconnected_output_color_is_neutral() {
    let mut g = Graph::new();
    g.add_node(NodeKind::OutputPattern);
    let color = Program::compile(&g).evaluate((0.0, 0.0)).color();
    assert_eq!(color, Color::NEUTRAL);
}

#[test]
fn replaced_edge_has_no_residual_effect() {
    let mut g = Graph::new();
    let a = value_node(&mut g, 0.1);
    let b = value_node(&mut g, 0.9);
    let add = g.add_node(NodeKind::MathAdd);
    g.connect(a, "value", add, "a").unwrap();
    assert!(approx_eq(float_at(&g, add, "value"), 0.1));

    g.connect(b, "value", add, "a").unwrap();
    assert!(approx_eq(float_at(&g, add, "value"), 0.9));
}

#[test]
fn duplicate_edges_in_a_document_resolve_to_the_last() {
    let mut g = Graph::new();
    let a = value_node(&mut g, 0.1);
    let b = value_node(&mut g, 0.9);
    let abs = g.add_node(NodeKind::MathAbs);
    g.connections.push(Connection::new(a, "value", abs, "value"));
    g.connections.push(Connection::new(b, "value", abs, "value"));
    assert!(approx_eq(float_at(&g, abs, "value"), 0.9));
}

#[test]
fn unknown_source_port_reads_neutral() {
    let mut g = Graph::new();
    let a = value_node(&mut g, 0.1);
    let abs = g.add_node(NodeKind::MathAbs);
    g.connections.push(Connection::new(a, "nope", abs, "value"));
    assert!(approx_eq(float_at(&g, abs, "value"), 0.5));
}

#[test]
fn empty_graph_samples_neutral() {
    let program = Program::compile(&Graph::new());
    let mut values = program.scratch();
    assert_eq!(program.sample((0.5, 0.5), &mut values), Color::NEUTRAL);
    assert_eq!(program.output_node(), None);
}

#[test]
fn output_downstream_of_a_cycle_is_neutral() {
    let mut g = Graph::new();
    let x = g.add_node(NodeKind::MathAdd);
    let y = g.add_node(NodeKind::MathAdd);
    let out = g.add_node(NodeKind::OutputPattern);
    g.connect(x, "value", y, "a").unwrap();
    g.connect(y, "value", x, "a").unwrap();
    g.connect(y, "value", out, "mask").unwrap();

    let program = Program::compile(&g);
    assert_eq!(program.excluded(), &[x, y, out]);
    let eval = program.evaluate((0.5, 0.5));
    assert_eq!(eval.get(x, "value"), NodeValue::NEUTRAL);
    assert_eq!(eval.color(), Color::NEUTRAL);
    assert!(eval.outputs(out).is_empty());
}

#[test]
fn stored_params_are_revalidated_at_compile_time() {
    let json = r#"{
        "nodes": [
            { "id": 0, "kind": "noise-perlin", "params": { "octaves": 99, "scale": -4.0, "seed": 7 } }
        ]
    }"#;
    let g: Graph = serde_json::from_str(json).unwrap();
    let program = Program::compile(&g);
    assert_eq!(
        program.steps()[0].op,
        Op::Fbm {
            scale: 0.001,
            octaves: 10,
            persistence: 0.5,
            lacunarity: 2.0,
            seed: 7,
        }
    );
}

#[test]
fn outputs_lists_every_port() {
    let mut g = Graph::new();
    let uv = g.add_node(NodeKind::UvInput);
    let program = Program::compile(&g);
    let eval = program.evaluate((0.25, 0.75));
    assert_eq!(
        eval.outputs(uv),
        vec![
            ("uv", NodeValue::Vector2(0.25, 0.75)),
            ("u", NodeValue::Float(0.25)),
            ("v", NodeValue::Float(0.75)),
        ]
    );
}

#[test]
fn catalog_fits_the_argument_buffer() {
    for kind in NodeKind::ALL {
        assert!(kind.definition().inputs.len() <= MAX_INPUTS, "{}", kind);
    }
}

// Full-image rendering

fn u_ramp_graph() -> Graph {
    let mut g = Graph::new();
    let uv = g.add_node(NodeKind::UvInput);
    let rgb = g.add_node(NodeKind::ColorCombine);
    let out = g.add_node(NodeKind::OutputPattern);
    g.connect(uv, "u", rgb, "r").unwrap();
    g.connect(rgb, "color", out, "color").unwrap();
    g
}

#[test]
fn render_samples_texel_origins() {
    let program = Program::compile(&u_ramp_graph());
    let mut surface = Surface::try_new(8, [0, 0, 0, 0]).unwrap();
    render_program(&program, &mut surface);

    for x in 0..8u32 {
        let expected = Color::gray(x as f64 / 8.0).to_rgb8()[0];
        assert_eq!(surface.get(x, 3), [expected, 0, 0, 255]);
    }
}

#[test]
fn render_is_deterministic() {
    let mut g = u_ramp_graph();
    let noise = g.add_node(NodeKind::NoiseFbm);
    let out = g.output_node().unwrap().id;
    g.connect(noise, "value", out, "mask").unwrap();
    let program = Program::compile(&g);

    let mut a = Surface::try_new(32, [0; 4]).unwrap();
    let mut b = Surface::try_new(32, [0; 4]).unwrap();
    render_program(&program, &mut a);
    render_program(&program, &mut b);
    assert_eq!(a.as_bytes(), b.as_bytes());
}
