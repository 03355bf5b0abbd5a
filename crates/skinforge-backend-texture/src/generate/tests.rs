use skinforge_spec::{
    BackendError, Graph, NodeKind, ParamValue, RenderBudget, RenderMode, SkinDocument, SkinSettings,
};

use super::*;

fn gray_graph(level: f64) -> Graph {
    let mut g = Graph::new();
    let c = g.add_node(NodeKind::ColorInput);
    g.set_param(c, "color", ParamValue::Color([level; 3])).unwrap();
    let out = g.add_node(NodeKind::OutputPattern);
    g.connect(c, "color", out, "color").unwrap();
    g
}

fn every_texel(surface: &Surface) -> impl Iterator<Item = [u8; 4]> + '_ {
    surface
        .as_bytes()
        .chunks_exact(4)
        .map(|t| [t[0], t[1], t[2], t[3]])
}

#[test]
fn zero_resolution_clamps_to_one() {
    let set = render_skin(&SkinSettings::default(), 0).unwrap();
    assert_eq!(set.size(), 1);
    for (_, surface) in set.iter() {
        assert_eq!(surface.as_bytes().len(), 4);
    }
}

#[test]
fn oversize_resolution_is_rejected_before_allocation() {
    let budget = RenderBudget {
        max_dimension: 16,
        ..Default::default()
    };
    let err = render_with_budget(&SkinSettings::default(), None, 17, &budget).unwrap_err();
    assert!(matches!(err, RenderError::InvalidResolution { .. }));
    assert_eq!(err.code(), "RENDER_001");
    assert_eq!(err.category(), "render");
}

#[test]
fn graph_node_budget_is_enforced() {
    let budget = RenderBudget {
        max_graph_nodes: 2,
        ..Default::default()
    };
    let mut g = gray_graph(0.5);
    g.add_node(NodeKind::MathAdd);
    let err = render_with_budget(&SkinSettings::default(), Some(&g), 8, &budget).unwrap_err();
    assert!(matches!(err, RenderError::GraphTooLarge { nodes: 3, max: 2 }));
    assert_eq!(err.code(), "RENDER_003");
}

#[test]
fn pattern_render_is_deterministic() {
    let settings = SkinSettings::default();
    let a = render_skin(&settings, 48).unwrap();
    let b = render_skin(&settings, 48).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn seed_changes_the_fingerprint() {
    let mut settings = SkinSettings::default();
    let a = render_skin(&settings, 48).unwrap();
    settings.pattern.seed += 1;
    let b = render_skin(&settings, 48).unwrap();
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn base_colors_follow_channel_settings() {
    let mut settings = SkinSettings::default();
    settings.roughness.base = 100.0;
    let base = base_colors(&settings, [1, 2, 3]);
    assert_eq!(base[Channel::Pattern.index()], [1, 2, 3]);
    assert_eq!(base[Channel::Normal.index()], [128, 128, 255]);
    assert_eq!(base[Channel::Roughness.index()], [255, 255, 255]);
    assert_eq!(base[Channel::Pearlescence.index()], [0, 0, 0]);
    assert_eq!(base[Channel::Ao.index()], [255, 255, 255]);
}

#[test]
fn empty_graph_renders_neutral_gray() {
    let set = render_skin_graph(&SkinSettings::default(), &Graph::new(), 8).unwrap();
    for texel in every_texel(set.get(Channel::Pattern)) {
        assert_eq!(texel, [128, 128, 128, 255]);
    }
}

#[test]
fn uniform_graph_output_yields_flat_normals() {
    let set = render_skin_graph(&SkinSettings::default(), &gray_graph(0.5), 16).unwrap();
    for texel in every_texel(set.get(Channel::Normal)) {
        assert_eq!(texel, [128, 128, 255, 255]);
    }
}

#[test]
fn graph_mode_derives_height_from_luminance() {
    let settings = SkinSettings::default();
    let dark = render_skin_graph(&settings, &gray_graph(0.1), 4).unwrap();
    let light = render_skin_graph(&settings, &gray_graph(0.9), 4).unwrap();
    let dark_h = dark.get(Channel::Height).get(0, 0);
    let light_h = light.get(Channel::Height).get(0, 0);
    assert!(light_h[0] > dark_h[0]);
}

#[test]
fn document_mode_selects_the_path() {
    let mut doc = SkinDocument {
        resolution: 8,
        mode: RenderMode::Graph,
        graph: Some(gray_graph(1.0)),
        ..Default::default()
    };
    let graph_set = render_document(&doc).unwrap();
    assert_eq!(graph_set.get(Channel::Pattern).get(3, 3), [255, 255, 255, 255]);

    doc.mode = RenderMode::Pattern;
    let pattern_set = render_document(&doc).unwrap();
    assert_eq!(pattern_set, render_skin(&doc.settings, 8).unwrap());
}

#[test]
fn graph_document_without_graph_is_neutral() {
    let doc = SkinDocument {
        resolution: 4,
        mode: RenderMode::Graph,
        graph: None,
        ..Default::default()
    };
    let set = render_document(&doc).unwrap();
    assert_eq!(set.get(Channel::Pattern).get(0, 0), [128, 128, 128, 255]);
}

#[test]
fn preview_renders_only_the_output_color() {
    let preview = compile_preview(&gray_graph(1.0), DEFAULT_PREVIEW_SIZE).unwrap();
    assert_eq!(preview.size(), DEFAULT_PREVIEW_SIZE);
    for texel in every_texel(&preview) {
        assert_eq!(texel, [255, 255, 255, 255]);
    }
}

#[test]
fn renderer_keeps_last_good_set_on_failure() {
    let mut renderer = SkinRenderer::with_budget(RenderBudget {
        max_dimension: 32,
        ..Default::default()
    });
    let mut doc = SkinDocument {
        resolution: 16,
        ..Default::default()
    };
    let fingerprint = renderer.render(&doc).unwrap().fingerprint();

    doc.resolution = 64;
    assert!(renderer.render(&doc).is_err());
    let kept = renderer.last().unwrap();
    assert_eq!(kept.size(), 16);
    assert_eq!(kept.fingerprint(), fingerprint);
}

#[test]
fn save_pngs_writes_one_file_per_channel() {
    let dir = tempfile::tempdir().unwrap();
    let set = render_skin(&SkinSettings::default(), 8).unwrap();
    let maps = set.save_pngs(&dir.path().join("out"), "skin").unwrap();

    assert_eq!(maps.len(), Channel::COUNT);
    for (map, channel) in maps.iter().zip(Channel::ALL) {
        assert_eq!(map.channel, channel);
        assert!(map.path.ends_with(format!("skin_{}.png", channel.as_str())));
        let bytes = std::fs::read(&map.path).unwrap();
        assert_eq!(map.hash, blake3::hash(&bytes).to_hex().to_string());
    }
}
