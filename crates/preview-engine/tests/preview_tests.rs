//! End-to-end preview of JSON-loaded configurations.

use preview_engine::{PairPreview, PreviewEngine};
use ring_tessellation::{validate_mesh, MeshSettings};
use ring_types::{RingConfig, RingPair};

const CONFIG: &str = r#"{
    "id": 1,
    "profile": "P3",
    "size": 58.0,
    "width": 6.0,
    "height": 2.0,
    "metal": { "type": "gold", "karat": 18, "color": "yellow", "finish": "polished" },
    "partition": { "count": 3, "ratio": "1:2:1", "shape": "wave" },
    "segments": [
        { "metal": "gold", "karat": 18, "color": "yellow", "finish": "polished" },
        { "metal": "gold", "karat": 18, "color": "white", "finish": "matte" },
        { "metal": "gold", "karat": 18, "color": "rose", "finish": "polished" }
    ],
    "groove": { "type": "wave", "position": 0.5, "width": 0.6, "depth": 0.3 },
    "edgeStyle": "comfort",
    "stones": { "enabled": true, "type": "sapphire", "setting": "pave", "count": 10, "size": 0.05 },
    "engraving": {
        "enabled": true,
        "text": "always",
        "type": "laser",
        "font": "font2",
        "position": "inside",
        "isHandwriting": false,
        "isFingerprint": false,
        "isGraphics": false
    },
    "autoThickness": false
}"#;

#[test]
fn json_config_produces_complete_frame() {
    let config = RingConfig::from_json(CONFIG).expect("valid config");
    let mut engine = PreviewEngine::new(MeshSettings::draft());
    let frame = engine.update(&config);

    let report = validate_mesh(&frame.mesh);
    assert!(report.is_renderable());
    assert!(report.is_manifold());

    assert_eq!(frame.materials.len(), 3);
    assert!(frame.mesh.groups.iter().all(|g| g.material_index < 3));
    assert_eq!(frame.placements.len(), 10);
    assert_eq!(frame.gem.color, "#0000ff");

    let anchor = frame.engraving.as_deref().expect("engraving enabled");
    assert_eq!(anchor.text, "always");
    assert_eq!(anchor.color, "#222222");
}

#[test]
fn pair_preview_uses_catalog_defaults() {
    let pair = RingPair::new();
    let mut preview = PairPreview::new(MeshSettings::draft());
    let (first, second) = preview.update(&pair);
    // Ring 1 is the wider band.
    let extent = |mesh: &ring_tessellation::RingMesh| {
        let (min, max) = validate_mesh(mesh).bounds.expect("non-empty");
        max[1] - min[1]
    };
    assert!(extent(first.mesh.as_ref()) > extent(second.mesh.as_ref()));
    assert!(first.placements.is_empty());
    assert!(second.engraving.is_none());
}

#[test]
fn frame_serializes_for_collaborators() {
    let mut engine = PreviewEngine::default();
    let frame = engine.update(&RingConfig::default_for(2));
    let json = serde_json::to_string(frame.mesh.as_ref()).expect("mesh serializes");
    assert!(json.contains("\"groups\""));
    let stats = serde_json::to_value(engine.stats()).expect("stats serialize");
    assert_eq!(stats["mesh_builds"], 1);
}

#[test]
fn zero_size_frame_matches_default_circumference() {
    let mut config = RingConfig::from_json(CONFIG).expect("valid config");
    config.size = 0.0;
    let mut engine = PreviewEngine::new(MeshSettings::draft());
    let degenerate = engine.update(&config);
    config.size = 54.0;
    let fallback = engine.update(&config);

    let anchor = degenerate.engraving.as_deref().expect("engraving enabled");
    assert!(anchor.position.z > 0.0);
    assert!(anchor.max_width > 0.0);
    assert_eq!(Some(anchor), fallback.engraving.as_deref());
    assert_eq!(degenerate.mesh.positions, fallback.mesh.positions);
    assert!(validate_mesh(&degenerate.mesh).is_renderable());
}
