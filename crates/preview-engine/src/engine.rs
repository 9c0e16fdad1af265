use std::sync::Arc;

use ring_kernel::material::{gem_material, segment_materials, GemMaterial, MetalMaterial};
use ring_kernel::{anchor, plan, BandGeometry, EngravingAnchor, PlacementList};
use ring_tessellation::{build_for_config, MeshSettings, RingMesh};
use ring_types::RingConfig;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::fingerprint::{EngravingFingerprint, MaterialFingerprint, MeshFingerprint, StoneFingerprint};

/// Everything a renderer needs to draw one ring.
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    pub mesh: Arc<RingMesh>,
    pub placements: Arc<PlacementList>,
    pub engraving: Option<Arc<EngravingAnchor>>,
    /// Indexed by mesh group material index.
    pub materials: Arc<Vec<MetalMaterial>>,
    pub gem: Arc<GemMaterial>,
}

/// Rebuild counters since the engine was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreviewStats {
    pub updates: usize,
    pub mesh_builds: usize,
    pub stone_builds: usize,
    pub engraving_builds: usize,
    pub material_builds: usize,
}

/// One cached output and the key it was built from.
#[derive(Debug)]
struct Slot<K, V> {
    entry: Option<(K, V)>,
}

impl<K: PartialEq, V: Clone> Slot<K, V> {
    fn new() -> Self {
        Self { entry: None }
    }

    /// Return the cached value for `key`, building it on a miss.
    fn get_or_build(&mut self, key: K, build: impl FnOnce() -> V) -> (V, bool) {
        if let Some((cached, value)) = &self.entry {
            if *cached == key {
                return (value.clone(), false);
            }
        }
        let value = build();
        self.entry = Some((key, value.clone()));
        (value, true)
    }
}

/// Incremental preview builder for a single ring.
///
/// Each output is keyed by a fingerprint of the configuration fields it reads;
/// an update rebuilds only the outputs whose fingerprint changed.
#[derive(Debug)]
pub struct PreviewEngine {
    settings: MeshSettings,
    mesh: Slot<MeshFingerprint, Arc<RingMesh>>,
    stones: Slot<StoneFingerprint, Arc<PlacementList>>,
    engraving: Slot<EngravingFingerprint, Option<Arc<EngravingAnchor>>>,
    materials: Slot<MaterialFingerprint, (Arc<Vec<MetalMaterial>>, Arc<GemMaterial>)>,
    stats: PreviewStats,
}

impl PreviewEngine {
    pub fn new(settings: MeshSettings) -> Self {
        Self {
            settings,
            mesh: Slot::new(),
            stones: Slot::new(),
            engraving: Slot::new(),
            materials: Slot::new(),
            stats: PreviewStats::default(),
        }
    }

    pub fn settings(&self) -> &MeshSettings {
        &self.settings
    }

    /// Change the mesh resolution. The next update rebuilds the mesh.
    pub fn set_settings(&mut self, settings: MeshSettings) {
        self.settings = settings;
    }

    pub fn stats(&self) -> PreviewStats {
        self.stats
    }

    /// Drop every cached output.
    pub fn clear(&mut self) {
        self.mesh = Slot::new();
        self.stones = Slot::new();
        self.engraving = Slot::new();
        self.materials = Slot::new();
    }

    #[instrument(skip_all, fields(ring = config.id))]
    pub fn update(&mut self, config: &RingConfig) -> PreviewFrame {
        self.stats.updates += 1;
        let settings = self.settings;

        let (mesh, rebuilt) = self
            .mesh
            .get_or_build(MeshFingerprint::of(config, &settings), || {
                Arc::new(build_for_config(config, &settings))
            });
        if rebuilt {
            self.stats.mesh_builds += 1;
        }

        let (placements, rebuilt) = self.stones.get_or_build(StoneFingerprint::of(config), || {
            Arc::new(plan(&config.stones, &BandGeometry::from_config(config)))
        });
        if rebuilt {
            self.stats.stone_builds += 1;
        }

        let (engraving, rebuilt) = self
            .engraving
            .get_or_build(EngravingFingerprint::of(config), || {
                anchor(&config.engraving, config.size, config.height).map(Arc::new)
            });
        if rebuilt {
            self.stats.engraving_builds += 1;
        }

        let ((materials, gem), rebuilt) =
            self.materials.get_or_build(MaterialFingerprint::of(config), || {
                (
                    Arc::new(segment_materials(config)),
                    Arc::new(gem_material(config.stones.kind)),
                )
            });
        if rebuilt {
            self.stats.material_builds += 1;
        }

        debug!(stats = ?self.stats, "preview cache state");
        info!(
            vertices = mesh.vertex_count(),
            stones = placements.len(),
            engraving = engraving.is_some(),
            "preview frame ready"
        );

        PreviewFrame {
            mesh,
            placements,
            engraving,
            materials,
            gem,
        }
    }
}

impl Default for PreviewEngine {
    fn default() -> Self {
        Self::new(MeshSettings::preview())
    }
}
