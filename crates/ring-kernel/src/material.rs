//! Material descriptors for the renderer.
//!
//! These are plain values computed per call. Pooling of GPU materials is left
//! to the rendering side.

use serde::{Deserialize, Serialize};

use ring_types::{MetalColor, MetalType, RingConfig, SegmentConfig, StoneType, SurfaceFinish};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishProperties {
    pub roughness: f64,
    pub metalness: f64,
    pub clearcoat: f64,
}

/// Metal surface for one mesh material index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalMaterial {
    /// Hex base color.
    pub color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub clearcoat: f64,
}

/// Transmissive gem surface shared by every stone of a ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemMaterial {
    pub color: String,
    pub transmission: f64,
    pub ior: f64,
    pub clearcoat: f64,
}

pub fn finish_properties(finish: SurfaceFinish) -> FinishProperties {
    let (roughness, metalness) = match finish {
        SurfaceFinish::Matte => (0.35, 1.0),
        SurfaceFinish::IceMatte => (0.5, 0.9),
        SurfaceFinish::SandCoarse => (0.7, 0.8),
        SurfaceFinish::SandFine => (0.4, 0.9),
        SurfaceFinish::HammeredPolished => (0.15, 1.0),
        SurfaceFinish::HammeredMatte => (0.5, 0.9),
        SurfaceFinish::Polished
        | SurfaceFinish::VerticalMatte
        | SurfaceFinish::DiagonalMatte
        | SurfaceFinish::Milled => (0.15, 1.0),
    };
    FinishProperties {
        roughness,
        metalness,
        clearcoat: 0.0,
    }
}

pub fn metal_color(metal: MetalType, color: MetalColor) -> &'static str {
    match (metal, color) {
        (MetalType::Gold, MetalColor::Yellow) => "#FFC840",
        (MetalType::Gold, MetalColor::White) => "#E6E6E6",
        (MetalType::Gold, MetalColor::Rose) => "#EFA88E",
        (MetalType::Platinum, _) => "#D9D9D9",
        (MetalType::Palladium, _) => "#C4C4C4",
    }
}

pub fn metal_material(metal: MetalType, color: MetalColor, finish: SurfaceFinish) -> MetalMaterial {
    let props = finish_properties(finish);
    MetalMaterial {
        color: metal_color(metal, color).to_string(),
        metalness: props.metalness,
        roughness: props.roughness,
        clearcoat: props.clearcoat,
    }
}

/// One material per partition region, indexed like the mesh groups.
///
/// Regions without a configured segment use the ring's base metal.
pub fn segment_materials(config: &RingConfig) -> Vec<MetalMaterial> {
    let base = SegmentConfig::from(config.metal);
    let regions = usize::from(config.partition.count.max(1)).max(config.segments.len());
    (0..regions)
        .map(|i| config.segments.get(i).copied().unwrap_or(base))
        .map(|s| metal_material(s.metal, s.color, s.finish))
        .collect()
}

pub fn gem_material(stone: StoneType) -> GemMaterial {
    let color = match stone {
        StoneType::Ruby => "#ff0000",
        StoneType::Sapphire => "#0000ff",
        StoneType::Emerald => "#00ff00",
        StoneType::Diamond => "#ffffff",
    };
    GemMaterial {
        color: color.to_string(),
        transmission: 0.95,
        ior: 2.4,
        clearcoat: 1.0,
    }
}
