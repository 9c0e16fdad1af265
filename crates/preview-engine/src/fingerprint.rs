//! Cache keys over the configuration subsets each output depends on.
//!
//! Floats are compared by bit pattern, so a NaN input matches itself and
//! `0.0` differs from `-0.0`.

use ring_tessellation::MeshSettings;
use ring_types::{
    EdgeStyle, EngravingConfig, GrooveType, MetalConfig, PartitionConfig, ProfileType, RingConfig,
    SegmentConfig, StoneSetting, StoneType,
};

/// Bit pattern of an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatBits(u64);

impl From<f64> for FloatBits {
    fn from(value: f64) -> Self {
        Self(value.to_bits())
    }
}

/// Inputs of the band mesh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeshFingerprint {
    profile: ProfileType,
    size: FloatBits,
    width: FloatBits,
    height: FloatBits,
    edge_style: EdgeStyle,
    groove: (GrooveType, FloatBits, FloatBits, FloatBits),
    partition: PartitionConfig,
    settings: MeshSettings,
}

impl MeshFingerprint {
    pub fn of(config: &RingConfig, settings: &MeshSettings) -> Self {
        let g = &config.groove;
        Self {
            profile: config.profile,
            size: config.size.into(),
            width: config.width.into(),
            height: config.height.into(),
            edge_style: config.edge_style,
            groove: (g.kind, g.position.into(), g.width.into(), g.depth.into()),
            partition: config.partition.clone(),
            settings: *settings,
        }
    }
}

/// Inputs of the stone layout. Gem type and stone size only affect rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoneFingerprint {
    enabled: bool,
    setting: StoneSetting,
    count: u32,
    size: FloatBits,
    width: FloatBits,
    height: FloatBits,
}

impl StoneFingerprint {
    pub fn of(config: &RingConfig) -> Self {
        let s = &config.stones;
        Self {
            enabled: s.enabled,
            setting: s.setting,
            count: s.count,
            size: config.size.into(),
            width: config.width.into(),
            height: config.height.into(),
        }
    }
}

/// Inputs of the engraving anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EngravingFingerprint {
    engraving: EngravingConfig,
    size: FloatBits,
    height: FloatBits,
}

impl EngravingFingerprint {
    pub fn of(config: &RingConfig) -> Self {
        Self {
            engraving: config.engraving.clone(),
            size: config.size.into(),
            height: config.height.into(),
        }
    }
}

/// Inputs of the metal and gem descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialFingerprint {
    metal: MetalConfig,
    regions: u8,
    segments: Vec<SegmentConfig>,
    gem: StoneType,
}

impl MaterialFingerprint {
    pub fn of(config: &RingConfig) -> Self {
        Self {
            metal: config.metal,
            regions: config.partition.count,
            segments: config.segments.clone(),
            gem: config.stones.kind,
        }
    }
}
