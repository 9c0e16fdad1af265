use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RatioError};

/// Cross-section profile of the band. `P1`..`P15` match the catalog numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    P10,
    P11,
    P12,
    P13,
    P14,
    P15,
}

impl ProfileType {
    pub const ALL: [ProfileType; 15] = [
        Self::P1,
        Self::P2,
        Self::P3,
        Self::P4,
        Self::P5,
        Self::P6,
        Self::P7,
        Self::P8,
        Self::P9,
        Self::P10,
        Self::P11,
        Self::P12,
        Self::P13,
        Self::P14,
        Self::P15,
    ];

    /// Catalog number, 1-based.
    pub fn number(self) -> u8 {
        match self {
            Self::P1 => 1,
            Self::P2 => 2,
            Self::P3 => 3,
            Self::P4 => 4,
            Self::P5 => 5,
            Self::P6 => 6,
            Self::P7 => 7,
            Self::P8 => 8,
            Self::P9 => 9,
            Self::P10 => 10,
            Self::P11 => 11,
            Self::P12 => 12,
            Self::P13 => 13,
            Self::P14 => 14,
            Self::P15 => 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    Rounded,
    Flat,
    Beveled,
    Comfort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrooveType {
    #[serde(rename = "none")]
    None,
    U,
    V,
    #[serde(rename = "shadow")]
    Shadow,
    #[serde(rename = "wave")]
    Wave,
}

/// Decorative channel across the band.
///
/// `position` is the groove center as a fraction of the band width (0 = left
/// edge, 1 = right edge). `width` and `depth` are in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Groove {
    #[serde(rename = "type")]
    pub kind: GrooveType,
    pub position: f64,
    pub width: f64,
    pub depth: f64,
}

impl Groove {
    pub fn none() -> Self {
        Self {
            kind: GrooveType::None,
            position: 0.5,
            width: 0.0,
            depth: 0.0,
        }
    }

    pub fn is_wave(&self) -> bool {
        self.kind == GrooveType::Wave
    }
}

impl Default for Groove {
    fn default() -> Self {
        Self {
            kind: GrooveType::U,
            position: 0.5,
            width: 0.2,
            depth: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionShape {
    Straight,
    Diagonal,
    Wave,
}

/// Multi-metal split of the band into `count` regions sized by `ratio`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionConfig {
    pub count: u8,
    /// Colon-separated relative sizes, e.g. `"1:2:1"`.
    pub ratio: String,
    pub shape: PartitionShape,
}

impl PartitionConfig {
    pub fn single() -> Self {
        Self {
            count: 1,
            ratio: "1".to_string(),
            shape: PartitionShape::Straight,
        }
    }

    /// Parse `ratio` into its positive weights, checking the token count
    /// against `count`.
    pub fn parse_ratio(&self) -> Result<Vec<f64>, RatioError> {
        let mut weights = Vec::new();
        for (index, token) in self.ratio.split(':').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                return Err(RatioError::EmptyToken { index });
            }
            let value: f64 = token.parse().map_err(|_| RatioError::NotANumber {
                token: token.to_string(),
            })?;
            if !value.is_finite() || value <= 0.0 {
                return Err(RatioError::NonPositive {
                    token: token.to_string(),
                });
            }
            weights.push(value);
        }
        if weights.len() != self.count as usize {
            return Err(RatioError::CountMismatch {
                expected: self.count as usize,
                found: weights.len(),
            });
        }
        Ok(weights)
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self::single()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneType {
    Diamond,
    Sapphire,
    Ruby,
    Emerald,
}

/// How stones are set into the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneSetting {
    None,
    SolitaireSmooth,
    Pave,
    Rail,
    Smooth,
    Across,
    AcrossSecond,
    ChannelSide,
    Free,
    Tension,
    TensionDiagonal,
    CanalAround,
    CanalDiagonal,
    /// Any setting name this build does not know; laid out as a plain row.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneConfig {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: StoneType,
    pub setting: StoneSetting,
    pub count: u32,
    /// Stone size factor applied by the renderer on top of the layout scale.
    pub size: f64,
}

impl Default for StoneConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: StoneType::Diamond,
            setting: StoneSetting::None,
            count: 1,
            size: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngravingType {
    Laser,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngravingPosition {
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngravingFont {
    Font1,
    Font2,
    Font3,
    Font4,
    Font5,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngravingConfig {
    pub enabled: bool,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EngravingType,
    pub font: EngravingFont,
    pub position: EngravingPosition,
    pub is_handwriting: bool,
    pub is_fingerprint: bool,
    pub is_graphics: bool,
}

impl EngravingConfig {
    /// True when there is something to inscribe.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.text.is_empty()
    }
}

impl Default for EngravingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            text: String::new(),
            kind: EngravingType::Laser,
            font: EngravingFont::Font1,
            position: EngravingPosition::Inside,
            is_handwriting: false,
            is_fingerprint: false,
            is_graphics: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalType {
    Gold,
    Platinum,
    Palladium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalColor {
    Yellow,
    White,
    Rose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceFinish {
    Polished,
    Matte,
    VerticalMatte,
    DiagonalMatte,
    IceMatte,
    SandCoarse,
    SandFine,
    HammeredPolished,
    HammeredMatte,
    Milled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetalConfig {
    #[serde(rename = "type")]
    pub kind: MetalType,
    pub karat: u8,
    pub color: MetalColor,
    pub finish: SurfaceFinish,
}

impl Default for MetalConfig {
    fn default() -> Self {
        Self {
            kind: MetalType::Gold,
            karat: 18,
            color: MetalColor::Yellow,
            finish: SurfaceFinish::Polished,
        }
    }
}

/// Metal assignment for one partition region. Index matches the mesh
/// material index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub metal: MetalType,
    pub color: MetalColor,
    pub karat: u8,
    pub finish: SurfaceFinish,
}

impl From<MetalConfig> for SegmentConfig {
    fn from(metal: MetalConfig) -> Self {
        Self {
            metal: metal.kind,
            color: metal.color,
            karat: metal.karat,
            finish: metal.finish,
        }
    }
}

/// Full description of one ring as held by the configuration store.
///
/// Dimensions are millimeters: `size` is the inner circumference, `width`
/// the axial band width and `height` the radial band thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingConfig {
    pub id: u32,
    pub profile: ProfileType,
    pub size: f64,
    pub width: f64,
    pub height: f64,
    pub metal: MetalConfig,
    pub partition: PartitionConfig,
    pub segments: Vec<SegmentConfig>,
    pub groove: Groove,
    pub edge_style: EdgeStyle,
    pub stones: StoneConfig,
    pub engraving: EngravingConfig,
    pub auto_thickness: bool,
}

impl RingConfig {
    /// Catalog defaults. Ring 1 is the larger band of the pair.
    pub fn default_for(id: u32) -> Self {
        let first = id == 1;
        let metal = MetalConfig::default();
        Self {
            id,
            profile: ProfileType::P7,
            size: if first { 62.0 } else { 54.0 },
            width: if first { 5.5 } else { 4.0 },
            height: 1.8,
            metal,
            partition: PartitionConfig::single(),
            segments: vec![SegmentConfig::from(metal)],
            groove: Groove::default(),
            edge_style: EdgeStyle::Beveled,
            stones: StoneConfig::default(),
            engraving: EngravingConfig::default(),
            auto_thickness: true,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Advisory validation for the configuration store. The geometry engine
    /// never calls this; it substitutes fallbacks instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (parameter, value) in [
            ("size", self.size),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { parameter, value });
            }
        }
        if !(0.0..=1.0).contains(&self.groove.position) {
            return Err(ConfigError::GroovePosition(self.groove.position));
        }
        if !(1..=3).contains(&self.partition.count) {
            return Err(ConfigError::PartitionCount(self.partition.count));
        }
        self.partition.parse_ratio()?;
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::default_for(1)
    }
}
