pub mod engraving;
pub mod geometry;
pub mod groove;
pub mod material;
pub mod partition;
pub mod profile;
pub mod stones;

pub use engraving::{anchor, EngravingAnchor};
pub use groove::{BandSection, GrooveModulator};
pub use partition::{classify, PartitionLayout};
pub use profile::{generate, ProfilePoint, PROFILE_LEN, PROFILE_STEPS};
pub use stones::{plan, LayoutStrategy, PlacementEntry, PlacementList};

use ring_types::RingConfig;
use tracing::warn;

/// Model units per millimeter (one unit is 10 mm).
pub const MM_TO_UNITS: f64 = 0.1;

/// Inner circumference substituted for a zero, negative or non-finite ring size (mm).
pub const DEFAULT_CIRCUMFERENCE_MM: f64 = 54.0;

/// Band height substituted for a non-finite height (mm).
pub const DEFAULT_HEIGHT_MM: f64 = 1.8;

/// Band width substituted for a non-finite width (mm).
pub const DEFAULT_WIDTH_MM: f64 = 4.0;

/// `value`, or `fallback` when `value` is NaN or infinite.
pub fn finite_or(value: f64, fallback: f64, parameter: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(parameter, value, fallback, "non-finite input replaced");
        fallback
    }
}

/// `size`, or the default circumference when it is not a usable length.
pub fn circumference_or_default(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        warn!(
            parameter = "size",
            value = size,
            fallback = DEFAULT_CIRCUMFERENCE_MM,
            "degenerate ring size replaced"
        );
        DEFAULT_CIRCUMFERENCE_MM
    }
}

/// Inner radius in model units for a ring of inner circumference `size_mm`.
pub fn ring_radius(size_mm: f64) -> f64 {
    size_mm / (2.0 * std::f64::consts::PI) * MM_TO_UNITS
}

/// Band dimensions in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandGeometry {
    /// Inner radius.
    pub radius: f64,
    /// Axial width.
    pub width: f64,
    /// Radial height.
    pub height: f64,
}

impl BandGeometry {
    /// Non-finite inputs, and a size that is not positive, fall back to the
    /// catalog defaults.
    pub fn from_mm(size: f64, width: f64, height: f64) -> Self {
        Self {
            radius: ring_radius(circumference_or_default(size)),
            width: finite_or(width, DEFAULT_WIDTH_MM, "width") * MM_TO_UNITS,
            height: finite_or(height, DEFAULT_HEIGHT_MM, "height") * MM_TO_UNITS,
        }
    }

    pub fn from_config(config: &RingConfig) -> Self {
        Self::from_mm(config.size, config.width, config.height)
    }

    /// Radius of the outer surface stones sit on.
    pub fn surface_radius(&self) -> f64 {
        self.radius + self.height * 0.5
    }

    pub fn section(&self) -> BandSection {
        BandSection::new(self.width, self.height)
    }
}
