//! Groove modulation of the profile's radial offset.
//!
//! A groove is a channel carved across the band. It only ever lowers the
//! radial offset `y` of profile points that fall inside its span, and never
//! below [`GROOVE_FLOOR_RATIO`] of the half-height.

use ring_types::{Groove, GrooveType};

use crate::MM_TO_UNITS;

/// Grooved points never drop below `half_height * GROOVE_FLOOR_RATIO`.
pub const GROOVE_FLOOR_RATIO: f64 = 0.2;

/// Number of lateral oscillations a wave groove makes per revolution.
pub const WAVE_OSCILLATIONS: f64 = 3.0;

/// Lateral amplitude of a wave groove as a fraction of the band width.
pub const WAVE_AMPLITUDE: f64 = 0.25;

/// Shadow grooves span 1.5x the nominal width at half the depth.
const SHADOW_SPAN: f64 = 1.5;
const SHADOW_DEPTH: f64 = 0.5;

/// Cross-section dimensions in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSection {
    pub width: f64,
    pub height: f64,
}

impl BandSection {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Groove center offset for a wave groove at revolution angle `theta`.
///
/// `sin(6θ)` gives three full lateral oscillations around the ring.
pub fn wave_lateral_offset(theta: f64, width: f64) -> f64 {
    (theta * 2.0 * WAVE_OSCILLATIONS).sin() * (width * WAVE_AMPLITUDE)
}

/// Applies one groove to the profile of one angular slice.
#[derive(Debug, Clone, Copy)]
pub struct GrooveModulator<'a> {
    groove: &'a Groove,
    section: BandSection,
    lateral_offset: f64,
}

impl<'a> GrooveModulator<'a> {
    /// `lateral_offset` shifts the groove center along the band width; it is
    /// nonzero only for wave grooves.
    pub fn new(groove: &'a Groove, section: BandSection, lateral_offset: f64) -> Self {
        Self {
            groove,
            section,
            lateral_offset,
        }
    }

    /// Axial position of the groove center.
    pub fn center(&self) -> f64 {
        -self.section.half_width() + self.groove.position * self.section.width + self.lateral_offset
    }

    pub fn floor(&self) -> f64 {
        self.section.half_height() * GROOVE_FLOOR_RATIO
    }

    /// Radial offset at axial position `x` after carving the groove into `y`.
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        let gw = self.groove.width * MM_TO_UNITS;
        let gd = self.groove.depth * MM_TO_UNITS;
        let gcx = self.center();

        match self.groove.kind {
            GrooveType::None => y,
            GrooveType::Shadow => {
                let half_span = gw * SHADOW_SPAN / 2.0;
                if !inside(x, gcx, half_span) {
                    return y;
                }
                let dist = (x - gcx) / half_span;
                let falloff = (dist * std::f64::consts::FRAC_PI_2).cos();
                (y - gd * SHADOW_DEPTH * falloff).max(self.floor())
            }
            GrooveType::V => {
                let half_span = gw / 2.0;
                if !inside(x, gcx, half_span) {
                    return y;
                }
                let depth = gd * (1.0 - (x - gcx).abs() / half_span);
                (y - depth).max(self.floor())
            }
            // Wave grooves share the square profile; the caller moves the center.
            GrooveType::U | GrooveType::Wave => {
                if !inside(x, gcx, gw / 2.0) {
                    return y;
                }
                (y - gd).max(self.floor())
            }
        }
    }
}

fn inside(x: f64, center: f64, half_span: f64) -> bool {
    x > center - half_span && x < center + half_span
}
