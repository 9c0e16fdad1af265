//! Gemstone placement on the outer band surface.
//!
//! Stones sit on the surface radius `radius + height / 2` in the plane
//! perpendicular to the ring axis, at an angular offset `a` from the +X
//! direction. Each stone is turned by `-a` about the axis so its local frame
//! faces away from the ring center.

use nalgebra::{Similarity3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use ring_types::{StoneConfig, StoneSetting};

use crate::geometry::Point3d;
use crate::BandGeometry;

/// Renderer-side multiplier applied on top of `stones.size`.
pub const STONE_SIZE_FACTOR: f64 = 1.5;

pub const SOLITAIRE_STEP: f64 = 0.15;
pub const RAIL_STEP: f64 = 0.12;
pub const ROW_STEP: f64 = 0.15;
pub const PAVE_STEP: f64 = 0.1;
pub const PAVE_ROWS: usize = 3;
/// Pavé row spacing as a fraction of the band width.
pub const PAVE_ROW_SPACING: f64 = 0.3;

/// One placed stone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementEntry {
    pub position: Point3d,
    /// Euler angles (x, y, z) in radians.
    pub rotation: Option<[f64; 3]>,
    /// Strategy-relative scale; see [`PlacementEntry::render_scale`].
    pub scale: f64,
}

impl PlacementEntry {
    fn facing_out(angle: f64, radius: f64, axial: f64, scale: f64) -> Self {
        Self {
            position: Point3d::on_ring(radius, angle, axial),
            rotation: Some([0.0, -angle, 0.0]),
            scale,
        }
    }

    /// Angular offset of the stone around the ring axis.
    pub fn angle(&self) -> f64 {
        self.position.z.atan2(self.position.x)
    }

    /// Final uniform scale for the renderer, given the configured stone size.
    pub fn render_scale(&self, stone_size: f64) -> f64 {
        self.scale * stone_size * STONE_SIZE_FACTOR
    }

    /// Placement as a similarity transform at the given stone size.
    ///
    /// Planners only ever emit rotations about Y, where XYZ and nalgebra's
    /// roll-pitch-yaw orders agree.
    pub fn transform(&self, stone_size: f64) -> Similarity3<f64> {
        let [rx, ry, rz] = self.rotation.unwrap_or([0.0; 3]);
        Similarity3::from_parts(
            Translation3::new(self.position.x, self.position.y, self.position.z),
            UnitQuaternion::from_euler_angles(rx, ry, rz),
            self.render_scale(stone_size),
        )
    }
}

pub type PlacementList = Vec<PlacementEntry>;

/// Layout strategy selected by the setting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// No stones.
    Empty,
    /// Tight arc of full-size stones.
    Solitaire,
    /// Even row of slightly smaller channel stones.
    Rail,
    /// Three staggered rows of small stones.
    Pave,
    /// Plain even row of full-size stones.
    Row,
}

impl LayoutStrategy {
    pub fn for_setting(setting: StoneSetting) -> Self {
        match setting {
            StoneSetting::None => Self::Empty,
            StoneSetting::Smooth | StoneSetting::Tension | StoneSetting::SolitaireSmooth => Self::Solitaire,
            StoneSetting::Rail | StoneSetting::ChannelSide | StoneSetting::Across | StoneSetting::AcrossSecond => {
                Self::Rail
            }
            StoneSetting::Pave => Self::Pave,
            StoneSetting::Free
            | StoneSetting::CanalAround
            | StoneSetting::TensionDiagonal
            | StoneSetting::CanalDiagonal
            | StoneSetting::Unknown => Self::Row,
        }
    }
}

/// Plan stone placements for `stones` on `band`.
///
/// Returns exactly `stones.count` entries, or none when stones are disabled,
/// the setting is `none`, or the count is zero.
#[instrument(skip_all, fields(setting = ?stones.setting, count = stones.count))]
pub fn plan(stones: &StoneConfig, band: &BandGeometry) -> PlacementList {
    let strategy = LayoutStrategy::for_setting(stones.setting);
    if !stones.enabled || stones.count == 0 || strategy == LayoutStrategy::Empty {
        return Vec::new();
    }

    let count = stones.count as usize;
    let r = band.surface_radius();
    let placements = match strategy {
        LayoutStrategy::Empty => Vec::new(),
        LayoutStrategy::Solitaire => centered_row(count, SOLITAIRE_STEP, r, 1.0),
        LayoutStrategy::Rail => centered_row(count, RAIL_STEP, r, 0.8),
        LayoutStrategy::Row => centered_row(count, ROW_STEP, r, 1.0),
        LayoutStrategy::Pave => pave_grid(count, band.width, r),
    };

    debug!(?strategy, placed = placements.len(), surface_radius = r, "stones planned");
    placements
}

/// Angular offset of item `i` in a row of `n` centered on angle zero.
fn centered_angle(i: usize, n: usize, step: f64) -> f64 {
    (i as f64 - (n as f64 - 1.0) / 2.0) * step
}

fn centered_row(count: usize, step: f64, radius: f64, scale: f64) -> PlacementList {
    (0..count)
        .map(|i| PlacementEntry::facing_out(centered_angle(i, count, step), radius, 0.0, scale))
        .collect()
}

fn pave_grid(count: usize, band_width: f64, radius: f64) -> PlacementList {
    let per_row = count.div_ceil(PAVE_ROWS);
    let row_spacing = band_width * PAVE_ROW_SPACING;
    let mut placements = Vec::with_capacity(count);

    'rows: for row in 0..PAVE_ROWS {
        let axial = (row as f64 - 1.0) * row_spacing;
        let stagger = if row % 2 == 0 { 0.0 } else { PAVE_STEP * 0.5 };
        for col in 0..per_row {
            if placements.len() >= count {
                break 'rows;
            }
            let angle = centered_angle(col, per_row, PAVE_STEP) + stagger;
            placements.push(PlacementEntry::facing_out(angle, radius, axial, 0.6));
        }
    }

    placements
}
