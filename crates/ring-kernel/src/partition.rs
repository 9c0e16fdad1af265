//! Assignment of band faces to metal regions.
//!
//! Faces are classified by their normalized center `(u, v)`: `u` runs around
//! the ring, `v` across the profile. Region boundaries are cumulative ratio
//! fractions in `v`, optionally bent by `u` for diagonal and wave seams.
//!
//! Bent boundaries are not re-sorted, so near a crossover a region can be
//! starved or duplicated. This only affects the look of the seam.

use std::f64::consts::PI;

use ring_types::{PartitionConfig, PartitionShape};
use tracing::warn;

/// Diagonal seams shift each boundary by `(u - 0.5) * DIAGONAL_SLOPE`.
pub const DIAGONAL_SLOPE: f64 = 1.0;

/// Wave seams shift each boundary by `sin(u * π * 6) * WAVE_SEAM_AMPLITUDE`.
pub const WAVE_SEAM_AMPLITUDE: f64 = 0.1;

/// Pre-parsed partition boundaries for classifying many faces.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionLayout {
    /// Cumulative fractions, last one 1.0. Empty for a single region.
    boundaries: Vec<f64>,
    shape: PartitionShape,
}

impl PartitionLayout {
    /// A layout with one region covering the whole band.
    pub fn single() -> Self {
        Self {
            boundaries: Vec::new(),
            shape: PartitionShape::Straight,
        }
    }

    /// Build a layout from the configuration. A malformed ratio degrades to a
    /// single region.
    pub fn from_config(partition: &PartitionConfig) -> Self {
        if partition.count <= 1 {
            return Self::single();
        }
        let weights = match partition.parse_ratio() {
            Ok(weights) => weights,
            Err(err) => {
                warn!(ratio = %partition.ratio, count = partition.count, %err, "partition ratio rejected, using single region");
                return Self::single();
            }
        };
        Self {
            boundaries: cumulative_fractions(&weights),
            shape: partition.shape,
        }
    }

    pub fn region_count(&self) -> usize {
        self.boundaries.len().max(1)
    }

    /// Boundary `k` as seen at circumferential position `u`.
    pub fn boundary_at(&self, k: usize, u: f64) -> f64 {
        let base = self.boundaries[k];
        match self.shape {
            PartitionShape::Straight => base,
            PartitionShape::Diagonal => base + (u - 0.5) * DIAGONAL_SLOPE,
            PartitionShape::Wave => base + (u * PI * 6.0).sin() * WAVE_SEAM_AMPLITUDE,
        }
    }

    /// Material index of the face centered at `(u, v)`.
    pub fn classify(&self, u: f64, v: f64) -> usize {
        if self.boundaries.len() <= 1 {
            return 0;
        }
        (0..self.boundaries.len())
            .find(|&k| v < self.boundary_at(k, u))
            .unwrap_or(self.boundaries.len() - 1)
    }
}

/// Material index for a single face. Prefer [`PartitionLayout`] when
/// classifying a whole mesh.
pub fn classify(u: f64, v: f64, partition: &PartitionConfig) -> usize {
    if partition.count <= 1 {
        return 0;
    }
    PartitionLayout::from_config(partition).classify(u, v)
}

/// `[1, 2, 1]` becomes `[0.25, 0.75, 1.0]`.
pub fn cumulative_fractions(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let mut acc = 0.0;
    weights
        .iter()
        .map(|w| {
            acc += w;
            acc / total
        })
        .collect()
}
