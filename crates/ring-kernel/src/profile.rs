//! Cross-section profile curves.
//!
//! A profile is the outer contour of one angular slice of the band: `x` runs
//! across the band width, `y` is the radial offset added to the ring radius.
//! Every curve has exactly [`PROFILE_STEPS`]` + 1` points so that slices can be
//! stitched into a regular quad grid.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use ring_types::{EdgeStyle, Groove, ProfileType};

use crate::groove::{BandSection, GrooveModulator};

pub const PROFILE_STEPS: usize = 64;

/// Number of points in every generated profile.
pub const PROFILE_LEN: usize = PROFILE_STEPS + 1;

/// Shoulder fraction of the beveled (P7) profile on each side.
const BEVEL_SHOULDER: f64 = 0.15;

/// One point of a cross-section: axial offset `x`, radial offset `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: f64,
    pub y: f64,
}

impl ProfilePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Edge softening factor. Only the two end points of a profile are scaled,
/// by `1 - factor * 0.3`.
pub fn edge_rounding(edge: EdgeStyle) -> f64 {
    match edge {
        EdgeStyle::Rounded => 0.4,
        EdgeStyle::Comfort => 0.3,
        EdgeStyle::Beveled => 0.15,
        EdgeStyle::Flat => 0.0,
    }
}

/// Base radial offset of `profile` at parameter `t` in `[0, 1]`.
pub fn base_offset(profile: ProfileType, t: f64, hh: f64) -> f64 {
    let bump = (t * PI).sin() * hh;
    match profile {
        ProfileType::P1 => hh,
        ProfileType::P2 => hh + bump * 0.4,
        ProfileType::P3 => hh + bump * 0.6,
        ProfileType::P4 => hh + bump * 0.15,
        ProfileType::P5 => hh - bump * 0.3,
        ProfileType::P6 => {
            let peak = 1.0 - (t - 0.5).abs() * 2.0;
            hh + peak * hh * 0.8
        }
        ProfileType::P7 => {
            if t < BEVEL_SHOULDER {
                hh * 0.7 + (t / BEVEL_SHOULDER) * hh * 0.3
            } else if t > 1.0 - BEVEL_SHOULDER {
                hh * 0.7 + ((1.0 - t) / BEVEL_SHOULDER) * hh * 0.3
            } else {
                hh
            }
        }
        ProfileType::P8 => hh + bump * 0.25,
        // P9..P15: dome family whose curvature grows with the catalog number.
        other => {
            let variant = f64::from(other.number()) - 8.0;
            hh + bump * (0.1 + variant * 0.12)
        }
    }
}

/// Generate the profile curve for one angular slice.
///
/// `width` and `height` are in model units. `lateral_offset` shifts the
/// groove center and is zero unless the groove is a wave groove.
pub fn generate(
    profile: ProfileType,
    width: f64,
    height: f64,
    edge_style: EdgeStyle,
    groove: &Groove,
    lateral_offset: f64,
) -> Vec<ProfilePoint> {
    let section = BandSection::new(width, height);
    let hw = section.half_width();
    let hh = section.half_height();
    let modulator = GrooveModulator::new(groove, section, lateral_offset);

    let mut points: Vec<ProfilePoint> = (0..=PROFILE_STEPS)
        .map(|i| {
            let t = i as f64 / PROFILE_STEPS as f64;
            let x = -hw + t * width;
            let y = modulator.apply(x, base_offset(profile, t, hh));
            ProfilePoint::new(x, y)
        })
        .collect();

    let edge = edge_rounding(edge_style);
    if edge > 0.0 && points.len() > 2 {
        let soften = 1.0 - edge * 0.3;
        let last = points.len() - 1;
        points[0].y *= soften;
        points[last].y *= soften;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_types::GrooveType;

    #[test]
    fn test_every_profile_has_fixed_length() {
        for profile in ProfileType::ALL {
            let pts = generate(profile, 0.5, 0.2, EdgeStyle::Rounded, &Groove::default(), 0.0);
            assert_eq!(pts.len(), PROFILE_LEN, "{profile:?}");
        }
    }

    #[test]
    fn test_flat_profile_is_constant() {
        let pts = generate(ProfileType::P1, 5.0, 2.0, EdgeStyle::Flat, &Groove::none(), 0.0);
        for p in &pts {
            assert!((p.y - 1.0).abs() < 1e-12);
        }
        assert_eq!(pts[0].x, -2.5);
        assert_eq!(pts[PROFILE_STEPS].x, 2.5);
    }

    #[test]
    fn test_edge_rounding_only_touches_ends() {
        let pts = generate(ProfileType::P1, 5.0, 2.0, EdgeStyle::Rounded, &Groove::none(), 0.0);
        assert!((pts[0].y - 0.88).abs() < 1e-12);
        assert!((pts[PROFILE_STEPS].y - 0.88).abs() < 1e-12);
        assert_eq!(pts[1].y, 1.0);
        assert_eq!(pts[PROFILE_STEPS - 1].y, 1.0);
    }

    #[test]
    fn test_edge_rounding_order() {
        assert!(edge_rounding(EdgeStyle::Rounded) > edge_rounding(EdgeStyle::Comfort));
        assert!(edge_rounding(EdgeStyle::Comfort) > edge_rounding(EdgeStyle::Beveled));
        assert!(edge_rounding(EdgeStyle::Beveled) > edge_rounding(EdgeStyle::Flat));
        assert_eq!(edge_rounding(EdgeStyle::Flat), 0.0);
    }

    #[test]
    fn test_dome_peaks_at_center() {
        let pts = generate(ProfileType::P2, 1.0, 1.0, EdgeStyle::Flat, &Groove::none(), 0.0);
        let mid = pts[PROFILE_STEPS / 2].y;
        assert!((mid - 0.7).abs() < 1e-12);
        assert!(pts.iter().all(|p| p.y <= mid + 1e-12));
    }

    #[test]
    fn test_concave_dips_at_center() {
        let pts = generate(ProfileType::P5, 1.0, 1.0, EdgeStyle::Flat, &Groove::none(), 0.0);
        assert!((pts[PROFILE_STEPS / 2].y - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_knife_edge_peak() {
        let pts = generate(ProfileType::P6, 1.0, 1.0, EdgeStyle::Flat, &Groove::none(), 0.0);
        assert!((pts[PROFILE_STEPS / 2].y - 0.9).abs() < 1e-12);
        assert!((pts[0].y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bevel_shoulders() {
        let hh = 1.0;
        assert!((base_offset(ProfileType::P7, 0.0, hh) - 0.7).abs() < 1e-12);
        assert_eq!(base_offset(ProfileType::P7, 0.5, hh), 1.0);
        assert!((base_offset(ProfileType::P7, 1.0, hh) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_variant_family_grows() {
        let p9 = base_offset(ProfileType::P9, 0.5, 1.0);
        let p15 = base_offset(ProfileType::P15, 0.5, 1.0);
        assert!((p9 - 1.22).abs() < 1e-12);
        assert!((p15 - 1.94).abs() < 1e-12);
    }

    #[test]
    fn test_v_groove_center_depth() {
        let groove = Groove {
            kind: GrooveType::V,
            position: 0.5,
            width: 0.2,
            depth: 0.1,
        };
        let flat = generate(ProfileType::P1, 0.5, 0.2, EdgeStyle::Flat, &Groove::none(), 0.0);
        let cut = generate(ProfileType::P1, 0.5, 0.2, EdgeStyle::Flat, &groove, 0.0);
        let center = PROFILE_STEPS / 2;
        assert_eq!(cut[center].x, 0.0);
        assert!((flat[center].y - cut[center].y - 0.01).abs() < 1e-12);
        for (a, b) in flat.iter().zip(&cut) {
            if a.x.abs() >= 0.01 {
                assert_eq!(a.y, b.y);
            }
        }
    }

    #[test]
    fn test_generate_is_bitwise_deterministic() {
        let groove = Groove {
            kind: GrooveType::Shadow,
            position: 0.3,
            width: 0.5,
            depth: 0.2,
        };
        let a = generate(ProfileType::P11, 0.45, 0.18, EdgeStyle::Comfort, &groove, 0.013);
        let b = generate(ProfileType::P11, 0.45, 0.18, EdgeStyle::Comfort, &groove, 0.013);
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }
}
