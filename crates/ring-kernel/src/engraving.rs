use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use ring_types::{EngravingConfig, EngravingType};

use crate::geometry::Point3d;
use crate::{circumference_or_default, finite_or, ring_radius, DEFAULT_HEIGHT_MM, MM_TO_UNITS};

/// Inward bias so the text floats just inside the inner surface.
pub const ENGRAVING_INSET: f64 = 0.005;

/// Text block width as a fraction of the ring radius.
pub const ENGRAVING_WIDTH_RATIO: f64 = 1.5;

pub const ENGRAVING_FONT_SIZE: f64 = 0.06;

/// Where and how inscribed text is laid out on the inner surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngravingAnchor {
    pub position: Point3d,
    /// Euler angles (x, y, z) in radians. The text faces the ring center.
    pub rotation: [f64; 3],
    pub max_width: f64,
    pub font_size: f64,
    /// Hex text color.
    pub color: String,
    pub text: String,
}

impl EngravingAnchor {
    pub fn transform(&self) -> Isometry3<f64> {
        let [rx, ry, rz] = self.rotation;
        Isometry3::from_parts(
            Translation3::new(self.position.x, self.position.y, self.position.z),
            UnitQuaternion::from_euler_angles(rx, ry, rz),
        )
    }
}

/// Compute the engraving anchor, or `None` when there is nothing to engrave.
///
/// A `size` that is zero, negative or non-finite falls back to a 54 mm
/// circumference, and a non-finite `height` to 1.8 mm, so the anchor always
/// sits inside the band with a positive layout width.
pub fn anchor(engraving: &EngravingConfig, size: f64, height: f64) -> Option<EngravingAnchor> {
    if !engraving.is_active() {
        return None;
    }

    let radius = ring_radius(circumference_or_default(size));
    let thickness = finite_or(height, DEFAULT_HEIGHT_MM, "height") * MM_TO_UNITS;
    let inner = radius - thickness / 2.0 - ENGRAVING_INSET;

    let color = match engraving.kind {
        EngravingType::Diamond => "#ffffff",
        EngravingType::Laser => "#222222",
    };

    Some(EngravingAnchor {
        position: Point3d::new(0.0, 0.0, inner),
        rotation: [0.0, PI, 0.0],
        max_width: radius * ENGRAVING_WIDTH_RATIO,
        font_size: ENGRAVING_FONT_SIZE,
        color: color.to_string(),
        text: engraving.text.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CIRCUMFERENCE_MM;
    use approx::assert_relative_eq;

    fn engraving(text: &str) -> EngravingConfig {
        EngravingConfig {
            enabled: true,
            text: text.to_string(),
            ..EngravingConfig::default()
        }
    }

    #[test]
    fn test_disabled_or_empty_is_none() {
        assert!(anchor(&EngravingConfig::default(), 54.0, 1.8).is_none());
        assert!(anchor(&engraving(""), 54.0, 1.8).is_none());
    }

    #[test]
    fn test_anchor_on_inner_surface() {
        let a = anchor(&engraving("forever"), 62.0, 2.0).unwrap();
        let radius = 62.0 / (2.0 * PI) * 0.1;
        assert_relative_eq!(a.position.z, radius - 0.1 - 0.005, epsilon = 1e-12);
        assert_relative_eq!(a.max_width, radius * 1.5, epsilon = 1e-12);
        assert_eq!(a.rotation, [0.0, PI, 0.0]);
        assert_eq!(a.color, "#222222");
        assert_eq!(a.text, "forever");
    }

    #[test]
    fn test_nan_size_uses_default_circumference() {
        let a = anchor(&engraving("J & M"), f64::NAN, 1.8).unwrap();
        let expected = anchor(&engraving("J & M"), DEFAULT_CIRCUMFERENCE_MM, 1.8).unwrap();
        assert_eq!(a, expected);
        assert!(a.position.z.is_finite());
        assert!(a.max_width.is_finite());
    }

    #[test]
    fn test_zero_size_uses_default_circumference() {
        let expected = anchor(&engraving("J & M"), DEFAULT_CIRCUMFERENCE_MM, 1.8).unwrap();
        for size in [0.0, -0.0, -54.0] {
            let a = anchor(&engraving("J & M"), size, 1.8).unwrap();
            assert_eq!(a, expected);
            assert!(a.position.z > 0.0);
            assert!(a.max_width > 0.0);
        }
    }

    #[test]
    fn test_nan_height_uses_default_height() {
        let a = anchor(&engraving("x"), 54.0, f64::NAN).unwrap();
        let expected = anchor(&engraving("x"), 54.0, DEFAULT_HEIGHT_MM).unwrap();
        assert_eq!(a.position, expected.position);
    }

    #[test]
    fn test_diamond_engraving_is_white() {
        let mut cfg = engraving("x");
        cfg.kind = EngravingType::Diamond;
        assert_eq!(anchor(&cfg, 54.0, 1.8).unwrap().color, "#ffffff");
    }

    #[test]
    fn test_transform_faces_inward() {
        let a = anchor(&engraving("x"), 54.0, 1.8).unwrap();
        let iso = a.transform();
        let facing = iso.rotation * nalgebra::Vector3::z();
        assert_relative_eq!(facing.z, -1.0, epsilon = 1e-12);
    }
}
