use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::vector::Vec3;

/// A point in 3D model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point at `angle` radians around the ring axis (Y), `radius` from it,
    /// lifted `axial` along the axis.
    pub fn on_ring(radius: f64, angle: f64, axial: f64) -> Self {
        Self::new(radius * angle.cos(), axial, radius * angle.sin())
    }

    /// Distance from the ring axis.
    pub fn radial_distance(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn to_f32(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    pub fn to_na(&self) -> nalgebra::Point3<f64> {
        nalgebra::Point3::new(self.x, self.y, self.z)
    }
}

impl Add<Vec3> for Point3d {
    type Output = Point3d;
    fn add(self, rhs: Vec3) -> Self::Output {
        Point3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3d {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_on_ring_quarter_turn() {
        let p = Point3d::on_ring(2.0, FRAC_PI_2, 0.5);
        assert!(p.x.abs() < 1e-12);
        assert_eq!(p.y, 0.5);
        assert!((p.z - 2.0).abs() < 1e-12);
        assert!((p.radial_distance() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_sub_gives_vector() {
        let a = Point3d::new(3.0, 4.0, 5.0);
        let b = Point3d::new(1.0, 1.0, 1.0);
        assert_eq!(a - b, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(b + (a - b), a);
    }
}
