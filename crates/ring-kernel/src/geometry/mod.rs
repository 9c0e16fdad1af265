pub mod point;
pub mod vector;

pub use point::Point3d;
pub use vector::Vec3;
