//! Vertex normal estimation for the revolved band.

use ring_kernel::geometry::{Point3d, Vec3};

/// Guards the radial-sign heuristic against division by zero.
const SIGN_EPSILON: f64 = 0.001;

/// Quick normal for a profile point with radial offset `y` at angle `theta`.
///
/// The sign of `y` decides whether the normal points away from or toward the
/// axis. A zero offset yields the plain radial direction.
pub fn heuristic_normal(theta: f64, y: f64) -> Vec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let w = y / (y.abs() + SIGN_EPSILON);
    let n = Vec3::new(cos_t * w, 0.0, sin_t * w);
    n.normalized().unwrap_or(Vec3::new(cos_t, 0.0, sin_t))
}

/// Area-weighted smooth normals.
///
/// Triangles wind clockwise seen from outside the band, so each face normal is
/// taken as `(c - a) x (b - a)`. Vertices listed in `seams` are welded: each
/// pair shares the summed normal of both copies. A vertex whose sum vanishes
/// keeps its entry from `fallback`.
pub fn smooth_normals(
    points: &[Point3d],
    triangles: impl IntoIterator<Item = [u32; 3]>,
    seams: &[(usize, usize)],
    fallback: &[Vec3],
) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; points.len()];

    for [a, b, c] in triangles {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let face = (points[c] - points[a]).cross(&(points[b] - points[a]));
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }

    for &(first, second) in seams {
        let sum = acc[first] + acc[second];
        acc[first] = sum;
        acc[second] = sum;
    }

    acc.iter()
        .zip(fallback)
        .map(|(n, fb)| n.normalized().unwrap_or(*fb))
        .collect()
}
