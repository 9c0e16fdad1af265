//! Structural checks on a built band mesh.

use std::collections::HashMap;
use std::fmt;

use tracing::{info, warn};

use crate::RingMesh;

/// Triangles with a doubled area below this are counted as degenerate.
const DEGENERATE_AREA: f32 = 1e-12;

/// Validation report for a band mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshValidation {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Edges with exactly one adjacent triangle.
    pub boundary_edges: usize,
    /// Edges with more than two adjacent triangles.
    pub non_manifold_edges: usize,
    pub degenerate_triangles: usize,
    /// Indices that do not name a vertex.
    pub invalid_indices: usize,
    /// Groups are contiguous, in order, and cover every index exactly once.
    pub groups_cover_indices: bool,
    /// Axis-aligned bounds as (min, max).
    pub bounds: Option<([f32; 3], [f32; 3])>,
}

impl MeshValidation {
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0
    }

    pub fn is_manifold(&self) -> bool {
        self.non_manifold_edges == 0
    }

    /// Buffers are consistent enough to hand to a renderer.
    pub fn is_renderable(&self) -> bool {
        self.triangle_count > 0 && self.invalid_indices == 0 && self.groups_cover_indices
    }
}

impl fmt::Display for MeshValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh Validation:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        if let Some((min, max)) = &self.bounds {
            writeln!(
                f,
                "  Bounds: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
                min[0], min[1], min[2], max[0], max[1], max[2]
            )?;
        }
        writeln!(f, "  Boundary edges: {}", self.boundary_edges)?;
        writeln!(f, "  Non-manifold edges: {}", self.non_manifold_edges)?;
        writeln!(f, "  Degenerate triangles: {}", self.degenerate_triangles)?;
        writeln!(
            f,
            "  Groups: {}",
            if self.groups_cover_indices { "ok" } else { "GAPS OR OVERLAPS" }
        )
    }
}

/// Validate a mesh and return a report.
pub fn validate_mesh(mesh: &RingMesh) -> MeshValidation {
    let vertex_count = mesh.vertex_count();
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    let mut degenerate_triangles = 0;
    let mut invalid_indices = 0;

    for tri in mesh.indices.chunks_exact(3) {
        let bad = tri.iter().filter(|&&i| i as usize >= vertex_count).count();
        if bad > 0 {
            invalid_indices += bad;
            continue;
        }
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
        if doubled_area(mesh, tri) < DEGENERATE_AREA {
            degenerate_triangles += 1;
        }
    }

    let boundary_edges = edges.values().filter(|&&n| n == 1).count();
    let non_manifold_edges = edges.values().filter(|&&n| n > 2).count();

    let report = MeshValidation {
        vertex_count,
        triangle_count: mesh.triangle_count(),
        boundary_edges,
        non_manifold_edges,
        degenerate_triangles,
        invalid_indices,
        groups_cover_indices: groups_cover(mesh),
        bounds: bounds(mesh),
    };

    if report.is_renderable() {
        info!(
            vertices = report.vertex_count,
            triangles = report.triangle_count,
            boundary = report.boundary_edges,
            "mesh validated"
        );
    } else {
        warn!(
            invalid = report.invalid_indices,
            groups_ok = report.groups_cover_indices,
            "mesh failed validation"
        );
    }
    report
}

fn groups_cover(mesh: &RingMesh) -> bool {
    let mut cursor = 0;
    for group in &mesh.groups {
        if group.start != cursor || group.count == 0 || group.count % 3 != 0 {
            return false;
        }
        cursor += group.count;
    }
    cursor == mesh.indices.len()
}

fn doubled_area(mesh: &RingMesh, tri: &[u32]) -> f32 {
    let a = mesh.position(tri[0] as usize);
    let b = mesh.position(tri[1] as usize);
    let c = mesh.position(tri[2] as usize);
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt()
}

fn bounds(mesh: &RingMesh) -> Option<([f32; 3], [f32; 3])> {
    let mut chunks = mesh.positions.chunks_exact(3);
    let first = chunks.next()?;
    let mut min = [first[0], first[1], first[2]];
    let mut max = min;
    for p in chunks {
        for k in 0..3 {
            min[k] = min[k].min(p[k]);
            max[k] = max[k].max(p[k]);
        }
    }
    Some((min, max))
}
