pub mod normals;
pub mod obj;
pub mod revolve;
pub mod validate;

pub use obj::mesh_to_obj;
pub use revolve::{build, build_for_config, build_mesh, MeshRequest, MeshSettings};
pub use validate::{validate_mesh, MeshValidation};

use ring_kernel::geometry::{Point3d, Vec3};
use serde::{Deserialize, Serialize};

/// A contiguous range of the index buffer drawn with one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshGroup {
    /// Offset into `indices`.
    pub start: usize,
    /// Number of indices (three per triangle).
    pub count: usize,
    pub material_index: usize,
}

/// Render-ready band mesh.
///
/// Positions, normals and UVs are parallel flat buffers, one entry per
/// vertex. Groups partition the index buffer by material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RingMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Texture coordinates [u, v, ...]
    pub uvs: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
    pub groups: Vec<MeshGroup>,
}

impl RingMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            uvs: Vec::with_capacity(vertices * 2),
            indices: Vec::with_capacity(triangles * 3),
            groups: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: Point3d, normal: Vec3, uv: [f64; 2]) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend_from_slice(&pos.to_f32());
        self.normals.extend_from_slice(&normal.to_f32());
        self.uvs.push(uv[0] as f32);
        self.uvs.push(uv[1] as f32);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Append `triangles` as one group, skipping empty buckets.
    pub fn push_group(&mut self, material_index: usize, triangles: &[[u32; 3]]) {
        if triangles.is_empty() {
            return;
        }
        let start = self.indices.len();
        for &[a, b, c] in triangles {
            self.add_triangle(a, b, c);
        }
        self.groups.push(MeshGroup {
            start,
            count: self.indices.len() - start,
            material_index,
        });
    }

    pub fn position(&self, vertex: usize) -> [f32; 3] {
        let i = vertex * 3;
        [self.positions[i], self.positions[i + 1], self.positions[i + 2]]
    }

    pub fn normal(&self, vertex: usize) -> [f32; 3] {
        let i = vertex * 3;
        [self.normals[i], self.normals[i + 1], self.normals[i + 2]]
    }

    /// Material of triangle `tri`, looked up through the groups.
    pub fn material_of_triangle(&self, tri: usize) -> Option<usize> {
        let index = tri * 3;
        self.groups
            .iter()
            .find(|g| index >= g.start && index < g.start + g.count)
            .map(|g| g.material_index)
    }
}
