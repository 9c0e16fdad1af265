//! Wavefront OBJ export.

use std::fmt::Write;

use crate::RingMesh;

/// Serialize the mesh as OBJ text with positions, normals and UVs.
///
/// Each material group starts a `usemtl material_<index>` block so the
/// partition survives the round trip through DCC tools.
pub fn mesh_to_obj(mesh: &RingMesh) -> String {
    let mut out = String::with_capacity(mesh.vertex_count() * 96 + mesh.indices.len() * 12);
    let _ = writeln!(out, "# ring band");
    let _ = writeln!(out, "# Vertices: {}", mesh.vertex_count());
    let _ = writeln!(out, "# Faces: {}", mesh.triangle_count());

    for p in mesh.positions.chunks_exact(3) {
        let _ = writeln!(out, "v {:.6} {:.6} {:.6}", p[0], p[1], p[2]);
    }
    for n in mesh.normals.chunks_exact(3) {
        let _ = writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[1], n[2]);
    }
    for uv in mesh.uvs.chunks_exact(2) {
        let _ = writeln!(out, "vt {:.6} {:.6}", uv[0], uv[1]);
    }

    for group in &mesh.groups {
        let _ = writeln!(out, "usemtl material_{}", group.material_index);
        let end = (group.start + group.count).min(mesh.indices.len());
        for tri in mesh.indices[group.start..end].chunks_exact(3) {
            let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
            let _ = writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revolve::{build_mesh, MeshRequest, MeshSettings};
    use ring_kernel::geometry::{Point3d, Vec3};
    use ring_types::{EdgeStyle, PartitionConfig, PartitionShape, ProfileType};

    #[test]
    fn test_obj_line_counts() {
        let partition = PartitionConfig {
            count: 2,
            ratio: "1:1".to_string(),
            shape: PartitionShape::Diagonal,
        };
        let request = MeshRequest {
            profile: ProfileType::P4,
            size: 50.0,
            width: 3.0,
            height: 1.5,
            edge_style: EdgeStyle::Comfort,
            groove: None,
            partition: Some(&partition),
        };
        let settings = MeshSettings {
            angular_steps: 8,
            smooth_normals: false,
        };
        let mesh = build_mesh(&request, &settings);
        let obj = mesh_to_obj(&mesh);

        let count = |prefix: &str| obj.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), mesh.vertex_count());
        assert_eq!(count("vn "), mesh.vertex_count());
        assert_eq!(count("vt "), mesh.vertex_count());
        assert_eq!(count("f "), mesh.triangle_count());
        assert_eq!(count("usemtl "), mesh.groups.len());
    }

    #[test]
    fn test_obj_indices_are_one_based() {
        let mut mesh = RingMesh::new();
        for _ in 0..3 {
            mesh.add_vertex(Point3d::ORIGIN, Vec3::Y, [0.0, 0.0]);
        }
        mesh.push_group(0, &[[0, 1, 2]]);
        let obj = mesh_to_obj(&mesh);
        assert!(obj.contains("usemtl material_0\nf 1/1/1 2/2/2 3/3/3\n"));
    }
}
