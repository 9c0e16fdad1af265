//! Revolution of the profile curve into the band mesh.
//!
//! The grid has `angular_steps + 1` slices of [`PROFILE_LEN`] vertices. The
//! first and last slice coincide in space but are separate vertices so the
//! UV seam stays clean. Each grid quad `(i, j)` becomes two triangles and is
//! assigned to a partition region by its center.

use std::borrow::Cow;
use std::f64::consts::TAU;

use ring_kernel::geometry::{Point3d, Vec3};
use ring_kernel::groove::wave_lateral_offset;
use ring_kernel::partition::PartitionLayout;
use ring_kernel::profile::{generate, ProfilePoint, PROFILE_LEN};
use ring_kernel::BandGeometry;
use ring_types::{EdgeStyle, Groove, PartitionConfig, ProfileType, RingConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::normals::{heuristic_normal, smooth_normals};
use crate::RingMesh;

/// Tessellation resolution and shading options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshSettings {
    /// Number of slices around the ring.
    pub angular_steps: usize,
    /// Replace the heuristic normals with area-weighted face normals.
    pub smooth_normals: bool,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self::preview()
    }
}

impl MeshSettings {
    /// Interactive preview resolution.
    pub fn preview() -> Self {
        Self {
            angular_steps: 120,
            smooth_normals: true,
        }
    }

    /// Coarse mesh for thumbnails and quick checks.
    pub fn draft() -> Self {
        Self {
            angular_steps: 48,
            smooth_normals: true,
        }
    }

    pub fn vertex_count(&self) -> usize {
        (self.angular_steps + 1) * PROFILE_LEN
    }

    pub fn triangle_count(&self) -> usize {
        self.angular_steps * (PROFILE_LEN - 1) * 2
    }
}

/// Band parameters for one mesh build. Dimensions are in millimeters.
#[derive(Debug, Clone, Copy)]
pub struct MeshRequest<'a> {
    pub profile: ProfileType,
    /// Inner circumference.
    pub size: f64,
    pub width: f64,
    pub height: f64,
    pub edge_style: EdgeStyle,
    pub groove: Option<&'a Groove>,
    pub partition: Option<&'a PartitionConfig>,
}

impl<'a> MeshRequest<'a> {
    pub fn from_config(config: &'a RingConfig) -> Self {
        Self {
            profile: config.profile,
            size: config.size,
            width: config.width,
            height: config.height,
            edge_style: config.edge_style,
            groove: Some(&config.groove),
            partition: Some(&config.partition),
        }
    }
}

/// Build the band mesh at preview resolution.
pub fn build(
    profile: ProfileType,
    size: f64,
    width: f64,
    height: f64,
    edge_style: EdgeStyle,
    groove: Option<&Groove>,
    partition: Option<&PartitionConfig>,
) -> RingMesh {
    let request = MeshRequest {
        profile,
        size,
        width,
        height,
        edge_style,
        groove,
        partition,
    };
    build_mesh(&request, &MeshSettings::preview())
}

/// Build the band mesh for a full ring configuration.
pub fn build_for_config(config: &RingConfig, settings: &MeshSettings) -> RingMesh {
    build_mesh(&MeshRequest::from_config(config), settings)
}

#[instrument(skip_all, fields(profile = ?request.profile, size = request.size, steps = settings.angular_steps))]
pub fn build_mesh(request: &MeshRequest<'_>, settings: &MeshSettings) -> RingMesh {
    let steps = settings.angular_steps.max(1);
    let BandGeometry { radius, width, height } =
        BandGeometry::from_mm(request.size, request.width, request.height);

    let none = Groove::none();
    let groove = request.groove.unwrap_or(&none);
    let layout = request
        .partition
        .map(PartitionLayout::from_config)
        .unwrap_or_else(PartitionLayout::single);

    let fixed = (!groove.is_wave())
        .then(|| generate(request.profile, width, height, request.edge_style, groove, 0.0));

    let len = PROFILE_LEN;
    let vertex_count = (steps + 1) * len;
    let mut points: Vec<Point3d> = Vec::with_capacity(vertex_count);
    let mut heuristic: Vec<Vec3> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f64; 2]> = Vec::with_capacity(vertex_count);

    for i in 0..=steps {
        let theta = i as f64 / steps as f64 * TAU;
        let slice: Cow<'_, [ProfilePoint]> = match &fixed {
            Some(profile) => Cow::Borrowed(profile.as_slice()),
            None => Cow::Owned(generate(
                request.profile,
                width,
                height,
                request.edge_style,
                groove,
                wave_lateral_offset(theta, width),
            )),
        };
        debug_assert_eq!(slice.len(), len);

        for (j, p) in slice.iter().enumerate() {
            points.push(Point3d::on_ring(radius + p.y, theta, p.x));
            heuristic.push(heuristic_normal(theta, p.y));
            uvs.push([i as f64 / steps as f64, j as f64 / (len - 1) as f64]);
        }
    }

    let mut buckets: Vec<Vec<[u32; 3]>> = vec![Vec::new(); layout.region_count()];
    for i in 0..steps {
        let u = (i as f64 + 0.5) / steps as f64;
        for j in 0..len - 1 {
            let v = (j as f64 + 0.5) / (len - 1) as f64;
            let a = (i * len + j) as u32;
            let b = ((i + 1) * len + j) as u32;
            let c = a + 1;
            let d = b + 1;
            let bucket = &mut buckets[layout.classify(u, v)];
            bucket.push([a, b, c]);
            bucket.push([c, b, d]);
        }
    }

    let normals = if settings.smooth_normals {
        let seams: Vec<(usize, usize)> = (0..len).map(|j| (j, steps * len + j)).collect();
        smooth_normals(
            &points,
            buckets.iter().flatten().copied(),
            &seams,
            &heuristic,
        )
    } else {
        heuristic
    };

    let mut mesh = RingMesh::with_capacity(vertex_count, steps * (len - 1) * 2);
    for ((p, n), uv) in points.iter().zip(&normals).zip(&uvs) {
        mesh.add_vertex(*p, *n, *uv);
    }
    for (material, triangles) in buckets.iter().enumerate() {
        debug!(material, triangles = triangles.len(), "partition bucket");
        mesh.push_group(material, triangles);
    }

    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        groups = mesh.groups.len(),
        "band mesh built"
    );
    mesh
}
