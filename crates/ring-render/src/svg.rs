//! Shaded isometric SVG of a preview frame.

use std::fmt::Write;

use preview_engine::PreviewFrame;

/// Fill used when a material color cannot be parsed.
const FALLBACK_RGB: (u8, u8, u8) = (160, 160, 170);

/// Isometric projection with the ring axis (Y) tilted toward the viewer.
/// Returns screen x, screen y and view depth (larger is farther).
fn project(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let angle_x: f64 = 0.6;
    let angle_z: f64 = 0.8;
    // The band lies in the XZ plane; treat the ring axis as "up".
    let (x, y, z) = (x, z, y);
    let rx = x * angle_z.cos() - y * angle_z.sin();
    let ry = x * angle_z.sin() + y * angle_z.cos();
    let depth = ry * angle_x.cos() - z * angle_x.sin();
    let pz = ry * angle_x.sin() + z * angle_x.cos();
    (rx, -pz, depth)
}

/// Parse `#rrggbb`.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

enum Shape {
    Triangle {
        corners: [usize; 3],
        rgb: (u8, u8, u8),
    },
    Stone {
        center: (f64, f64),
        radius: f64,
    },
}

struct Drawable {
    depth: f64,
    shape: Shape,
}

pub fn frame_to_svg(frame: &PreviewFrame, stone_size: f64, width: f64, height: f64, title: &str) -> String {
    let mesh = &frame.mesh;
    let title = escape(title);
    if mesh.indices.is_empty() {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
             <text x=\"10\" y=\"20\" font-family=\"monospace\" font-size=\"14\" fill=\"#ccc\">{title}</text>\
             </svg>"
        );
    }

    let num_verts = mesh.vertex_count();
    let mut projected: Vec<(f64, f64)> = Vec::with_capacity(num_verts);
    let mut depths: Vec<f64> = Vec::with_capacity(num_verts);
    let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
    let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);

    for p in mesh.positions.chunks_exact(3) {
        let (px, py, depth) = project(p[0] as f64, p[1] as f64, p[2] as f64);
        projected.push((px, py));
        depths.push(depth);
        min_x = min_x.min(px);
        max_x = max_x.max(px);
        min_y = min_y.min(py);
        max_y = max_y.max(py);
    }

    let padding = 40.0;
    let avail_w = width - 2.0 * padding;
    let avail_h = height - 2.0 * padding - 25.0;
    let data_w = (max_x - min_x).max(0.001);
    let data_h = (max_y - min_y).max(0.001);
    let scale = (avail_w / data_w).min(avail_h / data_h);
    let offset_x = padding + (avail_w - data_w * scale) / 2.0;
    let offset_y = padding + 25.0 + (avail_h - data_h * scale) / 2.0;

    let tx = |px: f64| -> f64 { (px - min_x) * scale + offset_x };
    let ty = |py: f64| -> f64 { (py - min_y) * scale + offset_y };

    let light_dir = (0.3_f64, -0.5_f64, 0.8_f64);
    let light_len =
        (light_dir.0 * light_dir.0 + light_dir.1 * light_dir.1 + light_dir.2 * light_dir.2).sqrt();

    let mut drawables: Vec<Drawable> = Vec::with_capacity(mesh.triangle_count() + frame.placements.len());

    for group in &mesh.groups {
        let base = frame
            .materials
            .get(group.material_index)
            .and_then(|m| parse_hex(&m.color))
            .unwrap_or(FALLBACK_RGB);
        let end = (group.start + group.count).min(mesh.indices.len());

        for tri in mesh.indices[group.start..end].chunks_exact(3) {
            let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let depth = corners.iter().map(|&i| depths[i]).sum::<f64>() / 3.0;

            let normal = corners.iter().fold([0.0f64; 3], |mut acc, &i| {
                let n = mesh.normal(i);
                for k in 0..3 {
                    acc[k] += n[k] as f64;
                }
                acc
            });
            let nlen = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2])
                .sqrt()
                .max(1e-12);
            let dot = (normal[0] * light_dir.0 + normal[1] * light_dir.1 + normal[2] * light_dir.2)
                / (nlen * light_len);
            let mut brightness = 0.3 + 0.7 * dot.abs().min(1.0);

            // Faces seen from behind are the inside of the far half of the band.
            let (px0, py0) = projected[corners[0]];
            let (px1, py1) = projected[corners[1]];
            let (px2, py2) = projected[corners[2]];
            let signed_area = (px1 - px0) * (py2 - py0) - (px2 - px0) * (py1 - py0);
            if signed_area > 0.0 {
                brightness *= 0.55;
            }

            let shade = |c: u8| (c as f64 * brightness).clamp(0.0, 255.0) as u8;
            drawables.push(Drawable {
                depth,
                shape: Shape::Triangle {
                    corners,
                    rgb: (shade(base.0), shade(base.1), shade(base.2)),
                },
            });
        }
    }

    for entry in frame.placements.iter() {
        let p = entry.position;
        let (px, py, depth) = project(p.x, p.y, p.z);
        drawables.push(Drawable {
            // Stones sit on the surface; nudge them in front of it.
            depth: depth - 1e-3,
            shape: Shape::Stone {
                center: (tx(px), ty(py)),
                radius: (entry.render_scale(stone_size) * scale).max(1.5),
            },
        });
    }

    drawables.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let num_tris = mesh.triangle_count();
    let stroke_width = if num_tris > 200 { 0.2 } else { 0.5 };
    let gem = &frame.gem.color;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#1a1a2e\">\n\
         <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"13\" fill=\"#8892b0\" text-anchor=\"middle\">{title}</text>\n",
        width / 2.0
    );

    for item in &drawables {
        match &item.shape {
            Shape::Triangle { corners, rgb } => {
                let (x0, y0) = (tx(projected[corners[0]].0), ty(projected[corners[0]].1));
                let (x1, y1) = (tx(projected[corners[1]].0), ty(projected[corners[1]].1));
                let (x2, y2) = (tx(projected[corners[2]].0), ty(projected[corners[2]].1));
                let (r, g, b) = rgb;
                let _ = writeln!(
                    svg,
                    "  <polygon points=\"{x0:.1},{y0:.1} {x1:.1},{y1:.1} {x2:.1},{y2:.1}\" \
                     fill=\"rgb({r},{g},{b})\" stroke=\"rgb({r},{g},{b})\" stroke-width=\"{stroke_width}\"/>"
                );
            }
            Shape::Stone { center, radius } => {
                let _ = writeln!(
                    svg,
                    "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{radius:.1}\" fill=\"{gem}\" \
                     fill-opacity=\"0.85\" stroke=\"#ffffff\" stroke-width=\"0.4\"/>",
                    center.0, center.1
                );
            }
        }
    }

    let mut caption = format!("{num_tris} triangles, {num_verts} vertices");
    if !frame.placements.is_empty() {
        let _ = write!(caption, ", {} stones", frame.placements.len());
    }
    if let Some(anchor) = &frame.engraving {
        let _ = write!(caption, ", engraved \"{}\"", escape(&anchor.text));
    }
    let _ = writeln!(
        svg,
        "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"10\" fill=\"#5a6080\" \
         text-anchor=\"middle\">{caption}</text>",
        width / 2.0,
        height - 8.0
    );

    svg.push_str("</svg>\n");
    svg
}
