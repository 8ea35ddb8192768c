//! Static vertex data for the wireframe solids and billboard quads.

use glam::Vec3;

pub(crate) const BOX_HALF_EXTENT: f32 = 0.05;
pub(crate) const ICOSAHEDRON_RADIUS: f32 = 0.07;

/// 12 box edges as a line list (24 vertices).
pub(crate) fn box_edge_vertices(half: f32) -> Vec<Vec3> {
    let corner = |mask: u8| {
        Vec3::new(
            if mask & 1 != 0 { half } else { -half },
            if mask & 2 != 0 { half } else { -half },
            if mask & 4 != 0 { half } else { -half },
        )
    };
    let mut lines = Vec::with_capacity(24);
    for a in 0u8..8 {
        for bit in [1u8, 2, 4] {
            let b = a | bit;
            if b != a {
                lines.push(corner(a));
                lines.push(corner(b));
            }
        }
    }
    // each edge was pushed once (only from the lower corner), 12 total
    lines
}

/// 30 icosahedron edges as a line list (60 vertices). Vertices come from the
/// three golden-ratio rectangles; edges are the vertex pairs at the minimal
/// pairwise distance.
pub(crate) fn icosahedron_edge_vertices(radius: f32) -> Vec<Vec3> {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut verts = Vec::with_capacity(12);
    for &(a, b) in &[(1.0, phi), (1.0, -phi), (-1.0, phi), (-1.0, -phi)] {
        verts.push(Vec3::new(0.0, a, b));
        verts.push(Vec3::new(a, b, 0.0));
        verts.push(Vec3::new(b, 0.0, a));
    }
    let scale = radius / verts[0].length();
    for v in &mut verts {
        *v *= scale;
    }

    // edge length for this construction is 2 * scale
    let edge_len = 2.0 * scale;
    let mut lines = Vec::with_capacity(60);
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            if (verts[i].distance(verts[j]) - edge_len).abs() < edge_len * 0.01 {
                lines.push(verts[i]);
                lines.push(verts[j]);
            }
        }
    }
    lines
}

/// Two triangles covering [-0.5, 0.5]^2, used by planes and particles.
pub(crate) fn quad_corners() -> [[f32; 2]; 6] {
    [
        [-0.5, -0.5],
        [0.5, -0.5],
        [0.5, 0.5],
        [-0.5, -0.5],
        [0.5, 0.5],
        [-0.5, 0.5],
    ]
}
