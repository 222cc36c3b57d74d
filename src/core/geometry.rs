use glam::Vec3;

/// Line-list mesh: positions plus pairs of indices, one pair per edge.
#[derive(Clone, Debug, Default)]
pub struct WireMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Number of edge segments along each icosahedron edge for a detail level.
#[inline]
pub fn segments_for_detail(detail: u32) -> u32 {
    detail + 1
}

/// Build a unit-radius icosphere as a wireframe.
///
/// Each of the 20 faces is split into `segments²` triangles on a barycentric
/// grid and projected onto the sphere. Faces do not share vertices, and every
/// grid edge is emitted once per face.
pub fn icosphere_wireframe(detail: u32) -> WireMesh {
    let n = segments_for_detail(detail) as usize;
    let corners = icosahedron_vertices();
    let per_face_vertices = (n + 1) * (n + 2) / 2;
    let per_face_edges = 3 * n * (n + 1) / 2;

    let mut mesh = WireMesh {
        positions: Vec::with_capacity(20 * per_face_vertices),
        indices: Vec::with_capacity(20 * per_face_edges * 2),
    };

    // Row `i` of a face holds `n - i + 1` vertices.
    let row_offset = |i: usize| i * (n + 1) - i * (i.saturating_sub(1)) / 2;

    for [a, b, c] in ICOSAHEDRON_FACES {
        let (a, b, c) = (corners[a], corners[b], corners[c]);
        let base = mesh.positions.len() as u32;
        for i in 0..=n {
            for j in 0..=(n - i) {
                let p = a + (b - a) * (i as f32 / n as f32) + (c - a) * (j as f32 / n as f32);
                mesh.positions.push(p.normalize().to_array());
            }
        }
        let at = |i: usize, j: usize| base + (row_offset(i) + j) as u32;
        for i in 0..=n {
            for j in 0..=(n - i) {
                if i + j < n {
                    mesh.indices.extend_from_slice(&[at(i, j), at(i, j + 1)]);
                    mesh.indices.extend_from_slice(&[at(i, j), at(i + 1, j)]);
                    mesh.indices.extend_from_slice(&[at(i + 1, j), at(i, j + 1)]);
                }
            }
        }
    }
    mesh
}
