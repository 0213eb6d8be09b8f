//! Regular icosahedron construction.
//!
//! The icosahedron is the seed solid for geodesic sphere generation: its
//! 20 equilateral faces subdivide evenly, and projecting the result onto
//! a sphere gives near-uniform triangle sizes.

use crate::types::{Mesh, Vertex};

/// Index pairs into three orthogonal golden-ratio rectangles.
///
/// With `p = golden_ratio / 2`, the 12 vertices are the corners of
/// rectangles in the xz, xy and yz planes. Edge length is exactly 1 and
/// the circumradius is `sqrt(golden_ratio^2 + 1) / 2 ~= 0.9510565`.
/// All faces wind counter-clockwise viewed from outside.
const FACES: [[u32; 3]; 20] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 4, 1],
    [0, 3, 5],
    [0, 5, 4],
    [2, 1, 6],
    [2, 7, 3],
    [2, 6, 7],
    [1, 4, 8],
    [1, 8, 6],
    [3, 9, 5],
    [3, 7, 9],
    [4, 5, 10],
    [4, 10, 8],
    [6, 11, 7],
    [6, 8, 11],
    [5, 9, 10],
    [7, 11, 9],
    [8, 10, 11],
    [9, 11, 10],
];

/// Construct a regular icosahedron with edge length 1, centered at the
/// origin.
///
/// Returns a mesh with 12 vertices and 20 faces wound counter-clockwise
/// when viewed from outside (positive signed volume). Pure function, no
/// failure modes.
pub fn icosahedron() -> Mesh {
    let p = (1.0 + 5.0_f64.sqrt()) / 4.0; // golden_ratio / 2
    let h = 0.5;

    let vertices = vec![
        Vertex::from_coords(-p, 0.0, -h),
        Vertex::from_coords(-h, -p, 0.0),
        Vertex::from_coords(-p, 0.0, h),
        Vertex::from_coords(-h, p, 0.0),
        Vertex::from_coords(0.0, -h, -p),
        Vertex::from_coords(0.0, h, -p),
        Vertex::from_coords(0.0, -h, p),
        Vertex::from_coords(0.0, h, p),
        Vertex::from_coords(h, -p, 0.0),
        Vertex::from_coords(h, p, 0.0),
        Vertex::from_coords(p, 0.0, -h),
        Vertex::from_coords(p, 0.0, h),
    ];

    Mesh {
        vertices,
        faces: FACES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_counts() {
        let mesh = icosahedron();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.face_count(), 20);
    }

    #[test]
    fn test_every_edge_has_unit_length() {
        let mesh = icosahedron();
        for &[a, b, c] in &mesh.faces {
            for (i, j) in [(a, b), (b, c), (c, a)] {
                let pi = mesh.vertices[i as usize].position;
                let pj = mesh.vertices[j as usize].position;
                assert!(approx_eq((pi - pj).norm(), 1.0));
            }
        }
    }

    #[test]
    fn test_edge_count_is_thirty() {
        let mesh = icosahedron();
        let mut edges: HashSet<(u32, u32)> = HashSet::new();
        for &[a, b, c] in &mesh.faces {
            for (i, j) in [(a, b), (b, c), (c, a)] {
                edges.insert(if i < j { (i, j) } else { (j, i) });
            }
        }
        assert_eq!(edges.len(), 30);
    }

    #[test]
    fn test_vertices_share_circumradius() {
        let mesh = icosahedron();
        let expected = ((1.0 + 5.0_f64.sqrt()) / 2.0).hypot(1.0) / 2.0;
        for vertex in &mesh.vertices {
            assert!(approx_eq(vertex.position.coords.norm(), expected));
        }
    }

    #[test]
    fn test_winding_is_outward() {
        let mesh = icosahedron();
        // Centered at the origin, so every face normal must point away
        // from the origin through its centroid.
        for tri in mesh.triangles() {
            let normal = tri.normal().expect("icosahedron faces are non-degenerate");
            let centroid = tri.centroid();
            assert!(normal.dot(&centroid.coords) > 0.0);
        }
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_every_vertex_has_valence_five() {
        let mesh = icosahedron();
        let mut valence = [0usize; 12];
        for &[a, b, c] in &mesh.faces {
            valence[a as usize] += 1;
            valence[b as usize] += 1;
            valence[c as usize] += 1;
        }
        assert!(valence.iter().all(|&v| v == 5));
    }
}
