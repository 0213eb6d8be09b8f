//! Frequency-controlled midpoint subdivision.
//!
//! Each round splits every triangle into four by inserting a vertex at
//! the midpoint of each edge. Midpoints are shared between the two faces
//! that meet at an edge through a canonicalized edge-index cache, so the
//! output mesh is crack-free by construction.

use hashbrown::HashMap;
use nalgebra::Point3;
use tracing::debug;

use crate::error::{GeodesicError, GeodesicResult};
use crate::types::{Mesh, Vertex};

/// Maximum accepted subdivision frequency.
///
/// Face count grows as `20 * 4^frequency`; frequency 10 already produces
/// ~21 million faces. Higher requests are rejected as configuration
/// errors rather than exhausting memory.
pub const MAX_FREQUENCY: u32 = 10;

/// Subdivide each face of the mesh into four, `frequency` times.
///
/// Frequency 0 returns a copy of the input unchanged. Every existing
/// vertex keeps its index; midpoint vertices are appended, one per
/// distinct edge per round. For a closed triangle mesh with F faces and
/// V vertices, one round yields 4F faces and V + 3F/2 vertices.
///
/// # Errors
///
/// Returns [`GeodesicError::InvalidFrequency`] when `frequency` exceeds
/// [`MAX_FREQUENCY`].
pub fn tessellate(mesh: &Mesh, frequency: u32) -> GeodesicResult<Mesh> {
    if frequency > MAX_FREQUENCY {
        return Err(GeodesicError::invalid_frequency(frequency, MAX_FREQUENCY));
    }

    let mut current = mesh.clone();
    for round in 0..frequency {
        current = subdivide_once(&current);
        debug!(
            round = round + 1,
            faces = current.face_count(),
            vertices = current.vertex_count(),
            "subdivision round complete"
        );
    }

    Ok(current)
}

/// Perform one round of midpoint subdivision.
fn subdivide_once(mesh: &Mesh) -> Mesh {
    // Map from canonicalized edge (lo, hi) to its midpoint vertex index.
    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(mesh.faces.len() * 2);
    let mut vertices: Vec<Vertex> = mesh.vertices.clone();
    let mut faces: Vec<[u32; 3]> = Vec::with_capacity(mesh.faces.len() * 4);

    for &[v1, v2, v3] in &mesh.faces {
        let m12 = midpoint_vertex(mesh, &mut vertices, &mut edge_midpoints, v1, v2);
        let m23 = midpoint_vertex(mesh, &mut vertices, &mut edge_midpoints, v2, v3);
        let m31 = midpoint_vertex(mesh, &mut vertices, &mut edge_midpoints, v3, v1);

        // One corner triangle per original vertex, plus the center.
        //       v1
        //      /  \
        //    m31--m12
        //    / \  / \
        //  v3--m23--v2
        faces.push([v1, m12, m31]);
        faces.push([m12, v2, m23]);
        faces.push([m23, v3, m31]);
        faces.push([m12, m23, m31]);
    }

    Mesh { vertices, faces }
}

/// Get or create the midpoint vertex of edge (a, b).
fn midpoint_vertex(
    mesh: &Mesh,
    vertices: &mut Vec<Vertex>,
    edge_midpoints: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&idx) = edge_midpoints.get(&key) {
        return idx;
    }

    let pa = &mesh.vertices[a as usize].position;
    let pb = &mesh.vertices[b as usize].position;
    let mid = Point3::new(
        (pa.x + pb.x) / 2.0,
        (pa.y + pb.y) / 2.0,
        (pa.z + pb.z) / 2.0,
    );

    let idx = vertices.len() as u32;
    vertices.push(Vertex::new(mid));
    edge_midpoints.insert(key, idx);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosahedron::icosahedron;

    #[test]
    fn test_frequency_zero_is_identity() {
        let mesh = icosahedron();
        let result = tessellate(&mesh, 0).unwrap();
        assert_eq!(result.face_count(), 20);
        assert_eq!(result.vertex_count(), 12);
        assert_eq!(result.faces, mesh.faces);
    }

    #[test]
    fn test_face_and_vertex_counts() {
        let mesh = icosahedron();
        for frequency in 0..4u32 {
            let result = tessellate(&mesh, frequency).unwrap();
            let scale = 4usize.pow(frequency);
            assert_eq!(result.face_count(), 20 * scale);
            assert_eq!(result.vertex_count(), 10 * scale + 2);
        }
    }

    #[test]
    fn test_rejects_excessive_frequency() {
        let mesh = icosahedron();
        let err = tessellate(&mesh, MAX_FREQUENCY + 1).unwrap_err();
        assert!(matches!(
            err,
            GeodesicError::InvalidFrequency { frequency, max }
                if frequency == MAX_FREQUENCY + 1 && max == MAX_FREQUENCY
        ));
    }

    #[test]
    fn test_midpoints_are_shared() {
        // Vertex count matching 10 * 4^w + 2 already implies sharing;
        // also check no face references an out-of-range vertex.
        let result = tessellate(&icosahedron(), 2).unwrap();
        for face in &result.faces {
            for &vi in face {
                assert!((vi as usize) < result.vertex_count());
            }
        }
    }

    #[test]
    fn test_every_vertex_stays_referenced() {
        let result = tessellate(&icosahedron(), 2).unwrap();
        let mut referenced = vec![false; result.vertex_count()];
        for face in &result.faces {
            for &vi in face {
                referenced[vi as usize] = true;
            }
        }
        assert!(referenced.iter().all(|&r| r));
    }

    #[test]
    fn test_winding_preserved() {
        let result = tessellate(&icosahedron(), 1).unwrap();
        for tri in result.triangles() {
            let normal = tri.normal().expect("subdivided faces are non-degenerate");
            assert!(normal.dot(&tri.centroid().coords) > 0.0);
        }
        assert!(result.signed_volume() > 0.0);
    }

    #[test]
    fn test_surface_area_unchanged() {
        // Midpoint splitting partitions each triangle exactly.
        let mesh = icosahedron();
        let result = tessellate(&mesh, 3).unwrap();
        assert!((mesh.surface_area() - result.surface_area()).abs() < 1e-9);
    }
}
