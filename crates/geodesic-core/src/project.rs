//! Radial projection onto a sphere.

use tracing::debug;

use crate::error::{GeodesicError, GeodesicResult};
use crate::types::{Mesh, Vertex};

/// A vertex closer to the origin than this cannot be projected: its
/// radial direction is numerically undefined.
const MIN_PROJECTABLE_NORM: f64 = 1e-12;

/// Project every vertex of the mesh radially onto a sphere of the given
/// radius centered at the origin.
///
/// Face indices are untouched; only positions move. Projection is
/// idempotent at a fixed radius.
///
/// # Errors
///
/// Returns [`GeodesicError::InvalidRadius`] when `radius` is non-positive
/// or non-finite, and [`GeodesicError::DegenerateVertex`] when a vertex
/// sits at (numerically) the origin.
pub fn project_to_sphere(mesh: &Mesh, radius: f64) -> GeodesicResult<Mesh> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeodesicError::invalid_radius(radius));
    }

    let mut vertices = Vec::with_capacity(mesh.vertex_count());
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        let p = &vertex.position;
        let norm = p.coords.norm();
        if norm < MIN_PROJECTABLE_NORM {
            return Err(GeodesicError::degenerate_vertex(i, [p.x, p.y, p.z]));
        }
        let scale = radius / norm;
        vertices.push(Vertex::from_coords(p.x * scale, p.y * scale, p.z * scale));
    }

    debug!(
        vertices = vertices.len(),
        radius, "projected mesh onto sphere"
    );

    Ok(Mesh {
        vertices,
        faces: mesh.faces.clone(),
    })
}
