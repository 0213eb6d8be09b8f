//! Hollowing: turning solid faces into shelled triangular frames.
//!
//! Each solid triangle is replaced by a frame around a shrunken void
//! triangle, then doubled into an inner wall scaled toward the origin.
//! The result is a skeletal sphere whose faces are open windows.

use nalgebra::Point3;
use tracing::{debug, info};

use crate::error::{GeodesicError, GeodesicResult};
use crate::interner::VertexInterner;
use crate::types::Mesh;

/// Parameters for hollowing a solid mesh.
#[derive(Debug, Clone)]
pub struct HollowParams {
    /// Size of the opening cut into each face, in [0, 1].
    /// 0 leaves the void triangle coincident with the face (no visible
    /// opening); 1 collapses it to the face centroid (maximal frame).
    /// Default: 0.0
    pub hollow_factor: f64,
    /// Radial scale applied to the inner wall, in [0, 1].
    /// 1 places the inner wall exactly on the outer one (zero-depth
    /// shell, no side faces); smaller values pull it toward the origin
    /// and close the gap with side faces.
    /// Default: 1.0
    pub thickness_factor: f64,
}

impl Default for HollowParams {
    fn default() -> Self {
        Self {
            hollow_factor: 0.0,
            thickness_factor: 1.0,
        }
    }
}

impl HollowParams {
    /// Create params with the given hollow factor and a zero-depth shell.
    pub fn new(hollow_factor: f64) -> Self {
        Self {
            hollow_factor,
            ..Default::default()
        }
    }

    /// Create params with both a hollow factor and a wall thickness.
    pub fn with_thickness(hollow_factor: f64, thickness_factor: f64) -> Self {
        Self {
            hollow_factor,
            thickness_factor,
        }
    }

    /// Validate factor ranges.
    pub fn validate(&self) -> GeodesicResult<()> {
        if !(0.0..=1.0).contains(&self.hollow_factor) {
            return Err(GeodesicError::invalid_factor(
                "hollow_factor",
                self.hollow_factor,
            ));
        }
        if !(0.0..=1.0).contains(&self.thickness_factor) {
            return Err(GeodesicError::invalid_factor(
                "thickness_factor",
                self.thickness_factor,
            ));
        }
        Ok(())
    }
}

/// Statistics from a hollowing pass.
#[derive(Debug, Clone, Copy)]
pub struct HollowStats {
    /// Outward-facing frame faces (6 per input face).
    pub outer_faces: usize,
    /// Inward-facing frame faces (6 per input face).
    pub inner_faces: usize,
    /// Side faces closing the wall (6 per input face, 0 when the
    /// thickness factor is 1).
    pub side_faces: usize,
}

/// Result of hollowing a mesh.
#[derive(Debug)]
pub struct HollowResult {
    /// The hollowed mesh.
    pub mesh: Mesh,
    /// Face statistics.
    pub stats: HollowStats,
}

/// Hollow every face of a solid mesh into a shelled triangular frame.
///
/// For each face `(v1, v2, v3)` with centroid `c`, the void triangle
/// vertices are `s_i = c + (1 - h) * (v_i - c)` where `h` is the hollow
/// factor. Six outer faces frame the opening, six reverse-wound copies
/// scaled by the thickness factor `t` form the inner wall, and when
/// `t < 1` six side faces close the gap between the void triangle and
/// its scaled copy. Frames of adjacent input faces share their boundary
/// vertices through interning.
///
/// The input is assumed to be solid projected triangles; hollowing an
/// already-hollowed mesh is unsupported.
///
/// # Errors
///
/// Returns [`GeodesicError::InvalidFactor`] when either factor is NaN or
/// outside [0, 1].
pub fn hollow(mesh: &Mesh, params: &HollowParams) -> GeodesicResult<HollowResult> {
    params.validate()?;

    let h = params.hollow_factor;
    let t = params.thickness_factor;
    let shrink = 1.0 - h;
    let emit_sides = t < 1.0;

    let faces_per_input = if emit_sides { 18 } else { 12 };
    let mut interner = VertexInterner::with_capacity(mesh.vertex_count() * 4);
    let mut faces: Vec<[u32; 3]> = Vec::with_capacity(mesh.face_count() * faces_per_input);

    for &[i1, i2, i3] in &mesh.faces {
        let v1 = mesh.vertices[i1 as usize].position;
        let v2 = mesh.vertices[i2 as usize].position;
        let v3 = mesh.vertices[i3 as usize].position;

        let c = Point3::new(
            (v1.x + v2.x + v3.x) / 3.0,
            (v1.y + v2.y + v3.y) / 3.0,
            (v1.z + v2.z + v3.z) / 3.0,
        );
        let s1 = c + (v1 - c) * shrink;
        let s2 = c + (v2 - c) * shrink;
        let s3 = c + (v3 - c) * shrink;

        // Outward-facing frame: two triangles per edge of the opening,
        // same winding as the input face.
        let outer: [[Point3<f64>; 3]; 6] = [
            [v1, v2, s2],
            [v1, s2, s1],
            [v2, v3, s3],
            [v2, s3, s2],
            [v3, v1, s1],
            [v3, s1, s3],
        ];

        for tri in &outer {
            faces.push([
                interner.intern(tri[0]),
                interner.intern(tri[1]),
                interner.intern(tri[2]),
            ]);
        }

        // Inner wall: each outer face scaled toward the origin and
        // reverse-wound so its normal points inward.
        for tri in &outer {
            faces.push([
                interner.intern(scale(tri[2], t)),
                interner.intern(scale(tri[1], t)),
                interner.intern(scale(tri[0], t)),
            ]);
        }

        if emit_sides {
            let n1 = scale(s1, t);
            let n2 = scale(s2, t);
            let n3 = scale(s3, t);
            let sides: [[Point3<f64>; 3]; 6] = [
                [s1, s2, n1],
                [s2, n2, n1],
                [s2, s3, n2],
                [s3, n3, n2],
                [s3, s1, n3],
                [s1, n1, n3],
            ];
            for tri in &sides {
                faces.push([
                    interner.intern(tri[0]),
                    interner.intern(tri[1]),
                    interner.intern(tri[2]),
                ]);
            }
        }
    }

    let per_face_sides = if emit_sides { 6 } else { 0 };
    let stats = HollowStats {
        outer_faces: mesh.face_count() * 6,
        inner_faces: mesh.face_count() * 6,
        side_faces: mesh.face_count() * per_face_sides,
    };

    debug!(
        hollow_factor = h,
        thickness_factor = t,
        input_faces = mesh.face_count(),
        "hollowed all faces"
    );
    info!(
        faces = faces.len(),
        vertices = interner.len(),
        "hollowing complete"
    );

    Ok(HollowResult {
        mesh: Mesh {
            vertices: interner.into_vertices(),
            faces,
        },
        stats,
    })
}

#[inline]
fn scale(p: Point3<f64>, t: f64) -> Point3<f64> {
    Point3::new(p.x * t, p.y * t, p.z * t)
}
