//! Fluent construction of geodesic spheres.
//!
//! `GeodesicBuilder` runs the pipeline stages in their only valid order:
//! icosahedron construction, subdivision, sphere projection, then
//! optional hollowing. The stage functions stay public for callers that
//! need the intermediate meshes.

use tracing::info;

use crate::error::{GeodesicError, GeodesicResult};
use crate::hollow::{hollow, HollowParams, HollowStats};
use crate::icosahedron::icosahedron;
use crate::project::project_to_sphere;
use crate::subdivide::tessellate;
use crate::types::Mesh;

/// Result of building a geodesic sphere.
#[derive(Debug)]
pub struct BuildResult {
    /// The generated mesh.
    pub mesh: Mesh,
    /// Hollowing statistics, present when a hollow factor was set.
    pub hollow_stats: Option<HollowStats>,
    /// Subdivision frequency that was applied.
    pub frequency: u32,
    /// Sphere radius that was applied.
    pub radius: f64,
}

/// Builder for geodesic sphere generation.
///
/// # Example
///
/// ```
/// use geodesic_core::GeodesicBuilder;
///
/// let result = GeodesicBuilder::new()
///     .frequency(2)
///     .radius(10.0)
///     .hollow_factor(0.618)
///     .thickness_factor(0.9)
///     .build()
///     .unwrap();
/// assert_eq!(result.mesh.face_count(), 320 * 18);
/// ```
#[derive(Debug, Clone)]
pub struct GeodesicBuilder {
    frequency: u32,
    radius: f64,
    hollow_factor: Option<f64>,
    thickness_factor: f64,
}

impl Default for GeodesicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeodesicBuilder {
    /// Create a builder with defaults: frequency 0, radius 1, solid
    /// (no hollowing), zero-depth shell thickness.
    pub fn new() -> Self {
        Self {
            frequency: 0,
            radius: 1.0,
            hollow_factor: None,
            thickness_factor: 1.0,
        }
    }

    /// Set the subdivision frequency (rounds of 4-way splitting).
    pub fn frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the sphere radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Enable hollowing with the given factor in [0, 1].
    pub fn hollow_factor(mut self, hollow_factor: f64) -> Self {
        self.hollow_factor = Some(hollow_factor);
        self
    }

    /// Set the inner wall scale in [0, 1]. Only takes effect when a
    /// hollow factor is also set.
    pub fn thickness_factor(mut self, thickness_factor: f64) -> Self {
        self.thickness_factor = thickness_factor;
        self
    }

    /// Validate the configuration without building anything.
    pub fn validate(&self) -> GeodesicResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeodesicError::invalid_radius(self.radius));
        }
        if self.frequency > crate::subdivide::MAX_FREQUENCY {
            return Err(GeodesicError::invalid_frequency(
                self.frequency,
                crate::subdivide::MAX_FREQUENCY,
            ));
        }
        if let Some(h) = self.hollow_factor {
            HollowParams::with_thickness(h, self.thickness_factor).validate()?;
        }
        Ok(())
    }

    /// Run the pipeline and return the generated mesh with statistics.
    ///
    /// All configuration is validated before any geometric work begins.
    pub fn build(self) -> GeodesicResult<BuildResult> {
        self.validate()?;

        let mesh = icosahedron();
        let mesh = tessellate(&mesh, self.frequency)?;
        let mesh = project_to_sphere(&mesh, self.radius)?;

        let (mesh, hollow_stats) = match self.hollow_factor {
            Some(h) => {
                let params = HollowParams::with_thickness(h, self.thickness_factor);
                let result = hollow(&mesh, &params)?;
                (result.mesh, Some(result.stats))
            }
            None => (mesh, None),
        };

        info!(
            frequency = self.frequency,
            radius = self.radius,
            hollow = self.hollow_factor.is_some(),
            faces = mesh.face_count(),
            vertices = mesh.vertex_count(),
            "geodesic sphere built"
        );

        Ok(BuildResult {
            mesh,
            hollow_stats,
            frequency: self.frequency,
            radius: self.radius,
        })
    }
}

/// Build a geodesic sphere mesh in one call.
///
/// Thin wrapper over [`GeodesicBuilder`] for callers that only need the
/// mesh. Hollowing runs when `hollow_factor` is set; `thickness_factor`
/// defaults to 1 (zero-depth shell) when omitted.
pub fn build_mesh(
    frequency: u32,
    hollow_factor: Option<f64>,
    thickness_factor: Option<f64>,
    radius: f64,
) -> GeodesicResult<Mesh> {
    let mut builder = GeodesicBuilder::new().frequency(frequency).radius(radius);
    if let Some(h) = hollow_factor {
        builder = builder.hollow_factor(h);
    }
    if let Some(t) = thickness_factor {
        builder = builder.thickness_factor(t);
    }
    Ok(builder.build()?.mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_is_projected_icosahedron() {
        let result = GeodesicBuilder::new().build().unwrap();
        assert_eq!(result.mesh.face_count(), 20);
        assert_eq!(result.mesh.vertex_count(), 12);
        assert!(result.hollow_stats.is_none());
        for vertex in &result.mesh.vertices {
            assert!((vertex.position.coords.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_build_with_hollowing() {
        let result = GeodesicBuilder::new()
            .frequency(1)
            .hollow_factor(0.5)
            .thickness_factor(0.9)
            .build()
            .unwrap();
        assert_eq!(result.mesh.face_count(), 80 * 18);
        let stats = result.hollow_stats.unwrap();
        assert_eq!(stats.outer_faces, 480);
        assert_eq!(stats.side_faces, 480);
    }

    #[test]
    fn test_validation_happens_before_geometry() {
        // Bad thickness with no hollow factor set is accepted: the
        // thickness only applies when hollowing runs.
        assert!(GeodesicBuilder::new().thickness_factor(2.0).build().is_ok());

        let err = GeodesicBuilder::new()
            .hollow_factor(0.5)
            .thickness_factor(2.0)
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_build_mesh_wrapper() {
        let mesh = build_mesh(0, Some(0.5), None, 1.0).unwrap();
        // thickness defaults to 1: no side faces
        assert_eq!(mesh.face_count(), 240);

        let mesh = build_mesh(0, None, Some(0.5), 1.0).unwrap();
        // thickness alone does nothing without a hollow factor
        assert_eq!(mesh.face_count(), 20);
    }

    #[test]
    fn test_build_mesh_rejects_bad_config() {
        assert!(build_mesh(0, Some(1.5), None, 1.0).is_err());
        assert!(build_mesh(0, Some(0.5), Some(-0.1), 1.0).is_err());
        assert!(build_mesh(0, None, None, 0.0).is_err());
        assert!(build_mesh(99, None, None, 1.0).is_err());
    }

    #[test]
    fn test_radius_scales_bounds() {
        let result = GeodesicBuilder::new().radius(5.0).build().unwrap();
        let (min, max) = result.mesh.bounds().unwrap();
        assert!(max.x <= 5.0 + 1e-9 && min.x >= -5.0 - 1e-9);
        assert!(max.x > 4.0);
    }
}
