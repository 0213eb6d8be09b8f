//! Geodesic sphere generation.
//!
//! This crate builds geodesic spheres by subdividing a regular
//! icosahedron and projecting the result onto a sphere, with an optional
//! hollowing pass that turns each face into a shelled triangular frame.
//! The generated meshes export as ASCII STL.
//!
//! # Pipeline
//!
//! Generation runs in a fixed stage order, each stage producing a new
//! mesh:
//!
//! 1. **Icosahedron** — 12 vertices, 20 faces, edge length 1, built from
//!    three orthogonal golden-ratio rectangles.
//! 2. **Tessellation** — `frequency` rounds of midpoint 4-way splitting;
//!    after `w` rounds the mesh has `20 * 4^w` faces and `10 * 4^w + 2`
//!    vertices.
//! 3. **Projection** — every vertex is normalized radially onto a sphere
//!    of the requested radius.
//! 4. **Hollowing** (optional) — each face becomes a frame around a
//!    shrunken void triangle, doubled into an inner wall scaled toward
//!    the origin.
//!
//! # Coordinate System
//!
//! Right-handed coordinates, spheres centered at the origin. Face
//! winding is **counter-clockwise viewed from outside**, so normals
//! point outward by the right-hand rule and solid meshes have positive
//! signed volume.
//!
//! # Quick Start
//!
//! ```no_run
//! use geodesic_core::GeodesicBuilder;
//! use std::path::Path;
//!
//! let result = GeodesicBuilder::new()
//!     .frequency(2)
//!     .hollow_factor(0.618)
//!     .thickness_factor(0.9)
//!     .build()
//!     .unwrap();
//!
//! result.mesh.save_stl(Path::new("sphere.stl"), "sphere").unwrap();
//! ```
//!
//! The stage functions ([`icosahedron`], [`tessellate`],
//! [`project_to_sphere`], [`hollow`]) are public for callers that need
//! the intermediate meshes.

pub mod builder;
pub mod error;
pub mod hollow;
pub mod icosahedron;
pub mod interner;
pub mod project;
pub mod stl;
pub mod subdivide;
pub mod types;

pub use builder::{build_mesh, BuildResult, GeodesicBuilder};
pub use error::{ErrorCode, GeodesicError, GeodesicResult};
pub use hollow::{hollow, HollowParams, HollowResult, HollowStats};
pub use icosahedron::icosahedron;
pub use interner::VertexInterner;
pub use project::project_to_sphere;
pub use stl::{export_stl_string, save_stl, write_stl};
pub use subdivide::{tessellate, MAX_FREQUENCY};
pub use types::{Mesh, Triangle, Vertex};
