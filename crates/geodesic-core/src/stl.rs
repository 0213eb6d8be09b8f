//! ASCII STL export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{GeodesicError, GeodesicResult};
use crate::types::Mesh;

/// Write the mesh as ASCII STL to the given writer.
///
/// Emits one `facet` block per face with a unit normal computed from the
/// winding order. Degenerate faces get a zero normal; STL readers
/// recompute normals from the loop anyway.
pub fn write_stl<W: Write>(mesh: &Mesh, writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer, "solid {}", name)?;

    for tri in mesh.triangles() {
        let normal = tri
            .normal()
            .unwrap_or_else(|| nalgebra::Vector3::new(0.0, 0.0, 0.0));

        writeln!(writer, "facet normal {} {} {}", normal.x, normal.y, normal.z)?;
        writeln!(writer, "  outer loop")?;
        for v in [&tri.v0, &tri.v1, &tri.v2] {
            writeln!(writer, "    vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "  endloop")?;
        writeln!(writer, "endfacet")?;
    }

    writeln!(writer, "endsolid {}", name)?;
    Ok(())
}

/// Render the mesh as an ASCII STL string.
pub fn export_stl_string(mesh: &Mesh, name: &str) -> String {
    let mut buf = Vec::new();
    // Writes to a Vec cannot fail.
    let _ = write_stl(mesh, &mut buf, name);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the mesh as an ASCII STL file.
///
/// The solid name inside the file is `name`; the on-disk path is
/// independent of it.
///
/// # Errors
///
/// Returns [`GeodesicError::IoWrite`] with the offending path when the
/// file cannot be created or written.
pub fn save_stl(mesh: &Mesh, path: &Path, name: &str) -> GeodesicResult<()> {
    let file = File::create(path).map_err(|e| GeodesicError::io_write(path, e))?;
    let mut writer = BufWriter::new(file);

    write_stl(mesh, &mut writer, name).map_err(|e| GeodesicError::io_write(path, e))?;
    writer
        .flush()
        .map_err(|e| GeodesicError::io_write(path, e))?;

    info!(
        path = %path.display(),
        faces = mesh.face_count(),
        "wrote ASCII STL"
    );
    Ok(())
}

impl Mesh {
    /// Convenience wrapper for [`save_stl`].
    pub fn save_stl(&self, path: &Path, name: &str) -> GeodesicResult<()> {
        save_stl(self, path, name)
    }
}
