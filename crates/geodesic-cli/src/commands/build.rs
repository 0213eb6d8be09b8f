//! geodesic build command - generate a sphere and write ASCII STL.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use geodesic_core::GeodesicBuilder;

use crate::{Cli, SphereArgs};

pub fn run(sphere: &SphereArgs, output: &Path, name: Option<&str>, cli: &Cli) -> Result<()> {
    let mut builder = GeodesicBuilder::new()
        .frequency(sphere.frequency)
        .radius(sphere.radius);
    if let Some(h) = sphere.hollow {
        builder = builder.hollow_factor(h);
    }
    if let Some(t) = sphere.thickness {
        builder = builder.thickness_factor(t);
    }

    let result = builder.build().context("Failed to build geodesic sphere")?;

    let solid_name = match name {
        Some(n) => n.to_string(),
        None => output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("geodesic")
            .to_string(),
    };

    result
        .mesh
        .save_stl(output, &solid_name)
        .with_context(|| format!("Failed to write STL to {:?}", output))?;

    if !cli.quiet {
        println!(
            "{} {}",
            "Wrote".green().bold(),
            output.display()
        );
        println!(
            "  {}: frequency {}, radius {}",
            "Sphere".cyan(),
            result.frequency,
            result.radius
        );
        println!(
            "  {}: {} vertices, {} faces",
            "Size".cyan(),
            result.mesh.vertex_count(),
            result.mesh.face_count()
        );
        if let Some(stats) = result.hollow_stats {
            println!(
                "  {}: {} outer, {} inner, {} side faces",
                "Hollow".cyan(),
                stats.outer_faces,
                stats.inner_faces,
                stats.side_faces
            );
        }
    }

    Ok(())
}
