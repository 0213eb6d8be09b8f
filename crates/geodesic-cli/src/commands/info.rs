//! geodesic info command - print sphere statistics without writing.

use anyhow::{Context, Result};
use colored::Colorize;
use geodesic_core::GeodesicBuilder;

use crate::{Cli, SphereArgs};

pub fn run(sphere: &SphereArgs, cli: &Cli) -> Result<()> {
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
    let mesh = &result.mesh;

    if !cli.quiet {
        println!("{}", "Geodesic sphere".bold());
        println!(
            "  {}: frequency {}, radius {}",
            "Parameters".cyan(),
            result.frequency,
            result.radius
        );
        println!("  {}: {}", "Vertices".cyan(), mesh.vertex_count());
        println!("  {}: {}", "Faces".cyan(), mesh.face_count());

        if let Some((min, max)) = mesh.bounds() {
            println!(
                "  {}: ({:.4}, {:.4}, {:.4}) to ({:.4}, {:.4}, {:.4})",
                "Bounds".cyan(),
                min.x,
                min.y,
                min.z,
                max.x,
                max.y,
                max.z
            );
        }

        println!("  {}: {:.6}", "Surface area".cyan(), mesh.surface_area());
        println!("  {}: {:.6}", "Volume".cyan(), mesh.signed_volume());

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
