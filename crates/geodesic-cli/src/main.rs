//! geodesic-cli: Command-line interface for geodesic sphere generation.
//!
//! Generates geodesic spheres by icosahedron subdivision and writes them
//! as ASCII STL, suitable for scripting and 3D-printing pipelines.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=geodesic_core=info` - Basic stage logging
//! - `RUST_LOG=geodesic_core=debug` - Per-round subdivision detail
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Hollowed frequency-2 sphere with a 90% wall
//! geodesic build -f 2 --hollow 0.618 --thickness 0.9 -o sphere.stl
//!
//! # Statistics without writing anything
//! geodesic info -f 3
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{build, info};

/// geodesic - generate geodesic spheres as ASCII STL.
///
/// Subdivides a regular icosahedron, projects it onto a sphere, and
/// optionally hollows each face into a shelled triangular frame.
#[derive(Parser)]
#[command(name = "geodesic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Generation parameters shared by the subcommands.
#[derive(Debug, clap::Args)]
struct SphereArgs {
    /// Subdivision frequency (rounds of 4-way face splitting)
    #[arg(short, long, default_value = "0")]
    frequency: u32,

    /// Sphere radius
    #[arg(short, long, default_value = "1.0")]
    radius: f64,

    /// Hollow each face; factor in [0, 1] sets the opening size
    /// (0 = void triangle coincident with the face, 1 = collapsed to
    /// the centroid)
    #[arg(long, value_name = "FACTOR")]
    hollow: Option<f64>,

    /// Inner wall scale in [0, 1]; only meaningful with --hollow
    /// (1 = zero-depth shell)
    #[arg(long, value_name = "FACTOR")]
    thickness: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a geodesic sphere and write it as ASCII STL
    Build {
        #[command(flatten)]
        sphere: SphereArgs,

        /// Output STL file path
        #[arg(short, long)]
        output: PathBuf,

        /// Solid name inside the STL file (defaults to the output
        /// file stem)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print statistics for a sphere without writing it
    Info {
        #[command(flatten)]
        sphere: SphereArgs,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    // If quiet, don't initialize any tracing
    if quiet {
        return;
    }

    // RUST_LOG takes precedence over the -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "geodesic_core=info",
            2 => "geodesic_core=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Install miette's panic hook for better error display in development
    #[cfg(debug_assertions)]
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Build {
            sphere,
            output,
            name,
        } => build::run(sphere, output, name.as_deref(), &cli),
        Commands::Info { sphere } => info::run(sphere, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            // Library errors carry a diagnostic code worth surfacing
            if let Some(geo_err) = e.downcast_ref::<geodesic_core::GeodesicError>() {
                eprintln!("{}: {}", "Error".red().bold(), geo_err);
                eprintln!("  {}: {}", "Code".cyan(), geo_err.code());
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                for cause in e.chain().skip(1) {
                    eprintln!("  {}: {}", "Caused by".yellow(), cause);
                }
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
