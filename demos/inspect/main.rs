//! Prints the derived metrics of an ASCII STL file.
//!
//! ```text
//! cargo run --example inspect -- model.stl
//! cargo run --example inspect -- model.stl --allow-duplicates
//! cargo run --example inspect -- model.stl --lenient
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stlparse::ParseConfig;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "inspect", about = "Parse an ASCII STL file and print its metrics.")]
struct Args {
    /// The STL file to read.
    file: PathBuf,

    /// Report duplicate facets without failing.
    #[arg(long)]
    allow_duplicates: bool,

    /// Accept short vectors and vertex lists, and reject signed numbers.
    #[arg(long)]
    lenient: bool,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for stlparse.
    // Override with RUST_LOG env var (e.g. RUST_LOG=stlparse=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("stlparse=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let config = if args.lenient {
        ParseConfig::lenient()
    } else {
        ParseConfig::default()
    };

    let solid = match stlparse::parse_file(&args.file, config) {
        Ok(solid) => solid,
        Err(err) => {
            error!("main: unable to read {}: {err}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    println!("SOLID: {}", solid.name);
    println!("TRIANGLES: {}", solid.facet_count());
    println!("SURFACE AREA: {:.6}", solid.surface_area());
    match solid.bounding_box() {
        Some(aabb) => println!(
            "BOUNDING BOX: min ({}, {}, {}) max ({}, {}, {})",
            aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x, aabb.max.y, aabb.max.z
        ),
        None => println!("BOUNDING BOX: empty"),
    }

    if solid.check_duplicates() {
        if !args.allow_duplicates {
            error!("main: solid {} contains duplicate facets", solid.name);
            return ExitCode::FAILURE;
        }
        println!("DUPLICATES: yes");
    }

    ExitCode::SUCCESS
}
