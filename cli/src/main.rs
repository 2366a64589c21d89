//! Relief: extrude bitmaps into printable solids.
//!
//! Turns a code symbol or a black/white raster image into an STL model:
//! every dark cell of the source bitmap becomes one cuboid, extruded to
//! the requested depth.
//!
//! # Commands
//!
//! - `relief url <TEXT> -o out.stl` - encode text as a code symbol
//! - `relief image <PATH> -o out.stl` - threshold a raster image
//! - `relief round <TEXT> -o out.stl` - symbol with round modules
//! - `relief line <TEXT> -o out.stl` - symbol with linked-line modules
//!
//! Set `RUST_LOG=debug` for pipeline diagnostics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use relief_bitmap::{BitmapParams, BitmapSource};
use relief_extrude::{extrude_grid, ExtrudeParams};
use relief_io::save_stl;

/// Extrude code symbols and raster images into printable STL solids.
#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Extrude bitmaps into printable STL solids", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text or a URL as a code symbol and extrude it
    Url {
        /// Payload to encode
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        opts: JobOpts,
    },

    /// Threshold a raster image and extrude its dark pixels
    Image {
        /// Path to the image file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        #[command(flatten)]
        opts: JobOpts,
    },

    /// Code symbol rendered with round modules
    Round {
        /// Payload to encode
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        opts: JobOpts,
    },

    /// Code symbol rendered with linked-line modules
    Line {
        /// Payload to encode
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        opts: JobOpts,
    },
}

#[derive(Args)]
struct JobOpts {
    /// Output STL path
    #[arg(short, long)]
    output: PathBuf,

    /// Physical span of the longer bitmap side, in millimeters
    #[arg(long, default_value_t = 50.0)]
    size_mm: f64,

    /// Extrusion height, in millimeters
    #[arg(long, default_value_t = 10.0)]
    depth_mm: f64,

    /// Extrude the light cells instead of the dark ones
    #[arg(long)]
    invert: bool,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,

    /// Quiet-zone width around code symbols, in modules
    #[arg(long, default_value_t = 4)]
    border: usize,

    /// Luma cutoff for image thresholding (dark below)
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Raster pixels per module for styled symbols
    #[arg(long, default_value_t = 8)]
    scale: usize,
}

/// One fully-resolved extrusion job.
///
/// Built once from the parsed command line and passed down; nothing in
/// the pipeline reads configuration from anywhere else.
struct Job {
    source: BitmapSource,
    bitmap: BitmapParams,
    extrude: ExtrudeParams,
    output: PathBuf,
    ascii: bool,
}

impl Job {
    fn from_command(command: Commands) -> Self {
        let (source, opts) = match command {
            Commands::Url { text, opts } => (BitmapSource::Url { text }, opts),
            Commands::Image { path, opts } => (BitmapSource::Image { path }, opts),
            Commands::Round { text, opts } => (BitmapSource::StyledRound { text }, opts),
            Commands::Line { text, opts } => (BitmapSource::StyledLine { text }, opts),
        };
        Self {
            source,
            bitmap: BitmapParams {
                border: opts.border,
                threshold: opts.threshold,
                scale: opts.scale,
            },
            extrude: ExtrudeParams {
                size_mm: opts.size_mm,
                depth_mm: opts.depth_mm,
                invert: opts.invert,
            },
            output: opts.output,
            ascii: opts.ascii,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(&Job::from_command(cli.command))
}

fn run(job: &Job) -> Result<()> {
    let grid = job
        .source
        .resolve(&job.bitmap)
        .context("building the source bitmap")?;

    let mesh = extrude_grid(&grid, &job.extrude).context("extruding the bitmap")?;

    save_stl(&mesh, &job.output, !job.ascii)
        .with_context(|| format!("writing {}", job.output.display()))?;

    let bounds = mesh.bounds();
    if bounds.is_empty() {
        println!(
            "wrote an empty model to {} (no active cells)",
            job.output.display()
        );
    } else {
        let size = bounds.size();
        println!(
            "wrote {} triangles to {} ({:.1} x {:.1} x {:.1} mm)",
            mesh.face_count(),
            job.output.display(),
            size.x,
            size.y,
            size.z
        );
    }

    Ok(())
}
