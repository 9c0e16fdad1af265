//! ring_render: write an SVG preview and an OBJ export of one ring.
//!
//! # Logging
//!
//! `RUST_LOG` overrides the `-v` level, e.g. `RUST_LOG=ring_tessellation=debug`.
//!
//! # Example
//!
//! ```bash
//! ring_render --config ring.json --out docs/renders -v
//! ring_render --ring 2 --draft
//! ```

mod error;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use preview_engine::PreviewEngine;
use ring_tessellation::{mesh_to_obj, validate_mesh, MeshSettings, RingMesh};
use ring_types::{RingConfig, RingPair};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::RenderError;

/// Render a wedding ring configuration to SVG and OBJ.
#[derive(Parser)]
#[command(name = "ring_render")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ring or ring-pair JSON file; catalog defaults when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Which ring of the pair to render
    #[arg(long, default_value_t = 1)]
    ring: u32,

    /// Output directory
    #[arg(long, short, default_value = "docs/renders")]
    out: PathBuf,

    /// Use the coarse draft resolution
    #[arg(long)]
    draft: bool,

    /// SVG canvas width in pixels
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// SVG canvas height in pixels
    #[arg(long, default_value_t = 450.0)]
    height: f64,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "ring_render=info,preview_engine=info,ring_tessellation=info,ring_kernel=info",
            2 => "ring_render=debug,preview_engine=debug,ring_tessellation=debug,ring_kernel=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Load the ring to render. A pair file is narrowed to `ring`.
fn load_config(path: Option<&Path>, ring: u32) -> Result<RingConfig, RenderError> {
    let Some(path) = path else {
        return match ring {
            1 | 2 => Ok(RingConfig::default_for(ring)),
            other => Err(RenderError::UnknownRing(other)),
        };
    };

    let text = fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if let Ok(pair) = serde_json::from_str::<RingPair>(&text) {
        info!(path = %path.display(), ring, "loaded ring pair");
        return pair.ring(ring).cloned().ok_or(RenderError::UnknownRing(ring));
    }

    let config = RingConfig::from_json(&text)?;
    info!(path = %path.display(), id = config.id, "loaded ring config");
    Ok(config)
}

fn write_file(path: PathBuf, contents: String) -> Result<(), RenderError> {
    fs::write(&path, contents).map_err(|source| RenderError::Write { path, source })
}

/// Validate and print mesh quality info.
fn validate_and_report(name: &str, mesh: &RingMesh) {
    let val = validate_mesh(mesh);
    let renderable = if val.is_renderable() { "renderable" } else { "NOT renderable" };
    let manifold = if val.is_manifold() { "manifold" } else { "non-manifold" };
    println!(
        "  {name}: {tris} tris, {verts} verts, {groups} groups, {manifold}, {renderable}",
        tris = mesh.triangle_count(),
        verts = mesh.vertex_count(),
        groups = mesh.groups.len(),
    );
    if val.degenerate_triangles > 0 || val.non_manifold_edges > 0 {
        println!(
            "    degenerate={}, non_manifold={}",
            val.degenerate_triangles, val.non_manifold_edges
        );
    }
}

fn main() -> Result<(), RenderError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.ring)?;
    if let Err(err) = config.validate() {
        warn!(%err, "configuration outside the catalog range, rendering anyway");
    }

    let settings = if cli.draft {
        MeshSettings::draft()
    } else {
        MeshSettings::preview()
    };
    let mut engine = PreviewEngine::new(settings);
    let frame = engine.update(&config);

    fs::create_dir_all(&cli.out).map_err(|source| RenderError::Write {
        path: cli.out.clone(),
        source,
    })?;

    let title = format!(
        "Ring {} ({:?}, {} mm, {} x {} mm)",
        config.id, config.profile, config.size, config.width, config.height
    );
    let svg = svg::frame_to_svg(&frame, config.stones.size, cli.width, cli.height, &title);
    write_file(cli.out.join("ring.svg"), svg)?;
    write_file(cli.out.join("ring.obj"), mesh_to_obj(&frame.mesh))?;

    println!("=== Ring {} ===", config.id);
    validate_and_report("band", &frame.mesh);
    if !frame.placements.is_empty() {
        println!("  stones: {} placed", frame.placements.len());
    }
    if let Some(anchor) = &frame.engraving {
        println!("  engraving: \"{}\" (max width {:.3})", anchor.text, anchor.max_width);
    }
    println!("  wrote {}", cli.out.display());
    Ok(())
}
