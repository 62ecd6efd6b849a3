//! grid-raster - rasterize a line or circle onto a cell grid.
//!
//! Prints the emitted cells and the draw time; optionally renders the pass
//! as ASCII art or a PNG.
//!
//! Run: `grid-raster --algorithm midpointCircle --center 10,10 --radius 5 --ascii`

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_raster::cells::CellSequence;
use grid_raster::config::Config;
use grid_raster::geometry::GridPoint;
use grid_raster::instrument::Instrumentation;
use grid_raster::output::{PngEncoder, TerminalEncoder};
use grid_raster::raster::AlgorithmId;
use grid_raster::scene::run_pass;
use grid_raster::surface::draw_scene;

/// grid-raster: line and circle scan-conversion on a cell grid
#[derive(Parser, Debug)]
#[command(name = "grid-raster")]
#[command(version)]
#[command(about = "Rasterize lines and circles onto a grid of cells", long_about = None)]
struct Cli {
    /// Config file path (default: <config_dir>/grid-raster/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Algorithm: naiveSlope, dda, bresenhamLine, bresenhamCircle, midpointCircle
    #[arg(short, long)]
    algorithm: Option<AlgorithmId>,

    /// Line start as "col,row"
    #[arg(long)]
    start: Option<GridPoint>,

    /// Line end as "col,row"
    #[arg(long)]
    end: Option<GridPoint>,

    /// Circle center as "col,row"
    #[arg(long)]
    center: Option<GridPoint>,

    /// Circle radius in cells
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<i64>,

    /// Cell side in logical pixels
    #[arg(long)]
    cell_size: Option<f64>,

    /// Display scale (0.5 to 2.0)
    #[arg(long)]
    scale: Option<f64>,

    /// Write the rendered pass to a PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Print an ASCII rendering of the cells
    #[arg(long)]
    ascii: bool,

    /// Print each cell once, in first-emission order
    #[arg(long)]
    dedup: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> grid_raster::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.scene.algorithm = algorithm;
        }
        if let Some(start) = self.start {
            config.scene.line_start = Some(start);
        }
        if let Some(end) = self.end {
            config.scene.line_end = Some(end);
        }
        if let Some(center) = self.center {
            config.scene.circle_center = Some(center);
        }
        if let Some(radius) = self.radius {
            config.scene.circle_radius = Some(radius);
        }
        if let Some(cell_size) = self.cell_size {
            config.grid.cell_size_px = cell_size;
        }
        if let Some(scale) = self.scale {
            config.grid.scale = scale;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn format_cells(cells: &CellSequence) -> String {
    cells.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config()?;
    let scene = config.to_scene()?;
    tracing::debug!(algorithm = %scene.algorithm, "scene ready");

    let mut cells = CellSequence::new();
    let mut instrumentation = Instrumentation::new();
    if run_pass(&scene, &mut cells, &mut instrumentation).is_none() {
        tracing::warn!(algorithm = %scene.algorithm, "scene incomplete, nothing drawn");
    }

    let shown = if cli.dedup { cells.deduplicated() } else { cells };
    println!("Algorithm: {}", scene.algorithm);
    println!("Cells ({}): {}", shown.len(), format_cells(&shown));

    if cli.ascii {
        print!("{}", TerminalEncoder::new().render_scene(&scene, &shown));
    }

    if let Some(path) = &cli.png {
        let (surface, _) = draw_scene(&scene, config.grid.width_px, config.grid.height_px)?;
        PngEncoder::write_to_file(surface.framebuffer(), path)?;
    }

    println!("Draw time (ms): {}", instrumentation.display());
    Ok(())
}
