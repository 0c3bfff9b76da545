//! heatmap-plot: color-mapped rendering of a 640x480 event-count matrix.
//!
//! ```bash
//! heatmap-plot map_run_10000ms_4.bin
//! heatmap-plot map_run_10000ms_4.bin --clip upper --clip-sigma 3
//! heatmap-plot map_run_10000ms_4.bin --clip none
//! ```

use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::info;

use eventscope::cli::HeatmapArgs;
use eventscope::config::RenderConfig;
use eventscope::core::buffer::{self, MATRIX_COLS, MATRIX_ROWS};
use eventscope::core::stats;
use eventscope::output;
use eventscope::render::heatmap;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eventscope=info".parse().expect("static directive")),
        )
        .init();

    let args = HeatmapArgs::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &HeatmapArgs) -> Result<(), Box<dyn Error>> {
    let cfg = RenderConfig::load_or_default(&args.config);
    let input = Path::new(&args.input);

    let matrix = buffer::load_matrix(input, MATRIX_ROWS, MATRIX_COLS)?;
    let mut values: Vec<f64> = matrix.values().iter().map(|&v| v as f64).collect();
    let summary = stats::normalize(&mut values, &args.clip_spec());
    info!(
        mean = summary.mean,
        stddev = summary.stddev,
        "matrix statistics"
    );

    let out = output::png_path(input, Path::new(&cfg.output_dir))?;
    heatmap::render_heatmap(&out, &values, matrix.rows(), matrix.cols(), &cfg.heatmap)?;
    println!("Plot saved to {}", out.display());
    Ok(())
}
