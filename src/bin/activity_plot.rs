//! activity-plot: line chart of a 10000 ms activity series.
//!
//! ```bash
//! activity-plot occurrences.bin
//! activity-plot occurrences.bin --clip upper --clip-sigma 3
//! ```

use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::info;

use eventscope::cli::ActivityArgs;
use eventscope::config::RenderConfig;
use eventscope::core::buffer::{self, SERIES_LEN};
use eventscope::core::stats;
use eventscope::output;
use eventscope::render::series;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eventscope=info".parse().expect("static directive")),
        )
        .init();

    let args = ActivityArgs::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &ActivityArgs) -> Result<(), Box<dyn Error>> {
    let cfg = RenderConfig::load_or_default(&args.config);
    let input = Path::new(&args.input);

    let raw = buffer::load_series(input, SERIES_LEN)?;
    let mut values: Vec<f64> = raw.iter().map(|&v| v as f64).collect();
    let summary = stats::normalize(&mut values, &args.clip_spec());
    info!(
        mean = summary.mean,
        stddev = summary.stddev,
        "series statistics"
    );

    let out = output::png_path(input, Path::new(&cfg.output_dir))?;
    series::render_series(&out, &values, &cfg.series)?;
    println!("Plot saved to {}", out.display());
    Ok(())
}
