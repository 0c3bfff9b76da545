//! summary-plot: grouped error-bar charts from a benchmark summary CSV.
//!
//! Emits one PNG per unique CPU count (with/without GPU comparison) and one
//! per unique GPU flag (one series per CPU count).
//!
//! ```bash
//! summary-plot summary_transfer.csv
//! ```

use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::info;

use eventscope::cli::SummaryArgs;
use eventscope::config::RenderConfig;
use eventscope::output;
use eventscope::render::summary;
use eventscope::table;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eventscope=info".parse().expect("static directive")),
        )
        .init();

    let args = SummaryArgs::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &SummaryArgs) -> Result<(), Box<dyn Error>> {
    let cfg = RenderConfig::load_or_default(&args.config);
    let input = Path::new(&args.input);
    let out_dir = Path::new(&cfg.output_dir);

    let rows = table::load_table(input)?;
    let stats = table::group_stats(&rows);
    let cpu_counts = table::unique_cpus(&rows);
    let gpu_flags = table::unique_gpus(&rows);
    info!(
        rows = rows.len(),
        groups = stats.len(),
        cpu_counts = ?cpu_counts,
        gpu_flags = ?gpu_flags,
        "summary table loaded"
    );

    // Shared y scale across every chart of the batch.
    let y_max = rows.iter().map(|r| r.seconds).fold(0.0f64, f64::max) * 1.2;
    let y_max = y_max.max(1e-9);

    let name = summary::data_name(&output::input_stem(input));

    for &cpus in &cpu_counts {
        let out = output::png_path_with_suffix(input, out_dir, &format!("gpus_for_{cpus}_cpus"))?;
        summary::render_gpu_comparison(&out, &name, cpus, &stats, y_max, cfg.summary.small)?;
        println!("Plot saved to {}", out.display());
    }

    for &gpu in &gpu_flags {
        let flag = u32::from(gpu);
        let out = output::png_path_with_suffix(input, out_dir, &format!("cpus_for_{flag}_gpus"))?;
        summary::render_cpu_sweep(&out, &name, gpu, &cpu_counts, &stats, y_max, cfg.summary.large)?;
        println!("Plot saved to {}", out.display());
    }

    Ok(())
}
