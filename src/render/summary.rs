//! Grouped error-bar charts for benchmark summary tables.
//!
//! Two views of the same aggregates: a per-CPU-count chart comparing runs
//! with and without GPU offloading, and a per-GPU-flag chart with one
//! series per CPU count. Error bars span mean +/- stddev.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::table::GroupStat;

fn node_range(stats: &[GroupStat]) -> (f64, f64) {
    let max_nodes = stats.iter().map(|s| s.nodes).max().unwrap_or(1);
    (0.0, max_nodes as f64 + 1.0)
}

/// One chart per CPU count: time vs nodes, with vs without GPU offloading.
///
/// `y_max` comes from the whole table (max time * 1.2) so every chart in a
/// batch shares the same scale.
pub fn render_gpu_comparison(
    out_path: &Path,
    data_name: &str,
    cpus: u32,
    stats: &[GroupStat],
    y_max: f64,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let selected: Vec<&GroupStat> = stats.iter().filter(|s| s.cpus == cpus).collect();
    let (x_min, x_max) = node_range(stats);

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{data_name}: {cpus} CPUs with/without GPU offloading"),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart.configure_mesh().x_desc("Nodes").y_desc("Time").draw()?;

    for (gpu, color) in [(true, BLUE), (false, RED)] {
        let series: Vec<&GroupStat> =
            selected.iter().copied().filter(|s| s.gpu == gpu).collect();
        if series.is_empty() {
            continue;
        }
        let connector = if gpu { "with" } else { "without" };

        chart
            .draw_series(LineSeries::new(
                series.iter().map(|s| (s.nodes as f64, s.mean)),
                &color,
            ))?
            .label(format!("{connector} GPU"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(series.iter().map(|s| {
            ErrorBar::new_vertical(
                s.nodes as f64,
                s.mean - s.stddev,
                s.mean,
                s.mean + s.stddev,
                color.filled(),
                10,
            )
        }))?;
        chart.draw_series(
            series
                .iter()
                .map(|s| Circle::new((s.nodes as f64, s.mean), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    info!(path = %out_path.display(), cpus, "wrote GPU comparison chart");
    Ok(())
}

/// One chart per GPU flag: time vs nodes, one series per CPU count.
pub fn render_cpu_sweep(
    out_path: &Path,
    data_name: &str,
    gpu: bool,
    cpu_counts: &[u32],
    stats: &[GroupStat],
    y_max: f64,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = node_range(stats);
    let connector = if gpu { "with" } else { "without" };

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{data_name}: CPUs {connector} GPU offloading"),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart.configure_mesh().x_desc("Nodes").y_desc("Time").draw()?;

    for (idx, &cpus) in cpu_counts.iter().enumerate() {
        let series: Vec<&GroupStat> = stats
            .iter()
            .filter(|s| s.gpu == gpu && s.cpus == cpus)
            .collect();
        if series.is_empty() {
            continue;
        }
        let color = Palette99::pick(idx).to_rgba();

        chart
            .draw_series(LineSeries::new(
                series.iter().map(|s| (s.nodes as f64, s.mean)),
                &color,
            ))?
            .label(format!("{cpus} CPUs"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(series.iter().map(|s| {
            ErrorBar::new_vertical(
                s.nodes as f64,
                s.mean - s.stddev,
                s.mean,
                s.mean + s.stddev,
                color.filled(),
                10,
            )
        }))?;
        chart.draw_series(
            series
                .iter()
                .map(|s| Circle::new((s.nodes as f64, s.mean), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    info!(path = %out_path.display(), gpu, "wrote CPU sweep chart");
    Ok(())
}

/// Chart title stem: strip a `summary_` prefix and capitalize.
pub fn data_name(stem: &str) -> String {
    let trimmed = stem.strip_prefix("summary_").unwrap_or(stem);
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_name_strips_prefix_and_capitalizes() {
        assert_eq!(data_name("summary_transfer"), "Transfer");
        assert_eq!(data_name("compute"), "Compute");
        assert_eq!(data_name(""), "");
    }
}
