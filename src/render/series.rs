//! Activity time-series line chart.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::config::SeriesChartConfig;

/// Raw counts per millisecond are plotted as MeV/s.
const COUNTS_PER_MEV: f64 = 1000.0;

/// Render one activity series as a line chart with point markers.
///
/// `counts` is the (possibly clipped) buffer in file order; index = time
/// step in milliseconds.
pub fn render_series(
    out_path: &Path,
    counts: &[f64],
    cfg: &SeriesChartConfig,
) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64)> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f64, c / COUNTS_PER_MEV))
        .collect();

    let y_max = points
        .iter()
        .map(|&(_, y)| y)
        .fold(0.0f64, f64::max)
        .max(1e-9)
        * 1.05;
    let x_max = counts.len() as f64;

    let root =
        BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("t [ms]")
        .y_desc("Activity [MeV/s]")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 2, BLUE.filled())),
    )?;

    root.present()?;
    info!(path = %out_path.display(), "wrote activity plot");
    Ok(())
}
