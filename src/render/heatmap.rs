//! Event-count heatmap with a colorbar.
//!
//! The stored grid is row-major with row index = sensor x; display
//! transposes it so x runs along the horizontal axis. The transpose is a
//! presentation convention only and does not belong to the loader contract.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::config::HeatmapChartConfig;

const COLORBAR_WIDTH: u32 = 180;
const COLORBAR_STEPS: usize = 256;

/// Black -> red -> yellow -> white ramp over `t` in [0, 1].
fn hot_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let r = (t * 3.0).min(1.0);
    let g = (t * 3.0 - 1.0).clamp(0.0, 1.0);
    let b = (t * 3.0 - 2.0).clamp(0.0, 1.0);
    RGBColor(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// Render a clipped row-major grid as a color-mapped image.
///
/// `values` has `rows * cols` elements, `rows` = sensor x extent. Cell
/// colors are normalized over the grid's own value range.
pub fn render_heatmap(
    out_path: &Path,
    values: &[f64],
    rows: usize,
    cols: usize,
    cfg: &HeatmapChartConfig,
) -> Result<(), Box<dyn Error>> {
    assert_eq!(values.len(), rows * cols, "grid shape mismatch");

    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for &v in values {
        v_min = v_min.min(v);
        v_max = v_max.max(v);
    }
    // Degenerate range (e.g. clipped constant grid) renders all-black.
    let span = (v_max - v_min).max(1e-12);

    let root =
        BitMapBackend::new(out_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (main, bar) = root.split_horizontally(cfg.width - COLORBAR_WIDTH);

    let mut chart = ChartBuilder::on(&main)
        .caption(format!("Event heatmap ({rows}x{cols})"), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..rows as i32, 0i32..cols as i32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("X")
        .y_desc("Y")
        .draw()?;

    chart.draw_series((0..rows).flat_map(|x| {
        (0..cols).map(move |y| {
            let v = values[x * cols + y];
            let t = (v - v_min) / span;
            Rectangle::new(
                [(x as i32, y as i32), (x as i32 + 1, y as i32 + 1)],
                hot_color(t).filled(),
            )
        })
    }))?;

    draw_colorbar(&bar, v_min, v_max)?;

    root.present()?;
    info!(path = %out_path.display(), "wrote heatmap");
    Ok(())
}

fn draw_colorbar(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    v_min: f64,
    v_max: f64,
) -> Result<(), Box<dyn Error>> {
    let span = (v_max - v_min).max(1e-12);
    let mut bar = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(0)
        .y_label_area_size(70)
        .build_cartesian_2d(0i32..1i32, v_min..(v_min + span))?;

    // No `x_labels(0)`: plotters' i32 key-point search overflows when asked
    // for zero labels; the zero-size x label area already hides them.
    bar.configure_mesh()
        .disable_x_mesh()
        .y_desc("Frequency")
        .draw()?;

    let step = span / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let lo = v_min + i as f64 * step;
        let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
        Rectangle::new([(0, lo), (1, lo + step)], hot_color(t).filled())
    }))?;

    Ok(())
}
