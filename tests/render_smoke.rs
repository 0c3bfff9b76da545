use std::fs;
use std::path::PathBuf;

use eventscope::config::{HeatmapChartConfig, SeriesChartConfig};
use eventscope::render::{heatmap, series, summary};
use eventscope::table::GroupStat;

fn unique_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "eventscope_render_test_{}_{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        name
    ));
    p
}

fn assert_png_written(path: &PathBuf) {
    let meta = fs::metadata(path).expect("output PNG should exist");
    assert!(meta.len() > 0, "output PNG should not be empty");
    let _ = fs::remove_file(path);
}

#[test]
fn series_chart_renders() {
    let out = unique_path("series.png");
    let counts: Vec<f64> = (0..10_000).map(|i| (i % 997) as f64).collect();
    let cfg = SeriesChartConfig {
        width: 600,
        height: 300,
    };

    series::render_series(&out, &counts, &cfg).unwrap();
    assert_png_written(&out);
}

#[test]
fn heatmap_renders_small_grid() {
    let out = unique_path("heatmap.png");
    let rows = 64;
    let cols = 48;
    let values: Vec<f64> = (0..rows * cols).map(|i| (i % 13) as f64).collect();
    let cfg = HeatmapChartConfig {
        width: 400,
        height: 300,
    };

    heatmap::render_heatmap(&out, &values, rows, cols, &cfg).unwrap();
    assert_png_written(&out);
}

#[test]
fn heatmap_handles_constant_grid() {
    let out = unique_path("heatmap_const.png");
    let values = vec![5.0f64; 32 * 24];
    let cfg = HeatmapChartConfig {
        width: 300,
        height: 200,
    };

    heatmap::render_heatmap(&out, &values, 32, 24, &cfg).unwrap();
    assert_png_written(&out);
}

#[test]
fn summary_charts_render() {
    let stats = vec![
        group(1, 8, false, 10.0, 1.0),
        group(2, 8, false, 6.0, 0.5),
        group(1, 8, true, 4.0, 0.4),
        group(2, 8, true, 2.5, 0.2),
        group(1, 16, false, 7.0, 0.7),
        group(2, 16, false, 4.0, 0.3),
    ];

    let out = unique_path("gpu_cmp.png");
    summary::render_gpu_comparison(&out, "Transfer", 8, &stats, 12.0, (600, 400)).unwrap();
    assert_png_written(&out);

    let out = unique_path("cpu_sweep.png");
    summary::render_cpu_sweep(&out, "Transfer", false, &[8, 16], &stats, 12.0, (600, 400))
        .unwrap();
    assert_png_written(&out);
}

fn group(nodes: u32, cpus: u32, gpu: bool, mean: f64, stddev: f64) -> GroupStat {
    GroupStat {
        nodes,
        cpus,
        gpu,
        mean,
        stddev,
        runs: 3,
    }
}
