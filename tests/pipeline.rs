//! End-to-end loader + normalizer scenarios over real files.

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;

use eventscope::core::buffer::{self, MATRIX_COLS, MATRIX_ROWS, SERIES_LEN};
use eventscope::core::stats::{ClipMode, ClipSpec, normalize};

fn unique_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "eventscope_pipeline_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

fn write_u32_file(path: &PathBuf, values: &[u32]) {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for v in values {
        bytes.extend_from_slice(&v.to_ne_bytes());
    }
    fs::write(path, bytes).unwrap();
}

#[test]
fn constant_series_survives_normalization_unchanged() {
    let path = unique_path("constant.bin");
    write_u32_file(&path, &vec![5000u32; SERIES_LEN]);

    let raw = buffer::load_series(&path, SERIES_LEN).unwrap();
    let mut values: Vec<f64> = raw.iter().map(|&v| v as f64).collect();
    let summary = normalize(&mut values, &ClipSpec::new(1.0, ClipMode::TwoSided));

    assert_abs_diff_eq!(summary.mean, 5000.0);
    assert_abs_diff_eq!(summary.stddev, 0.0);
    assert!(values.iter().all(|&v| v == 5000.0));

    let _ = fs::remove_file(&path);
}

#[test]
fn matrix_outlier_is_flattened_to_the_upper_bound() {
    let path = unique_path("outlier.bin");
    let total = MATRIX_ROWS * MATRIX_COLS;
    let mut raw: Vec<u32> = (0..total).map(|i| (i % 4) as u32).collect();
    raw[42] = u32::MAX;
    write_u32_file(&path, &raw);

    let matrix = buffer::load_matrix(&path, MATRIX_ROWS, MATRIX_COLS).unwrap();
    let mut values: Vec<f64> = matrix.values().iter().map(|&v| v as f64).collect();
    let spec = ClipSpec::new(3.0, ClipMode::UpperOnly);
    let summary = normalize(&mut values, &spec);

    let upper = summary.mean + 3.0 * summary.stddev;
    assert_abs_diff_eq!(values[42], upper);
    for (i, &v) in values.iter().enumerate() {
        if i != 42 {
            assert_eq!(v, (i % 4) as f64, "non-outlier at {i} must be unchanged");
        }
    }

    let _ = fs::remove_file(&path);
}
