use approx::assert_abs_diff_eq;

use eventscope::core::stats::{ClipMode, ClipSpec, clip_in_place, normalize, summarize};

#[test]
fn two_sided_bounds_straddle_the_mean() {
    let values: Vec<f64> = (0..1000).map(|i| (i % 37) as f64).collect();
    let summary = summarize(&values);
    for k in [1.0, 3.0] {
        let bounds = ClipSpec::new(k, ClipMode::TwoSided).bounds(&summary);
        let lower = bounds.lower.unwrap();
        let upper = bounds.upper.unwrap();
        assert!(lower <= summary.mean);
        assert!(summary.mean <= upper);
    }
}

#[test]
fn bounds_are_deterministic() {
    let values: Vec<f64> = (0..500).map(|i| ((i * 7919) % 101) as f64).collect();
    let a = ClipSpec::new(1.0, ClipMode::TwoSided).bounds(&summarize(&values));
    let b = ClipSpec::new(1.0, ClipMode::TwoSided).bounds(&summarize(&values));
    assert_eq!(a, b);
}

#[test]
fn clip_is_idempotent() {
    let mut values: Vec<f64> = (0..200).map(|i| (i * i % 997) as f64).collect();
    let bounds = ClipSpec::new(1.0, ClipMode::TwoSided).bounds(&summarize(&values));

    clip_in_place(&mut values, &bounds);
    let once = values.clone();
    clip_in_place(&mut values, &bounds);
    assert_eq!(values, once);
}

#[test]
fn clipped_values_stay_within_bounds() {
    let mut values: Vec<f64> = (0..200).map(|i| (i * 13 % 211) as f64).collect();
    values.push(1e9);
    values.push(-1e9);
    let bounds = ClipSpec::new(1.0, ClipMode::TwoSided).bounds(&summarize(&values));
    let original = values.clone();

    clip_in_place(&mut values, &bounds);

    let lower = bounds.lower.unwrap();
    let upper = bounds.upper.unwrap();
    for (i, (&before, &after)) in original.iter().zip(values.iter()).enumerate() {
        assert!(after >= lower && after <= upper, "index {i} out of bounds");
        if before >= lower && before <= upper {
            assert_eq!(before, after, "in-range value at {i} must be unchanged");
        }
    }
}

#[test]
fn constant_series_bounds_collapse() {
    // End-to-end scenario: 10000 values all equal to 5000.
    let mut values = vec![5000.0f64; 10_000];
    let original = values.clone();

    let summary = normalize(&mut values, &ClipSpec::new(1.0, ClipMode::TwoSided));

    assert_abs_diff_eq!(summary.mean, 5000.0);
    assert_abs_diff_eq!(summary.stddev, 0.0);
    assert_eq!(values, original, "clip with collapsed bounds is identity");
}

#[test]
fn single_extreme_outlier_lands_on_upper_bound() {
    // End-to-end scenario: one u32::MAX among otherwise-small matrix values,
    // one-sided clipping at mean + 3*stddev.
    let total = 640 * 480;
    let mut values: Vec<f64> = (0..total).map(|i| (i % 5) as f64).collect();
    values[1234] = u32::MAX as f64;
    let original = values.clone();

    let spec = ClipSpec::new(3.0, ClipMode::UpperOnly);
    let bounds = spec.bounds(&summarize(&values));
    let upper = bounds.upper.unwrap();
    assert!(bounds.lower.is_none());

    clip_in_place(&mut values, &bounds);

    assert_abs_diff_eq!(values[1234], upper);
    for (i, (&before, &after)) in original.iter().zip(values.iter()).enumerate() {
        if i != 1234 {
            assert_eq!(before, after, "non-outlier at {i} must be unchanged");
        }
    }
}

#[test]
fn one_sided_clip_leaves_small_values_alone() {
    let mut values = vec![0.0, 1.0, 2.0, 100.0];
    let bounds = ClipSpec::new(1.0, ClipMode::UpperOnly).bounds(&summarize(&values));
    clip_in_place(&mut values, &bounds);
    assert_eq!(&values[..3], &[0.0, 1.0, 2.0]);
    assert!(values[3] <= bounds.upper.unwrap() + f64::EPSILON);
}
