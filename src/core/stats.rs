//! Distribution summary and outlier clipping.
//!
//! A single pass computes the population mean and standard deviation; the
//! clip bounds are `mean +/- k*stddev` with the multiplier and sidedness
//! supplied by the caller. No statistic is recomputed after clipping.

/// Population mean and standard deviation over a full buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub stddev: f64,
}

/// Compute population statistics (no sample correction, no outlier
/// exclusion, single pass).
///
/// Degenerate for an empty buffer; callers guarantee non-empty input via
/// the fixed expected lengths.
pub fn summarize(values: &[f64]) -> Summary {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n;
    Summary {
        mean,
        stddev: var.sqrt(),
    }
}

/// Which side(s) of the distribution to clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// Leave the buffer untouched.
    None,
    /// Clamp values above `mean + k*stddev` only.
    UpperOnly,
    /// Clamp into `[mean - k*stddev, mean + k*stddev]`.
    TwoSided,
}

/// Caller-supplied clipping configuration (multiplier and sidedness).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    pub sigma: f64,
    pub mode: ClipMode,
}

impl ClipSpec {
    pub fn new(sigma: f64, mode: ClipMode) -> Self {
        Self { sigma, mode }
    }

    /// Derive concrete bounds from a distribution summary.
    pub fn bounds(&self, summary: &Summary) -> ClipBounds {
        match self.mode {
            ClipMode::None => ClipBounds {
                lower: None,
                upper: None,
            },
            ClipMode::UpperOnly => ClipBounds {
                lower: None,
                upper: Some(summary.mean + self.sigma * summary.stddev),
            },
            ClipMode::TwoSided => ClipBounds {
                lower: Some(summary.mean - self.sigma * summary.stddev),
                upper: Some(summary.mean + self.sigma * summary.stddev),
            },
        }
    }
}

/// Derived clamp bounds; `lower` is unset for one-sided clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// Elementwise clamp into the given bounds. Values in range are unchanged;
/// applying the same bounds twice is a no-op.
pub fn clip_in_place(values: &mut [f64], bounds: &ClipBounds) {
    for v in values.iter_mut() {
        if let Some(lower) = bounds.lower {
            if *v < lower {
                *v = lower;
            }
        }
        if let Some(upper) = bounds.upper {
            if *v > upper {
                *v = upper;
            }
        }
    }
}

/// Summarize, derive bounds, and clamp in one step.
///
/// Returns the summary of the original (pre-clip) buffer so callers can log
/// what the bounds were derived from.
pub fn normalize(values: &mut [f64], spec: &ClipSpec) -> Summary {
    let summary = summarize(values);
    let bounds = spec.bounds(&summary);
    clip_in_place(values, &bounds);
    summary
}
