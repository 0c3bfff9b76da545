//! Command-line argument definitions for the three plotting binaries.

use clap::{Parser, ValueEnum};

use crate::core::stats::{ClipMode, ClipSpec};

/// Sidedness of the outlier clamp, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClipArg {
    /// No clipping.
    None,
    /// Clamp above `mean + k*stddev` only.
    Upper,
    /// Clamp into `[mean - k*stddev, mean + k*stddev]`.
    Both,
}

impl ClipArg {
    pub fn to_mode(self) -> ClipMode {
        match self {
            ClipArg::None => ClipMode::None,
            ClipArg::Upper => ClipMode::UpperOnly,
            ClipArg::Both => ClipMode::TwoSided,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plot a 10000 ms activity series from a .bin file")]
pub struct ActivityArgs {
    /// Input binary file (10000 native-endian u32 values)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to render config TOML
    #[arg(long, default_value = "plotconfig.toml")]
    pub config: String,

    /// Outlier clipping mode
    #[arg(long, value_enum, default_value_t = ClipArg::None)]
    pub clip: ClipArg,

    /// Clip multiplier k in mean +/- k*stddev
    #[arg(long, default_value_t = 3.0)]
    pub clip_sigma: f64,
}

impl ActivityArgs {
    pub fn clip_spec(&self) -> ClipSpec {
        ClipSpec::new(self.clip_sigma, self.clip.to_mode())
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render a 640x480 event-count matrix as a heatmap")]
pub struct HeatmapArgs {
    /// Input binary file (640x480 native-endian u32 values, row-major)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to render config TOML
    #[arg(long, default_value = "plotconfig.toml")]
    pub config: String,

    /// Outlier clipping mode
    #[arg(long, value_enum, default_value_t = ClipArg::Both)]
    pub clip: ClipArg,

    /// Clip multiplier k in mean +/- k*stddev
    #[arg(long, default_value_t = 1.0)]
    pub clip_sigma: f64,
}

impl HeatmapArgs {
    pub fn clip_spec(&self) -> ClipSpec {
        ClipSpec::new(self.clip_sigma, self.clip.to_mode())
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plot grouped error-bar charts from a benchmark summary CSV")]
pub struct SummaryArgs {
    /// Input CSV file (header-less: nodes,cpus,gpu,time)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to render config TOML
    #[arg(long, default_value = "plotconfig.toml")]
    pub config: String,
}
