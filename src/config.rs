//! TOML-backed render configuration.
//!
//! Chart canvas sizes and the output directory live here; per-invocation
//! clipping choices stay on the command line. A missing config file is not
//! an error: defaults are written back so the knobs are discoverable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesChartConfig {
    #[serde(default = "SeriesChartConfig::default_width")]
    pub width: u32,
    #[serde(default = "SeriesChartConfig::default_height")]
    pub height: u32,
}

impl SeriesChartConfig {
    fn default_width() -> u32 {
        1200
    }
    fn default_height() -> u32 {
        600
    }
}

impl Default for SeriesChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapChartConfig {
    #[serde(default = "HeatmapChartConfig::default_width")]
    pub width: u32,
    #[serde(default = "HeatmapChartConfig::default_height")]
    pub height: u32,
}

impl HeatmapChartConfig {
    fn default_width() -> u32 {
        1480
    }
    fn default_height() -> u32 {
        1080
    }
}

impl Default for HeatmapChartConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryChartConfig {
    /// Canvas for the per-CPU (GPU on/off) charts.
    #[serde(default = "SummaryChartConfig::default_small")]
    pub small: (u32, u32),
    /// Canvas for the per-GPU (CPU sweep) charts.
    #[serde(default = "SummaryChartConfig::default_large")]
    pub large: (u32, u32),
}

impl SummaryChartConfig {
    fn default_small() -> (u32, u32) {
        (600, 400)
    }
    fn default_large() -> (u32, u32) {
        (1000, 600)
    }
}

impl Default for SummaryChartConfig {
    fn default() -> Self {
        Self {
            small: Self::default_small(),
            large: Self::default_large(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub series: SeriesChartConfig,
    #[serde(default)]
    pub heatmap: HeatmapChartConfig,
    #[serde(default)]
    pub summary: SummaryChartConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: Self::default_output_dir(),
            series: SeriesChartConfig::default(),
            heatmap: HeatmapChartConfig::default(),
            summary: SummaryChartConfig::default(),
        }
    }
}

impl RenderConfig {
    fn default_output_dir() -> String {
        "images".to_string()
    }

    /// Read the config at `path`, falling back to defaults on parse or read
    /// failure. When the file does not exist, defaults are written back.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}; using defaults");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}; using defaults");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                warn!("failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
