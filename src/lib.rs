//! Plotting tools for fixed-format event-detector measurement files.
//!
//! Three binaries share this crate: `activity-plot` (millisecond activity
//! series), `heatmap-plot` (640x480 event-count grids), and `summary-plot`
//! (benchmark timing tables). The core is the loader/normalizer in
//! [`core`]; everything in [`render`] is presentation.

pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod render;
pub mod table;
