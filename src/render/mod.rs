//! Chart rendering on top of plotters.
//!
//! These functions only consume numeric buffers prepared by [`crate::core`]
//! and [`crate::table`]; no statistics are computed here beyond axis ranges.

pub mod heatmap;
pub mod series;
pub mod summary;
