//! Measurement loader and normalizer.
//!
//! Turns a raw fixed-layout binary file into a statistically bounded
//! numeric buffer ready for rendering. Nothing in here writes output.

pub mod buffer;
pub mod stats;
