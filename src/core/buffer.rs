//! Fixed-layout binary loaders for sample buffers.
//!
//! The producers write flat arrays of native-endian u32: 10_000 elements for
//! a millisecond activity series, 640x480 elements (row-major, row index =
//! sensor x) for an event-count matrix. Length is the only validated
//! property; a count mismatch aborts before any statistic is computed.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Elements in a millisecond activity series.
pub const SERIES_LEN: usize = 10_000;
/// Sensor columns (matrix rows as stored).
pub const MATRIX_ROWS: usize = 640;
/// Sensor rows (matrix columns as stored).
pub const MATRIX_COLS: usize = 480;

/// Errors returned by the binary loaders.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// Decoded element count does not match the expected fixed length.
    ShapeMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "read input: {err}"),
            LoadError::ShapeMismatch { expected, found } => {
                write!(f, "expected {expected} u32 values, found {found}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::ShapeMismatch { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// A fixed-shape grid of counts, row-major as stored by the producer.
///
/// Orientation is a caller contract: the stored row index is the sensor x
/// coordinate, and the display transpose is a presentation step that does
/// not belong to the loader.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols + col]
    }

    /// Flat row-major view of the underlying counts.
    pub fn values(&self) -> &[u32] {
        &self.data
    }
}

fn decode_u32(bytes: &[u8], expected: usize) -> Result<Vec<u32>, LoadError> {
    let found = bytes.len() / 4;
    if found != expected || bytes.len() % 4 != 0 {
        return Err(LoadError::ShapeMismatch { expected, found });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Read a whole file as a series of native-endian u32 values.
///
/// Fails with [`LoadError::ShapeMismatch`] when the decoded element count
/// differs from `expected_len`.
pub fn load_series(path: &Path, expected_len: usize) -> Result<Vec<u32>, LoadError> {
    let bytes = fs::read(path)?;
    let values = decode_u32(&bytes, expected_len)?;
    debug!(path = %path.display(), len = values.len(), "loaded series");
    Ok(values)
}

/// Read the same flat u32 layout and reshape it into `rows` x `cols`.
///
/// Fails with [`LoadError::ShapeMismatch`] when the total element count
/// differs from `rows * cols`.
pub fn load_matrix(path: &Path, rows: usize, cols: usize) -> Result<Matrix, LoadError> {
    let bytes = fs::read(path)?;
    let data = decode_u32(&bytes, rows * cols)?;
    debug!(path = %path.display(), rows, cols, "loaded matrix");
    Ok(Matrix { rows, cols, data })
}
