//! Output path derivation.
//!
//! Every tool writes into one directory (created on demand) and names its
//! PNG after the input file's stem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Input file stem, or "output" when the path has none.
pub fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

/// Create `out_dir` if absent and return `out_dir/{stem}.png`.
pub fn png_path(input: &Path, out_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    Ok(out_dir.join(format!("{}.png", input_stem(input))))
}

/// Like [`png_path`] but with a suffix appended to the stem, for tools that
/// emit one PNG per group.
pub fn png_path_with_suffix(input: &Path, out_dir: &Path, suffix: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    Ok(out_dir.join(format!("{}_{}.png", input_stem(input), suffix)))
}
