//! Benchmark summary tables.
//!
//! A summary file is a header-less CSV with exactly four columns in fixed
//! order: node count, CPU count, GPU flag (0/1), elapsed time. Rows are
//! aggregated per (nodes, cpus, gpu) group into mean and sample standard
//! deviation of the elapsed time for the error-bar charts.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

/// Errors returned by the table loader.
#[derive(Debug)]
pub enum TableError {
    /// The file could not be read.
    Io(std::io::Error),
    /// A row could not be parsed (1-indexed line number).
    Parse { line: usize, message: String },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "read table: {err}"),
            TableError::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            TableError::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

/// One benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchRow {
    pub nodes: u32,
    pub cpus: u32,
    pub gpu: bool,
    pub seconds: f64,
}

/// Load a header-less `nodes,cpus,gpu,time` CSV. Empty lines are skipped.
pub fn load_table(path: &Path) -> Result<Vec<BenchRow>, TableError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for (idx, line_result) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(line, line_num)?);
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded summary table");
    Ok(rows)
}

fn parse_row(line: &str, line_num: usize) -> Result<BenchRow, TableError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(TableError::Parse {
            line: line_num,
            message: format!("expected 4 columns, found {}", parts.len()),
        });
    }

    for (idx, name) in ["nodes", "cpus", "gpu", "time"].iter().enumerate() {
        if parts[idx].is_empty() {
            return Err(TableError::Parse {
                line: line_num,
                message: format!("empty {name} column"),
            });
        }
    }

    let nodes = parts[0].parse::<u32>().map_err(|err| TableError::Parse {
        line: line_num,
        message: format!("nodes: {err}"),
    })?;
    let cpus = parts[1].parse::<u32>().map_err(|err| TableError::Parse {
        line: line_num,
        message: format!("cpus: {err}"),
    })?;
    let gpu = match parts[2] {
        "0" => false,
        "1" => true,
        other => {
            return Err(TableError::Parse {
                line: line_num,
                message: format!("gpu flag must be 0 or 1, got {other:?}"),
            });
        }
    };
    let seconds = parts[3].parse::<f64>().map_err(|err| TableError::Parse {
        line: line_num,
        message: format!("time: {err}"),
    })?;

    Ok(BenchRow {
        nodes,
        cpus,
        gpu,
        seconds,
    })
}

/// Aggregated elapsed time for one (nodes, cpus, gpu) group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupStat {
    pub nodes: u32,
    pub cpus: u32,
    pub gpu: bool,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); 0 for singleton groups.
    pub stddev: f64,
    pub runs: usize,
}

/// Group rows by (nodes, cpus, gpu) and aggregate elapsed time.
///
/// Results come back sorted by nodes, then cpus, then gpu, which keeps the
/// error-bar series monotone along the x axis.
pub fn group_stats(rows: &[BenchRow]) -> Vec<GroupStat> {
    let mut groups: BTreeMap<(u32, u32, bool), Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.nodes, row.cpus, row.gpu))
            .or_default()
            .push(row.seconds);
    }

    groups
        .into_iter()
        .map(|((nodes, cpus, gpu), times)| {
            let n = times.len();
            let mean = times.iter().sum::<f64>() / n as f64;
            let stddev = if n > 1 {
                let ss = times.iter().map(|&t| (t - mean) * (t - mean)).sum::<f64>();
                (ss / (n - 1) as f64).sqrt()
            } else {
                0.0
            };
            GroupStat {
                nodes,
                cpus,
                gpu,
                mean,
                stddev,
                runs: n,
            }
        })
        .collect()
}

/// Distinct CPU counts present, ascending.
pub fn unique_cpus(rows: &[BenchRow]) -> Vec<u32> {
    let mut cpus: Vec<u32> = rows.iter().map(|r| r.cpus).collect();
    cpus.sort_unstable();
    cpus.dedup();
    cpus
}

/// Distinct GPU flags present; false before true.
pub fn unique_gpus(rows: &[BenchRow]) -> Vec<bool> {
    let mut gpus: Vec<bool> = rows.iter().map(|r| r.gpu).collect();
    gpus.sort_unstable();
    gpus.dedup();
    gpus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_accepts_whitespace() {
        let row = parse_row(" 2, 16, 1, 12.5 ", 1).unwrap();
        assert_eq!(
            row,
            BenchRow {
                nodes: 2,
                cpus: 16,
                gpu: true,
                seconds: 12.5
            }
        );
    }

    #[test]
    fn parse_row_rejects_bad_gpu_flag() {
        let err = parse_row("2,16,2,12.5", 7).unwrap_err();
        match err {
            TableError::Parse { line, message } => {
                assert_eq!(line, 7);
                assert!(message.contains("gpu flag"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn singleton_group_has_zero_stddev() {
        let rows = [BenchRow {
            nodes: 1,
            cpus: 8,
            gpu: false,
            seconds: 3.0,
        }];
        let stats = group_stats(&rows);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].stddev, 0.0);
        assert_eq!(stats[0].runs, 1);
    }
}
