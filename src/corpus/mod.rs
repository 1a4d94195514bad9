//! Reference corpus: one `Case` per historical project.
//!
//! Per-language datasets are CSV files with a header row. Cells for metrics
//! and composite scores may be empty; those load as `None` and are left out
//! of every statistic over the column.

pub mod topics;

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Whether a larger raw value is good or bad for the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// Raw metrics that get a benchmark and feed the composite scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CoreSize,
    PropagationCost,
    PercentFilesOverlyComplex,
    PercentDuplicateUloc,
    UsefulCommentDensity,
}

impl Metric {
    /// Benchmark order: lower-is-better metrics first, then comment density.
    pub const ALL: [Metric; 5] = [
        Metric::CoreSize,
        Metric::PropagationCost,
        Metric::PercentFilesOverlyComplex,
        Metric::PercentDuplicateUloc,
        Metric::UsefulCommentDensity,
    ];

    /// Column name shared by datasets, snapshots and measurements.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CoreSize => "core_size",
            Self::PropagationCost => "propagation_cost",
            Self::PercentFilesOverlyComplex => "percent_files_overly_complex",
            Self::PercentDuplicateUloc => "percent_duplicate_uloc",
            Self::UsefulCommentDensity => "useful_comment_density",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::UsefulCommentDensity => Direction::HigherIsBetter,
            _ => Direction::LowerIsBetter,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four graded composite scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composite {
    Architecture,
    Complexity,
    Clarity,
    Overall,
}

impl Composite {
    pub const ALL: [Composite; 4] = [
        Composite::Architecture,
        Composite::Complexity,
        Composite::Clarity,
        Composite::Overall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Complexity => "complexity",
            Self::Clarity => "clarity",
            Self::Overall => "overall",
        }
    }

    /// Upper bound of the composite: the number of 0–1 subscores it sums.
    pub fn max_value(self) -> f64 {
        match self {
            Self::Clarity => 1.0,
            Self::Complexity => 2.0,
            Self::Architecture => 3.0,
            Self::Overall => 5.0,
        }
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One historical project in the reference corpus.
///
/// Field order is the column order of selection snapshots; `topics` stays
/// last because consumers of the snapshot rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub project_name: String,
    #[serde(
        alias = "useful_lines_of_code_(uloc)",
        deserialize_with = "deserialize_count"
    )]
    pub useful_lines_of_code: u64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub core: bool,
    pub core_size: Option<f64>,
    pub propagation_cost: Option<f64>,
    pub percent_files_overly_complex: Option<f64>,
    pub percent_duplicate_uloc: Option<f64>,
    pub useful_comment_density: Option<f64>,
    pub overall_score: Option<f64>,
    pub architecture_score: Option<f64>,
    pub complexity_score: Option<f64>,
    pub clarity_score: Option<f64>,
    #[serde(default)]
    pub topics: String,
}

impl Case {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::CoreSize => self.core_size,
            Metric::PropagationCost => self.propagation_cost,
            Metric::PercentFilesOverlyComplex => self.percent_files_overly_complex,
            Metric::PercentDuplicateUloc => self.percent_duplicate_uloc,
            Metric::UsefulCommentDensity => self.useful_comment_density,
        }
    }

    pub fn composite(&self, composite: Composite) -> Option<f64> {
        match composite {
            Composite::Architecture => self.architecture_score,
            Composite::Complexity => self.complexity_score,
            Composite::Clarity => self.clarity_score,
            Composite::Overall => self.overall_score,
        }
    }

    /// Parsed topic tags of this case.
    pub fn tags(&self) -> BTreeSet<String> {
        topics::parse_topics(&self.topics)
    }
}

/// All present values of `metric` across `cases`.
pub fn metric_column(cases: &[Case], metric: Metric) -> Vec<f64> {
    cases.iter().filter_map(|c| c.value(metric)).collect()
}

/// All present values of a composite score across `cases`.
pub fn composite_column(cases: &[Case], composite: Composite) -> Vec<f64> {
    cases.iter().filter_map(|c| c.composite(composite)).collect()
}

/// Load every case from a dataset file.
pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::dataset(path, e))?;
    let cases = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Case>, csv::Error>>()
        .map_err(|e| Error::dataset(path, e))?;
    log::debug!("loaded {} cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Render cases as CSV text with a header row.
pub fn write_snapshot(cases: &[Case]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for case in cases {
        writer.serialize(case).map_err(Error::Snapshot)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Parse CSV text produced by [`write_snapshot`].
pub fn read_snapshot(text: &str) -> Result<Vec<Case>> {
    csv::Reader::from_reader(text.as_bytes())
        .deserialize()
        .collect::<std::result::Result<Vec<Case>, csv::Error>>()
        .map_err(Error::Snapshot)
}

/// Accept `true/false` in any case as well as `1/0`.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, found {other:?}"
        ))),
    }
}

/// Accept integral counts written either as integers or as floats (`34516.0`).
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Ok(f.round() as u64),
        _ => Err(serde::de::Error::custom(format!(
            "expected a line count, found {trimmed:?}"
        ))),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
