//! Measurement input records.
//!
//! A measurement is one analysis run of a client repository. It can be
//! supplied with native field names or as the analysis tool's report, whose
//! field names are the tool's display labels and which leaves several counts
//! to be derived from percentages.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::Metric;
use crate::error::Result;

/// Architecture types the analysis tool reports for designs without a single
/// core.
const NON_CORE_ARCHITECTURES: [&str; 2] = ["Hierarchical", "Multi-Core"];

fn not_set() -> String {
    "Not set".to_string()
}

/// Raw values of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub architecture_type: String,
    pub propagation_cost: f64,
    pub useful_lines_of_code: u64,
    #[serde(default)]
    pub num_classes: u64,
    #[serde(default)]
    pub num_files: u64,
    #[serde(default)]
    pub num_files_in_core: u64,
    pub core_size: f64,
    #[serde(default)]
    pub num_files_overly_complex: u64,
    pub percent_files_overly_complex: f64,
    #[serde(default)]
    pub useful_lines_of_comments: u64,
    pub useful_comment_density: f64,
    #[serde(default)]
    pub duplicate_uloc: u64,
    pub percent_duplicate_uloc: f64,
    #[serde(default = "not_set")]
    pub revision_id: String,
    #[serde(default)]
    pub is_baseline: bool,
    pub is_core: bool,
}

impl Measurement {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::CoreSize => self.core_size,
            Metric::PropagationCost => self.propagation_cost,
            Metric::PercentFilesOverlyComplex => self.percent_files_overly_complex,
            Metric::PercentDuplicateUloc => self.percent_duplicate_uloc,
            Metric::UsefulCommentDensity => self.useful_comment_density,
        }
    }

    /// Read a measurement from a JSON file in either input shape.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The shape is picked from the keys first, so a missing field is
    /// reported by name.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let is_report = value
            .as_object()
            .is_some_and(|fields| REPORT_KEYS.iter().any(|k| fields.contains_key(*k)));
        if is_report {
            let report: AnalysisReport = serde_json::from_value(value)?;
            Ok(report.into())
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }
}

/// Keys only the analysis tool's report uses.
const REPORT_KEYS: [&str; 3] = [
    "Useful Lines of Code (ULOC)",
    "Propagation Cost",
    "Core Size",
];

/// Metrics as the analysis tool reports them.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "Files")]
    pub files: u64,
    #[serde(rename = "Core Size")]
    pub core_size: f64,
    #[serde(rename = "Useful Lines of Code (ULOC)")]
    pub uloc: u64,
    #[serde(rename = "Useful Comment Density")]
    pub comment_density: f64,
    #[serde(rename = "Overly Complex Files", default)]
    pub percent_overly_complex: f64,
    #[serde(rename = "Architecture Type", default)]
    pub architecture_type: String,
    #[serde(rename = "Propagation Cost")]
    pub propagation_cost: f64,
    #[serde(rename = "Classes", default)]
    pub classes: u64,
    #[serde(rename = "Core", alias = "core", default)]
    pub core: Option<bool>,
    #[serde(default)]
    pub duplicate_uloc: u64,
    pub percent_duplicate_uloc: f64,
    #[serde(default)]
    pub revision_id: Option<String>,
    #[serde(default)]
    pub is_baseline: bool,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Whether the tool's architecture type has a single core.
pub fn is_core_architecture(architecture_type: &str) -> bool {
    !NON_CORE_ARCHITECTURES.contains(&architecture_type)
}

/// `round(total * percent / 100)` as a count.
fn share_of(total: u64, percent: f64) -> u64 {
    (total as f64 * percent / 100.0).round().max(0.0) as u64
}

impl From<AnalysisReport> for Measurement {
    fn from(r: AnalysisReport) -> Self {
        let is_core = r
            .core
            .unwrap_or_else(|| is_core_architecture(&r.architecture_type));
        Self {
            date: r.date,
            num_files_in_core: share_of(r.files, r.core_size),
            useful_lines_of_comments: share_of(r.uloc, r.comment_density),
            num_files_overly_complex: share_of(r.files, r.percent_overly_complex),
            architecture_type: r.architecture_type,
            propagation_cost: r.propagation_cost,
            useful_lines_of_code: r.uloc,
            num_classes: r.classes,
            num_files: r.files,
            core_size: r.core_size,
            percent_files_overly_complex: r.percent_overly_complex,
            useful_comment_density: r.comment_density,
            duplicate_uloc: r.duplicate_uloc,
            percent_duplicate_uloc: r.percent_duplicate_uloc,
            revision_id: r.revision_id.unwrap_or_else(not_set),
            is_baseline: r.is_baseline,
            is_core,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
