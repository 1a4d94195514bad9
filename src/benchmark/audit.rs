//! Selection audit: how a benchmark run chose its comparison projects.
//!
//! The audit keeps a CSV snapshot of the selected cases so the scorer can
//! rank a measurement against the full raw columns later, and so the
//! selection can be shown to a reader.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::{self, Case, Metric};
use crate::error::Result;
use crate::select::{SelectionMethod, SelectionResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionAudit {
    pub selection_method: SelectionMethod,
    pub num_projects: usize,
    pub created_at: DateTime<Utc>,
    /// Selected cases as CSV; see [`corpus::write_snapshot`].
    pub project_data: String,
}

impl SelectionAudit {
    pub fn from_selection(selection: &SelectionResult) -> Result<Self> {
        Ok(Self {
            selection_method: selection.method,
            num_projects: selection.cases.len(),
            created_at: Utc::now(),
            project_data: corpus::write_snapshot(&selection.cases)?,
        })
    }

    /// The snapshotted cases.
    pub fn cases(&self) -> Result<Vec<Case>> {
        corpus::read_snapshot(&self.project_data)
    }

    /// Raw values of `metric` across the snapshot, missing cells skipped.
    pub fn column(&self, metric: Metric) -> Result<Vec<f64>> {
        Ok(corpus::metric_column(&self.cases()?, metric))
    }
}

#[cfg(test)]
#[path = "audit_test.rs"]
mod tests;
